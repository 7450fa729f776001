//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod block;
pub mod script;

pub use block::{index_of, Block, BlockId, BlockIdGenerator, BlockType};
pub use script::{
    now_epoch_millis, Script, ScriptId, ScriptLanguage, ScriptMetadata, ScriptSummary,
};

use crate::ai::AiState;
use crate::config::AppSettings;
use crate::layout::LayoutProfile;
use crate::outline::{scene_outline, SceneEntry};
use crate::pagination::{paginate, Page};
use crate::templates;

/// The complete editor model
#[derive(Debug, Clone)]
pub struct EditorModel {
    /// The open script
    pub script: Script,
    /// Block that receives keystrokes; `None` before anything is selected
    pub focus: Option<BlockId>,
    pub ai: AiState,
    pub settings: AppSettings,
    pub ids: BlockIdGenerator,
    /// Shared/preview scripts ignore every edit
    pub read_only: bool,
    pub layout: LayoutProfile,
}

impl EditorModel {
    /// Model around an existing script, focused on its first block
    pub fn new(script: Script, settings: AppSettings) -> Self {
        let mut ids = BlockIdGenerator::new();
        ids.observe(&script.blocks);
        let focus = script.blocks.first().map(|b| b.id);
        Self {
            script,
            focus,
            ai: AiState::default(),
            settings,
            ids,
            read_only: false,
            layout: LayoutProfile::default(),
        }
    }

    /// Model around the default English screenplay
    pub fn with_default_script(settings: AppSettings) -> Self {
        let mut ids = BlockIdGenerator::new();
        let script = Script::default_script(&mut ids);
        let mut model = Self::new(script, settings);
        model.ids = ids;
        model
    }

    /// Replace the open script, keeping settings
    ///
    /// The id generator is bumped past the loaded ids and AI state is reset.
    pub fn load_script(&mut self, script: Script) {
        self.ids.observe(&script.blocks);
        self.focus = script.blocks.first().map(|b| b.id);
        self.script = script;
        self.ai.reset();
    }

    /// Start a fresh script from a template id
    pub fn new_from_template(&mut self, template_id: &str, language: ScriptLanguage) {
        let template = templates::find(template_id);
        let script = Script::from_template(template, language, &mut self.ids);
        self.load_script(script);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.script.blocks
    }

    /// Swap in a complete new block sequence and mark the script modified
    pub fn replace_blocks(&mut self, blocks: Vec<Block>) {
        self.script.blocks = blocks;
        self.script.touch();
    }

    /// Index of the focused block, if focus refers to a block in the script
    pub fn focused_index(&self) -> Option<usize> {
        self.focus.and_then(|id| index_of(&self.script.blocks, id))
    }

    pub fn focused_block(&self) -> Option<&Block> {
        self.focused_index().map(|idx| &self.script.blocks[idx])
    }

    pub fn pages(&self) -> Vec<Page> {
        paginate(&self.script.blocks, &self.layout)
    }

    pub fn outline(&self) -> Vec<SceneEntry> {
        scene_outline(&self.script.blocks, &self.pages())
    }

    /// System prompt persona for the script's template
    pub fn system_prompt(&self) -> &'static str {
        templates::for_script(self.script.metadata.template_id.as_deref()).system_prompt
    }

    /// Validate model invariants, panicking with `context` on violation
    ///
    /// Block ids must be unique and the generator must be ahead of all of them.
    #[cfg(debug_assertions)]
    pub fn assert_invariants_with_context(&self, context: &str) {
        let mut seen = std::collections::HashSet::new();
        for block in &self.script.blocks {
            assert!(
                seen.insert(block.id),
                "[{}] duplicate block id {}",
                context,
                block.id
            );
        }
        let mut probe = self.ids.clone();
        let next = probe.next_id();
        assert!(
            self.script.blocks.iter().all(|b| b.id < next),
            "[{}] id generator at {} is behind existing blocks",
            context,
            next
        );
    }

    #[cfg(not(debug_assertions))]
    pub fn assert_invariants_with_context(&self, _context: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_focuses_first_block() {
        let model = EditorModel::with_default_script(AppSettings::default());
        assert!(!model.blocks().is_empty());
        assert_eq!(model.focused_index(), Some(0));
        assert_eq!(model.script.metadata.title, "Untitled Screenplay");
    }

    #[test]
    fn test_load_script_reseeds_ids() {
        let mut model = EditorModel::with_default_script(AppSettings::default());
        let script = Script::new(
            ScriptMetadata::default(),
            vec![Block::new(BlockId(500), BlockType::Action, "x")],
        );
        model.load_script(script);

        assert_eq!(model.focus, Some(BlockId(500)));
        assert!(model.ids.next_id().0 > 500);
    }

    #[test]
    fn test_stale_focus_has_no_index() {
        let mut model = EditorModel::with_default_script(AppSettings::default());
        model.focus = Some(BlockId(9999));
        assert_eq!(model.focused_index(), None);
        assert!(model.focused_block().is_none());
    }
}
