//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::collections::VecDeque;

use storyflow::ai::{GenerationError, GenerationRequest, TextGenerator};
use storyflow::commands::Cmd;
use storyflow::config::AppSettings;
use storyflow::keymap::{KeyCode, Keystroke, Modifiers};
use storyflow::messages::{AiMsg, EditorMsg, Msg};
use storyflow::model::{Block, BlockId, BlockType, EditorModel, Script, ScriptMetadata};
use storyflow::update::update;

/// Create a block with a fixed id
pub fn block(id: u64, block_type: BlockType, content: &str) -> Block {
    Block::new(BlockId(id), block_type, content)
}

/// Create a test model over `blocks`, focused on the block with id `focus`
pub fn test_model(blocks: Vec<Block>, focus: Option<u64>) -> EditorModel {
    test_model_with_settings(blocks, focus, AppSettings::default())
}

pub fn test_model_with_settings(
    blocks: Vec<Block>,
    focus: Option<u64>,
    settings: AppSettings,
) -> EditorModel {
    let script = Script::new(ScriptMetadata::default(), blocks);
    let mut model = EditorModel::new(script, settings);
    model.focus = focus.map(BlockId);
    model
}

/// A short scene: heading, action, character, dialogue
pub fn scene_model(focus: Option<u64>) -> EditorModel {
    test_model(
        vec![
            block(1, BlockType::SceneHeading, "INT. KITCHEN - NIGHT"),
            block(2, BlockType::Action, "Rain hammers the window."),
            block(3, BlockType::Character, "HERO"),
            block(4, BlockType::Dialogue, "We should go."),
        ],
        focus,
    )
}

/// `count` ACTION blocks of `len` characters each, ids starting at 1
pub fn action_blocks(count: usize, len: usize) -> Vec<Block> {
    (0..count)
        .map(|i| block(i as u64 + 1, BlockType::Action, &"a".repeat(len)))
        .collect()
}

/// Press `key` with `mods` at `caret`
pub fn press_with(model: &mut EditorModel, key: KeyCode, mods: Modifiers, caret: usize) -> Option<Cmd> {
    update(
        model,
        Msg::Editor(EditorMsg::Key {
            stroke: Keystroke::new(key, mods),
            caret,
        }),
    )
}

/// Press `key` with no modifiers at `caret`
pub fn press(model: &mut EditorModel, key: KeyCode, caret: usize) -> Option<Cmd> {
    press_with(model, key, Modifiers::NONE, caret)
}

pub fn types(model: &EditorModel) -> Vec<BlockType> {
    model.blocks().iter().map(|b| b.block_type).collect()
}

pub fn contents(model: &EditorModel) -> Vec<&str> {
    model.blocks().iter().map(|b| b.content.as_str()).collect()
}

pub fn ids(model: &EditorModel) -> Vec<BlockId> {
    model.blocks().iter().map(|b| b.id).collect()
}

/// Focused block id, panicking if focus is empty
pub fn focused(model: &EditorModel) -> BlockId {
    model.focus.expect("model has no focus")
}

/// Text generator that replays canned responses and records requests
#[derive(Debug, Default)]
pub struct ScriptedGenerator {
    pub responses: VecDeque<Result<String, GenerationError>>,
    pub requests: Vec<GenerationRequest>,
}

impl ScriptedGenerator {
    pub fn new(responses: Vec<Result<String, GenerationError>>) -> Self {
        Self {
            responses: responses.into(),
            requests: Vec::new(),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(vec![Ok(text.to_string())])
    }
}

impl TextGenerator for ScriptedGenerator {
    fn generate(&mut self, request: &GenerationRequest) -> Result<String, GenerationError> {
        self.requests.push(request.clone());
        self.responses
            .pop_front()
            .unwrap_or_else(|| Err(GenerationError::Provider("no scripted response".to_string())))
    }
}

/// Run the generation request carried by `cmd` (if any) and feed the
/// result back as `AiMsg::Completed`
pub fn run_generation(
    model: &mut EditorModel,
    generator: &mut impl TextGenerator,
    cmd: Option<Cmd>,
) -> Option<Cmd> {
    let request = cmd.as_ref()?.generation_request()?.clone();
    let result = generator.generate(&request);
    update(model, Msg::Ai(AiMsg::Completed(result)))
}
