//! Shared helpers for benchmarks

use storyflow::config::AppSettings;
use storyflow::model::{Block, BlockId, BlockType, EditorModel, Script, ScriptMetadata};

/// A screenplay of `blocks` blocks cycling through a typical scene rhythm
#[allow(dead_code)]
pub fn make_blocks(blocks: usize) -> Vec<Block> {
    const RHYTHM: [(BlockType, &str); 6] = [
        (BlockType::SceneHeading, "INT. WAREHOUSE - NIGHT"),
        (
            BlockType::Action,
            "Crates tower in the dark. A single bulb swings overhead, throwing long shadows across the concrete floor.",
        ),
        (BlockType::Character, "MARLOWE"),
        (BlockType::Parenthetical, "(under his breath)"),
        (BlockType::Dialogue, "Somebody's been here. Recently."),
        (BlockType::Transition, "CUT TO:"),
    ];

    (0..blocks)
        .map(|i| {
            let (block_type, content) = RHYTHM[i % RHYTHM.len()];
            Block::new(BlockId(i as u64 + 1), block_type, content)
        })
        .collect()
}

/// An editor model over `blocks` blocks, focused in the middle
#[allow(dead_code)]
pub fn make_model(blocks: usize) -> EditorModel {
    let script = Script::new(ScriptMetadata::default(), make_blocks(blocks));
    let mut model = EditorModel::new(script, AppSettings::default());
    model.focus = model.blocks().get(blocks / 2).map(|b| b.id);
    model
}
