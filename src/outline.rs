//! Scene outline extraction
//!
//! Lists the scene headings of a script with the page each one lands on,
//! for the sidebar scene list and the `outline` CLI command.

use crate::model::{Block, BlockId, BlockType};
use crate::pagination::{page_of, Page};

/// Title shown for a scene heading with no text yet
pub const UNTITLED_SCENE: &str = "UNTITLED";

/// A single scene in the outline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneEntry {
    pub id: BlockId,
    /// 1-based scene number
    pub number: usize,
    pub title: String,
    /// 1-based page number, if the heading appears in `pages`
    pub page: Option<usize>,
}

/// Extract every scene heading in order
pub fn scene_outline(blocks: &[Block], pages: &[Page]) -> Vec<SceneEntry> {
    blocks
        .iter()
        .filter(|b| b.block_type == BlockType::SceneHeading)
        .enumerate()
        .map(|(i, b)| {
            let title = b.content.trim();
            SceneEntry {
                id: b.id,
                number: i + 1,
                title: if title.is_empty() {
                    UNTITLED_SCENE.to_string()
                } else {
                    title.to_string()
                },
                page: page_of(pages, b.id),
            }
        })
        .collect()
}
