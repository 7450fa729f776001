//! Page layout estimation
//!
//! Greedy sequential packing of blocks into fixed-capacity pages. Heights are
//! estimated from character counts rather than measured, so this runs without
//! fonts and is cheap enough to redo on every keystroke.
//!
//! A block taller than a whole page is never split: it gets a page to itself
//! and overflows it.

use crate::layout::LayoutProfile;
use crate::model::{Block, BlockId};

/// One page of laid-out blocks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// 1-based page number
    pub number: usize,
    pub blocks: Vec<Block>,
    /// Sum of the estimated heights of `blocks`
    pub height: u32,
}

impl Page {
    fn new(number: usize) -> Self {
        Self {
            number,
            blocks: Vec::new(),
            height: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn contains(&self, id: BlockId) -> bool {
        self.blocks.iter().any(|b| b.id == id)
    }
}

/// Estimated rendered height of a block, gap included
pub fn estimate_block_height(block: &Block, profile: &LayoutProfile) -> u32 {
    let explicit_lines = block.content.split('\n').count() as u32;
    let chars = block.char_len() as u32;
    let wrapped_lines = chars.div_ceil(profile.chars_per_line.max(1));

    let lines = explicit_lines.max(wrapped_lines);
    let text_height = lines * profile.line_height;

    profile.style(block.block_type).margin_budget() + text_height + profile.block_gap
}

/// Lay `blocks` out into pages
///
/// Concatenating the pages' blocks yields `blocks` unchanged. An empty input
/// yields exactly one empty page.
pub fn paginate(blocks: &[Block], profile: &LayoutProfile) -> Vec<Page> {
    let mut pages = Vec::new();
    let mut current = Page::new(1);

    for block in blocks {
        let height = estimate_block_height(block, profile);

        // Strictly greater: an exact fit stays on the current page
        if current.height + height > profile.page_capacity && !current.is_empty() {
            let number = current.number + 1;
            pages.push(std::mem::replace(&mut current, Page::new(number)));
        }

        current.blocks.push(block.clone());
        current.height += height;
    }

    if !current.is_empty() || pages.is_empty() {
        pages.push(current);
    }

    tracing::trace!(blocks = blocks.len(), pages = pages.len(), "paginated");
    pages
}

/// Paginate with the standard profile
pub fn paginate_default(blocks: &[Block]) -> Vec<Page> {
    paginate(blocks, &LayoutProfile::STANDARD)
}

/// 1-based number of the page holding `id`
pub fn page_of(pages: &[Page], id: BlockId) -> Option<usize> {
    pages.iter().find(|p| p.contains(id)).map(|p| p.number)
}
