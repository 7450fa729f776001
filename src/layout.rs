//! Layout profile - the single table of page and per-type layout constants
//!
//! Both on-screen pagination and any print formatter read from here, so the
//! page estimate and the printed output cannot drift apart.
//!
//! Heights are pixel-equivalents at 96 DPI for a monospace 12pt face.

use crate::model::BlockType;

/// Horizontal placement of a block on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Visual rules for one block type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockStyle {
    pub margin_top: u32,
    pub margin_bottom: u32,
    pub align: Alignment,
    /// Share of the text column the block may occupy
    pub width_fraction: f32,
    pub bold: bool,
    pub italic: bool,
    pub uppercase: bool,
}

impl BlockStyle {
    /// Vertical space the block consumes besides its text lines
    pub const fn margin_budget(&self) -> u32 {
        self.margin_top + self.margin_bottom
    }
}

/// Page geometry used by the pagination estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutProfile {
    /// Usable content height of one page
    pub page_capacity: u32,
    /// Monospace columns before a soft wrap
    pub chars_per_line: u32,
    pub line_height: u32,
    /// Gap added after every block
    pub block_gap: u32,
}

impl Default for LayoutProfile {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl LayoutProfile {
    /// US Letter at 96 DPI, less page padding and per-block gaps
    pub const STANDARD: LayoutProfile = LayoutProfile {
        page_capacity: 840,
        chars_per_line: 60,
        line_height: 27,
        block_gap: 4,
    };

    /// Style table, one entry per block type
    pub const fn style(&self, block_type: BlockType) -> BlockStyle {
        match block_type {
            BlockType::SceneHeading => BlockStyle {
                margin_top: 32,
                margin_bottom: 16,
                align: Alignment::Left,
                width_fraction: 1.0,
                bold: true,
                italic: false,
                uppercase: true,
            },
            BlockType::Action => BlockStyle {
                margin_top: 0,
                margin_bottom: 16,
                align: Alignment::Left,
                width_fraction: 1.0,
                bold: false,
                italic: false,
                uppercase: false,
            },
            BlockType::Character => BlockStyle {
                margin_top: 16,
                margin_bottom: 0,
                align: Alignment::Center,
                width_fraction: 2.0 / 3.0,
                bold: true,
                italic: false,
                uppercase: true,
            },
            BlockType::Dialogue => BlockStyle {
                margin_top: 0,
                margin_bottom: 16,
                align: Alignment::Center,
                width_fraction: 0.75,
                bold: false,
                italic: false,
                uppercase: false,
            },
            BlockType::Parenthetical => BlockStyle {
                margin_top: 0,
                margin_bottom: 0,
                align: Alignment::Center,
                width_fraction: 0.5,
                bold: false,
                italic: true,
                uppercase: false,
            },
            BlockType::Transition => BlockStyle {
                margin_top: 24,
                margin_bottom: 16,
                align: Alignment::Right,
                width_fraction: 1.0 / 3.0,
                bold: true,
                italic: false,
                uppercase: true,
            },
        }
    }
}
