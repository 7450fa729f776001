//! Script blocks - the typed units a screenplay is made of
//!
//! A script is an ordered `Vec<Block>`; insertion order is narrative order.
//! The per-type transition tables (Enter, Tab cycling, AI tag names) live here
//! as exhaustive matches so adding a block type fails to compile until every
//! table handles it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Opaque, process-unique block identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub u64);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out fresh block ids, never reusing one
#[derive(Debug, Clone)]
pub struct BlockIdGenerator {
    next: u64,
}

impl Default for BlockIdGenerator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl BlockIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id
    pub fn next_id(&mut self) -> BlockId {
        let id = BlockId(self.next);
        self.next += 1;
        id
    }

    /// Bump the counter past every id in `blocks`
    ///
    /// Called whenever a script is loaded so ids minted afterwards cannot
    /// collide with persisted ones.
    pub fn observe(&mut self, blocks: &[Block]) {
        if let Some(max) = blocks.iter().map(|b| b.id.0).max() {
            self.next = self.next.max(max + 1);
        }
    }
}

/// The six screenplay element kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockType {
    SceneHeading,
    Action,
    Character,
    Dialogue,
    Parenthetical,
    Transition,
}

impl BlockType {
    /// Tab-cycling order
    pub const ALL: [BlockType; 6] = [
        BlockType::SceneHeading,
        BlockType::Action,
        BlockType::Character,
        BlockType::Dialogue,
        BlockType::Parenthetical,
        BlockType::Transition,
    ];

    /// Type of the block created when Enter is pressed on a block of this type
    pub const fn next_on_enter(self) -> BlockType {
        match self {
            BlockType::SceneHeading => BlockType::Action,
            BlockType::Action => BlockType::Action,
            BlockType::Character => BlockType::Dialogue,
            BlockType::Dialogue => BlockType::Character,
            BlockType::Parenthetical => BlockType::Dialogue,
            BlockType::Transition => BlockType::SceneHeading,
        }
    }

    /// Next type in Tab order, wrapping
    pub const fn cycle_forward(self) -> BlockType {
        match self {
            BlockType::SceneHeading => BlockType::Action,
            BlockType::Action => BlockType::Character,
            BlockType::Character => BlockType::Dialogue,
            BlockType::Dialogue => BlockType::Parenthetical,
            BlockType::Parenthetical => BlockType::Transition,
            BlockType::Transition => BlockType::SceneHeading,
        }
    }

    /// Previous type in Tab order (Shift+Tab), wrapping
    pub const fn cycle_backward(self) -> BlockType {
        match self {
            BlockType::SceneHeading => BlockType::Transition,
            BlockType::Action => BlockType::SceneHeading,
            BlockType::Character => BlockType::Action,
            BlockType::Dialogue => BlockType::Character,
            BlockType::Parenthetical => BlockType::Dialogue,
            BlockType::Transition => BlockType::Parenthetical,
        }
    }

    /// Canonical upper-case name, e.g. `SCENE_HEADING`
    pub const fn as_str(self) -> &'static str {
        match self {
            BlockType::SceneHeading => "SCENE_HEADING",
            BlockType::Action => "ACTION",
            BlockType::Character => "CHARACTER",
            BlockType::Dialogue => "DIALOGUE",
            BlockType::Parenthetical => "PARENTHETICAL",
            BlockType::Transition => "TRANSITION",
        }
    }

    /// Tag used in generated suggestion text, e.g. `SCENE` for `[SCENE]`
    pub const fn tag(self) -> &'static str {
        match self {
            BlockType::SceneHeading => "SCENE",
            BlockType::Action => "ACTION",
            BlockType::Character => "CHARACTER",
            BlockType::Dialogue => "DIALOGUE",
            BlockType::Parenthetical => "PARENTHETICAL",
            BlockType::Transition => "TRANSITION",
        }
    }

    /// Resolve a suggestion tag name (case-insensitive)
    pub fn from_tag(tag: &str) -> Option<BlockType> {
        match tag.to_ascii_uppercase().as_str() {
            "SCENE" => Some(BlockType::SceneHeading),
            "ACTION" => Some(BlockType::Action),
            "CHARACTER" => Some(BlockType::Character),
            "DIALOGUE" => Some(BlockType::Dialogue),
            "PARENTHETICAL" => Some(BlockType::Parenthetical),
            "TRANSITION" => Some(BlockType::Transition),
            _ => None,
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase().replace([' ', '-'], "_");
        BlockType::ALL
            .into_iter()
            .find(|t| t.as_str() == upper)
            .ok_or_else(|| format!("Unknown block type: {}", s))
    }
}

/// A single typed unit of screenplay text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    /// May contain explicit line breaks
    pub content: String,
}

impl Block {
    pub fn new(id: BlockId, block_type: BlockType, content: impl Into<String>) -> Self {
        Self {
            id,
            block_type,
            content: content.into(),
        }
    }

    pub fn empty(id: BlockId, block_type: BlockType) -> Self {
        Self::new(id, block_type, String::new())
    }

    /// Content length in characters (caret offsets are measured in chars)
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// Position of the block with `id`, if present
pub fn index_of(blocks: &[Block], id: BlockId) -> Option<usize> {
    blocks.iter().position(|b| b.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_forward_follows_all_order() {
        for (i, t) in BlockType::ALL.iter().enumerate() {
            let expected = BlockType::ALL[(i + 1) % BlockType::ALL.len()];
            assert_eq!(t.cycle_forward(), expected);
        }
    }

    #[test]
    fn test_cycle_backward_inverts_forward() {
        for t in BlockType::ALL {
            assert_eq!(t.cycle_forward().cycle_backward(), t);
        }
    }

    #[test]
    fn test_tag_round_trip() {
        for t in BlockType::ALL {
            assert_eq!(BlockType::from_tag(t.tag()), Some(t));
            assert_eq!(BlockType::from_tag(&t.tag().to_lowercase()), Some(t));
        }
        assert_eq!(BlockType::from_tag("SCENE_HEADING"), None);
    }

    #[test]
    fn test_from_str_accepts_loose_spelling() {
        assert_eq!("scene heading".parse::<BlockType>(), Ok(BlockType::SceneHeading));
        assert_eq!("DIALOGUE".parse::<BlockType>(), Ok(BlockType::Dialogue));
        assert!("MONTAGE".parse::<BlockType>().is_err());
    }

    #[test]
    fn test_generator_skips_observed_ids() {
        let mut ids = BlockIdGenerator::new();
        let blocks = vec![
            Block::empty(BlockId(7), BlockType::Action),
            Block::empty(BlockId(3), BlockType::Action),
        ];
        ids.observe(&blocks);
        assert_eq!(ids.next_id(), BlockId(8));
        ids.observe(&[]);
        assert_eq!(ids.next_id(), BlockId(9));
    }

    #[test]
    fn test_block_serializes_with_type_field() {
        let block = Block::new(BlockId(1), BlockType::SceneHeading, "INT. ROOM - DAY");
        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"type":"SCENE_HEADING","content":"INT. ROOM - DAY"}"#
        );
    }

    #[test]
    fn test_char_len_counts_chars_not_bytes() {
        let block = Block::new(BlockId(1), BlockType::Action, "外景");
        assert_eq!(block.char_len(), 2);
    }
}
