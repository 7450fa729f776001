//! Suggestion acceptor - turns generated text back into blocks
//!
//! Generators are asked to tag every line (`[SCENE] INT. ROOM - DAY`) but
//! don't always comply, so untagged lines fall back to a best-effort type
//! guess. Misclassification is accepted; the writer can Tab-cycle the type.

use super::AiMode;
use crate::model::{index_of, Block, BlockId, BlockIdGenerator, BlockType};

/// Scene heading prefixes recognised on untagged lines (case-insensitive)
pub const SCENE_PREFIXES: &[&str] = &["INT.", "EXT.", "内.", "外."];

/// Untagged all-caps lines shorter than this are taken as character cues
pub const CHARACTER_MAX_CHARS: usize = 20;

/// Sentence terminators that rule out a character cue
const SENTENCE_TERMINALS: &[char] = &['.', '。'];

/// Strip a leading `[...]` tag and the whitespace after it
///
/// The tag ends at the first `]` on the first line. Text without a leading
/// tag is returned unchanged.
pub fn strip_leading_tag(text: &str) -> &str {
    let Some(rest) = text.strip_prefix('[') else {
        return text;
    };
    let first_line = rest.split('\n').next().unwrap_or_default();
    match first_line.find(']') {
        Some(end) => rest[end + 1..].trim_start(),
        None => text,
    }
}

/// Split a `[TAG] content` line into its block type and content
///
/// At most one space after the tag is consumed.
fn parse_tagged_line(line: &str) -> Option<(BlockType, &str)> {
    let rest = line.strip_prefix('[')?;
    let end = rest.find(']')?;
    let block_type = BlockType::from_tag(&rest[..end])?;

    let after = &rest[end + 1..];
    let content = match after.chars().next() {
        Some(c) if c.is_whitespace() => &after[c.len_utf8()..],
        _ => after,
    };
    Some((block_type, content))
}

fn starts_with_ignore_case(line: &str, prefix: &str) -> bool {
    line.get(..prefix.len())
        .is_some_and(|head| head.to_uppercase() == prefix.to_uppercase())
}

/// Guess the type of an untagged line
pub fn infer_block_type(line: &str) -> BlockType {
    if SCENE_PREFIXES
        .iter()
        .any(|prefix| starts_with_ignore_case(line, prefix))
    {
        return BlockType::SceneHeading;
    }

    let looks_like_cue = line == line.to_uppercase()
        && line.chars().count() < CHARACTER_MAX_CHARS
        && !line.contains(SENTENCE_TERMINALS);
    if looks_like_cue {
        BlockType::Character
    } else {
        BlockType::Action
    }
}

/// Parse generated text into fresh blocks, one per non-blank line
pub fn parse_suggestion(text: &str, ids: &mut BlockIdGenerator) -> Vec<Block> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let (block_type, content) =
                parse_tagged_line(line).unwrap_or_else(|| (infer_block_type(line), line));
            Block::new(ids.next_id(), block_type, content)
        })
        .collect()
}

/// Apply a suggestion to `blocks`, returning the new sequence
///
/// - `Rewrite` replaces the anchor block's content (tag stripped), keeping
///   its id and type.
/// - `Continue`/`Ideas` insert the parsed blocks right after the anchor.
///
/// With no anchor the parsed blocks are appended (rewrite does nothing). An
/// anchor that is not in `blocks` leaves the sequence unchanged.
pub fn apply_suggestion(
    blocks: &[Block],
    anchor: Option<BlockId>,
    text: &str,
    mode: AiMode,
    ids: &mut BlockIdGenerator,
) -> Vec<Block> {
    let anchor_idx = match anchor {
        Some(id) => match index_of(blocks, id) {
            Some(idx) => Some(idx),
            None => {
                tracing::debug!("Suggestion anchor {} not in script, ignoring", id);
                return blocks.to_vec();
            }
        },
        None => None,
    };

    let mut next = blocks.to_vec();
    match mode {
        AiMode::Rewrite => {
            if let Some(idx) = anchor_idx {
                next[idx].content = strip_leading_tag(text).to_string();
            }
        }
        AiMode::Continue | AiMode::Ideas => {
            let inserted = parse_suggestion(text, ids);
            let at = anchor_idx.map_or(next.len(), |idx| idx + 1);
            tracing::debug!(count = inserted.len(), at, "Inserting suggested blocks");
            next.splice(at..at, inserted);
        }
    }
    next
}
