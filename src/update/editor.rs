//! Keystroke handling: the block editing state machine.
//!
//! Every transition builds a complete new block vector and swaps it in via
//! `EditorModel::replace_blocks`, so pagination never observes a half-applied
//! edit. A focus id that no longer names a block turns every key into a no-op.

use crate::commands::Cmd;
use crate::keymap::{KeyCode, Keystroke};
use crate::messages::EditorMsg;
use crate::model::{index_of, Block, BlockId, BlockType, EditorModel};

use super::ai::trigger_generation;

/// Handle editor messages
///
/// Returns `None` when the key is not consumed, so the host's native
/// caret movement and text input should proceed.
pub fn update_editor(model: &mut EditorModel, msg: EditorMsg) -> Option<Cmd> {
    match msg {
        EditorMsg::Key { stroke, caret } => handle_key(model, stroke, caret),
        EditorMsg::Focus(id) => {
            if index_of(model.blocks(), id).is_none() {
                tracing::debug!("Ignoring focus on unknown block {}", id);
                return None;
            }
            model.focus = Some(id);
            Some(Cmd::Redraw)
        }
        EditorMsg::Blur => {
            model.focus = None;
            Some(Cmd::Redraw)
        }
    }
}

fn handle_key(model: &mut EditorModel, stroke: Keystroke, caret: usize) -> Option<Cmd> {
    if model.read_only {
        return None;
    }
    // A focus id that no longer exists swallows every key, shortcuts included
    if let Some(id) = model.focus {
        if index_of(model.blocks(), id).is_none() {
            tracing::debug!("Ignoring {} for stale focus {}", stroke, id);
            return None;
        }
    }

    // AI shortcuts win over editing keys
    if let Some(mode) = model.settings.shortcuts.lookup(&stroke) {
        tracing::debug!("Shortcut {} triggers {} generation", stroke, mode);
        return Some(trigger_generation(model, mode).unwrap_or(Cmd::None));
    }

    let idx = model.focused_index()?;
    let len = model.blocks().len();
    let content_len = model.blocks()[idx].char_len();
    let has_prev = idx > 0;
    let has_next = idx + 1 < len;
    let mods = stroke.mods;

    match stroke.key {
        KeyCode::Enter => Some(insert_after(model, idx)),
        KeyCode::Backspace if caret == 0 && has_prev => Some(merge_into_previous(model, idx)),
        KeyCode::Tab => Some(cycle_type(model, idx, !mods.shift())),
        KeyCode::Up if has_prev && (mods.jump() || caret == 0) => Some(focus_index(model, idx - 1)),
        KeyCode::Down if has_next && (mods.jump() || caret == content_len) => {
            Some(focus_index(model, idx + 1))
        }
        KeyCode::Left if caret == 0 && has_prev => Some(focus_index(model, idx - 1)),
        KeyCode::Right if caret == content_len && has_next => Some(focus_index(model, idx + 1)),
        _ => None,
    }
}

/// Enter: blank dialogue drops back to action, anything else opens a new
/// block of the follow-on type after the focused one
///
/// The focused block's text is not split at the caret.
fn insert_after(model: &mut EditorModel, idx: usize) -> Cmd {
    let current = &model.blocks()[idx];
    let (current_id, current_type) = (current.id, current.block_type);

    if current_type == BlockType::Dialogue && current.is_blank() {
        let mut blocks = model.blocks().to_vec();
        blocks[idx].block_type = BlockType::Action;
        model.replace_blocks(blocks);
        return Cmd::content_changed();
    }

    let new_block = Block::empty(model.ids.next_id(), current_type.next_on_enter());
    let new_id = new_block.id;
    tracing::debug!(
        "Inserting {} block {} after {}",
        new_block.block_type,
        new_id,
        current_id
    );

    let mut blocks = model.blocks().to_vec();
    blocks.insert(idx + 1, new_block);
    model.replace_blocks(blocks);
    model.focus = Some(new_id);
    Cmd::content_changed()
}

/// Backspace at offset 0: append this block's text to the previous block
/// and remove it. The previous block keeps its id and type, so a merge can
/// never empty the script.
fn merge_into_previous(model: &mut EditorModel, idx: usize) -> Cmd {
    let mut blocks = model.blocks().to_vec();
    let removed = blocks.remove(idx);
    let prev = &mut blocks[idx - 1];
    prev.content.push_str(&removed.content);
    let prev_id = prev.id;

    tracing::debug!("Merged block {} into {}", removed.id, prev_id);
    model.replace_blocks(blocks);
    model.focus = Some(prev_id);
    Cmd::content_changed()
}

fn cycle_type(model: &mut EditorModel, idx: usize, forward: bool) -> Cmd {
    let mut blocks = model.blocks().to_vec();
    let block = &mut blocks[idx];
    block.block_type = if forward {
        block.block_type.cycle_forward()
    } else {
        block.block_type.cycle_backward()
    };
    model.replace_blocks(blocks);
    Cmd::content_changed()
}

fn focus_index(model: &mut EditorModel, idx: usize) -> Cmd {
    let id: BlockId = model.blocks()[idx].id;
    model.focus = Some(id);
    Cmd::Redraw
}
