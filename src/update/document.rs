//! Document update functions: direct content and type edits, script
//! replacement and metadata.

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::{index_of, BlockId, EditorModel};

/// Handle document messages
pub fn update_document(model: &mut EditorModel, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::SetContent { id, content } => {
            edit_block(model, id, |block| {
                if block.content == content {
                    return false;
                }
                block.content = content;
                true
            })
        }
        DocumentMsg::SetType { id, block_type } => edit_block(model, id, |block| {
            if block.block_type == block_type {
                return false;
            }
            block.block_type = block_type;
            true
        }),
        DocumentMsg::NewFromTemplate {
            template_id,
            language,
        } => {
            model.new_from_template(&template_id, language);
            model.read_only = false;
            tracing::info!(
                "Created script {} from template {}",
                model.script.id,
                template_id
            );
            Some(Cmd::content_changed())
        }
        DocumentMsg::Load(script) => {
            tracing::info!("Loaded script {} ({} blocks)", script.id, script.blocks.len());
            model.load_script(script);
            Some(Cmd::batch(vec![Cmd::Repaginate, Cmd::Redraw]))
        }
        DocumentMsg::SetMetadata(metadata) => {
            if model.read_only {
                return None;
            }
            model.script.metadata = metadata;
            model.script.touch();
            Some(Cmd::batch(vec![Cmd::SaveScript, Cmd::Redraw]))
        }
        DocumentMsg::SetReadOnly(read_only) => {
            model.read_only = read_only;
            Some(Cmd::Redraw)
        }
    }
}

/// Apply `edit` to a copy of the sequence and swap it in if it changed
fn edit_block(
    model: &mut EditorModel,
    id: BlockId,
    edit: impl FnOnce(&mut crate::model::Block) -> bool,
) -> Option<Cmd> {
    if model.read_only {
        return None;
    }
    let Some(idx) = index_of(model.blocks(), id) else {
        tracing::debug!("Ignoring edit of unknown block {}", id);
        return None;
    };

    let mut blocks = model.blocks().to_vec();
    if !edit(&mut blocks[idx]) {
        return None;
    }
    model.replace_blocks(blocks);
    Some(Cmd::content_changed())
}
