//! AI interaction: triggering generation, receiving results and accepting
//! suggestions into the script.

use crate::ai::{apply_suggestion, build_request, parse_ideas, AiMode, REWRITE_NEEDS_FOCUS};
use crate::commands::Cmd;
use crate::messages::AiMsg;
use crate::model::EditorModel;

/// Handle AI messages
pub fn update_ai(model: &mut EditorModel, msg: AiMsg) -> Option<Cmd> {
    match msg {
        AiMsg::SetMode(mode) => {
            model.ai.mode = mode;
            Some(Cmd::Redraw)
        }
        AiMsg::Trigger(mode) => trigger_generation(model, mode),
        AiMsg::Completed(result) => {
            if !model.ai.in_flight {
                tracing::debug!("Dropping generation result with no request outstanding");
                return None;
            }
            model.ai.in_flight = false;

            match result {
                Ok(text) => {
                    stage_suggestion(model, text);
                    if model.settings.auto_accept_ai {
                        return accept_suggestion(model);
                    }
                }
                Err(e) => {
                    tracing::warn!("Generation failed: {}", e);
                    model.ai.suggestion = None;
                    model.ai.error = Some(e.to_string());
                }
            }
            Some(Cmd::Redraw)
        }
        AiMsg::Offer(text) => {
            if model.read_only || model.ai.in_flight {
                return None;
            }
            stage_suggestion(model, text);
            Some(Cmd::Redraw)
        }
        AiMsg::Accept => accept_suggestion(model),
        AiMsg::Dismiss => {
            model.ai.reset();
            Some(Cmd::Redraw)
        }
    }
}

/// Start a generation request in `mode`
///
/// Ignored while read-only or while another request is outstanding. A
/// rewrite with nothing focused produces a hint suggestion instead of a
/// request.
pub(crate) fn trigger_generation(model: &mut EditorModel, mode: AiMode) -> Option<Cmd> {
    if model.read_only {
        return None;
    }
    if model.ai.in_flight {
        tracing::debug!("Generation already in flight, ignoring {} trigger", mode);
        return None;
    }

    model.ai.mode = mode;
    model.ai.suggestion = None;
    model.ai.error = None;

    let request = build_request(
        model.blocks(),
        model.focused_block(),
        mode,
        model.script.metadata.language,
        model.system_prompt(),
        model.settings.prompt_limits(),
    );

    let Some(request) = request else {
        model.ai.suggestion = Some(REWRITE_NEEDS_FOCUS.to_string());
        return Some(Cmd::Redraw);
    };

    model.ai.in_flight = true;
    tracing::debug!("Requesting {} generation", mode);
    Some(Cmd::batch(vec![
        Cmd::Redraw,
        Cmd::RequestGeneration(request),
    ]))
}

fn stage_suggestion(model: &mut EditorModel, text: String) {
    model.ai.error = None;
    model.ai.suggestion = Some(suggestion_text(model.ai.mode, text));
}

/// Ideas come back as a bullet list; keep just the ideas, one per paragraph
fn suggestion_text(mode: AiMode, text: String) -> String {
    if mode != AiMode::Ideas {
        return text;
    }
    let ideas = parse_ideas(&text);
    if ideas.is_empty() {
        text
    } else {
        ideas.join("\n\n")
    }
}

/// Apply the pending suggestion at the focused block and clear AI state
fn accept_suggestion(model: &mut EditorModel) -> Option<Cmd> {
    if model.read_only {
        return None;
    }
    let text = model.ai.suggestion.take()?;
    let mode = model.ai.mode;

    let blocks = apply_suggestion(
        &model.script.blocks,
        model.focus,
        &text,
        mode,
        &mut model.ids,
    );
    model.ai.reset();

    if blocks == model.script.blocks {
        return Some(Cmd::Redraw);
    }
    tracing::debug!(
        "Accepted {} suggestion: {} -> {} blocks",
        mode,
        model.script.blocks.len(),
        blocks.len()
    );
    model.replace_blocks(blocks);
    Some(Cmd::content_changed())
}
