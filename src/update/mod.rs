//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod ai;
mod document;
mod editor;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::EditorModel;

#[cfg(debug_assertions)]
use crate::tracing::FocusSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use ai::update_ai;
pub use document::update_document;
pub use editor::update_editor;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut EditorModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut EditorModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Editor(m) => editor::update_editor(model, m),
        Msg::Document(m) => document::update_document(model, m),
        Msg::Ai(m) => ai::update_ai(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after focus state and logs diffs for debugging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut EditorModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = FocusSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    if let Some(diff) = before.diff(&FocusSnapshot::from_model(model)) {
        debug!(target: "focus", %diff, "state changed");
    }

    model.assert_invariants_with_context(&msg_name);
    result
}

/// Get a display name for a message type
///
/// Suggestion and script payloads are summarised rather than dumped.
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::{AiMsg, DocumentMsg, EditorMsg};

    match msg {
        Msg::Editor(EditorMsg::Key { stroke, caret }) => {
            format!("Editor::Key({} @{})", stroke, caret)
        }
        Msg::Editor(m) => format!("Editor::{:?}", m),
        Msg::Document(DocumentMsg::SetContent { id, content }) => {
            format!("Document::SetContent({}, {} chars)", id, content.chars().count())
        }
        Msg::Document(DocumentMsg::Load(script)) => format!("Document::Load({})", script.id),
        Msg::Document(m) => format!("Document::{:?}", m),
        Msg::Ai(AiMsg::Completed(Ok(text))) => {
            format!("Ai::Completed(Ok({} chars))", text.chars().count())
        }
        Msg::Ai(AiMsg::Offer(text)) => format!("Ai::Offer({} chars)", text.chars().count()),
        Msg::Ai(m) => format!("Ai::{:?}", m),
    }
}
