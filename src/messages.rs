//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::ai::{AiMode, GenerationError};
use crate::keymap::Keystroke;
use crate::model::{BlockId, BlockType, Script, ScriptLanguage, ScriptMetadata};

/// Keyboard and focus messages handled by the editing state machine
#[derive(Debug, Clone)]
pub enum EditorMsg {
    /// A key pressed in the focused block, with the caret offset (in chars)
    /// at the time of the keystroke
    Key { stroke: Keystroke, caret: usize },
    /// Focus a block (mouse click, outline selection)
    Focus(BlockId),
    /// Drop focus
    Blur,
}

/// Document-level edits
#[derive(Debug, Clone)]
pub enum DocumentMsg {
    /// Replace a block's text (typing, paste)
    SetContent { id: BlockId, content: String },
    /// Change a block's type (type picker)
    SetType { id: BlockId, block_type: BlockType },
    /// Replace the open script with a fresh one from a template
    NewFromTemplate {
        template_id: String,
        language: ScriptLanguage,
    },
    /// Replace the open script with a loaded one
    Load(Script),
    SetMetadata(ScriptMetadata),
    SetReadOnly(bool),
}

/// AI interaction messages
#[derive(Debug, Clone)]
pub enum AiMsg {
    /// Switch mode without generating
    SetMode(AiMode),
    /// Start generation in the given mode
    Trigger(AiMode),
    /// The generator resolved
    Completed(Result<String, GenerationError>),
    /// Stage suggestion text produced outside the generator (piped or pasted)
    Offer(String),
    /// Apply the pending suggestion
    Accept,
    /// Throw the pending suggestion (or error) away
    Dismiss,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Editor(EditorMsg),
    Document(DocumentMsg),
    Ai(AiMsg),
}
