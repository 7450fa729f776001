//! Keyboard input model
//!
//! Keystrokes arrive from the UI layer already decoded into `Keystroke`
//! values; the editing state machine dispatches on them and the configured
//! AI shortcuts are matched against them first.
//!
//! ```text
//! UI key event → Keystroke → ShortcutConfig::lookup() → AiMode
//!                          ↘ update_editor() → block transitions
//! ```

mod shortcut;
mod types;

pub use shortcut::{Shortcut, ShortcutConfig, ShortcutError};
pub use types::{KeyCode, Keystroke, Modifiers};
