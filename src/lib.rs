//! Storyflow - screenplay editor core
//!
//! This crate provides the block model, pagination, the keystroke editing
//! state machine and AI suggestion handling for a screenplay editor,
//! implementing the Elm Architecture pattern.

pub mod ai;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod keymap;
pub mod layout;
pub mod messages;
pub mod model;
pub mod outline;
pub mod pagination;
pub mod store;
pub mod templates;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::AppSettings;
pub use messages::Msg;
pub use model::{Block, BlockId, BlockType, EditorModel, Script};
pub use pagination::{paginate, Page};
