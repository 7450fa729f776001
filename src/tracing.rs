//! Logging setup and debug-build state diffing
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=focus=debug,message=debug` - scoped filtering
//! - `RUST_LOG=storyflow::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/storyflow/logs/storyflow.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{BlockId, BlockType, EditorModel};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and defaults to `warn`. Console output
/// goes to stderr so command output on stdout stays clean.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "storyflow.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of block count and focus for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusSnapshot {
    pub block_count: usize,
    pub focus: Option<BlockId>,
    pub focused_index: Option<usize>,
    pub focused_type: Option<BlockType>,
}

impl FocusSnapshot {
    pub fn from_model(model: &EditorModel) -> Self {
        let focused_index = model.focused_index();
        Self {
            block_count: model.blocks().len(),
            focus: model.focus,
            focused_index,
            focused_type: focused_index.map(|idx| model.blocks()[idx].block_type),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &FocusSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.block_count != other.block_count {
            changes.push(format!(
                "blocks: {} → {}",
                self.block_count, other.block_count
            ));
        }
        if self.focus != other.focus || self.focused_index != other.focused_index {
            changes.push(format!(
                "focus: {} → {}",
                describe(self.focus, self.focused_index),
                describe(other.focus, other.focused_index)
            ));
        }
        if self.focus == other.focus && self.focused_type != other.focused_type {
            if let (Some(before), Some(after)) = (self.focused_type, other.focused_type) {
                changes.push(format!("type: {} → {}", before, after));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

fn describe(focus: Option<BlockId>, index: Option<usize>) -> String {
    match (focus, index) {
        (Some(id), Some(idx)) => format!("{}@{}", id, idx),
        (Some(id), None) => format!("{} (stale)", id),
        (None, _) => "none".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(count: usize, focus: u64, idx: usize, ty: BlockType) -> FocusSnapshot {
        FocusSnapshot {
            block_count: count,
            focus: Some(BlockId(focus)),
            focused_index: Some(idx),
            focused_type: Some(ty),
        }
    }

    #[test]
    fn test_no_change_no_diff() {
        let a = snapshot(3, 1, 0, BlockType::Action);
        assert_eq!(a.diff(&a.clone()), None);
    }

    #[test]
    fn test_diff_reports_insert_and_focus_move() {
        let before = snapshot(3, 1, 0, BlockType::Character);
        let after = snapshot(4, 7, 1, BlockType::Dialogue);
        assert_eq!(
            before.diff(&after).unwrap(),
            "blocks: 3 → 4; focus: #1@0 → #7@1"
        );
    }

    #[test]
    fn test_diff_reports_type_cycle() {
        let before = snapshot(3, 1, 0, BlockType::Action);
        let after = snapshot(3, 1, 0, BlockType::Character);
        assert_eq!(before.diff(&after).unwrap(), "type: ACTION → CHARACTER");
    }
}
