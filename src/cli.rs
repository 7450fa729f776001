//! Command-line argument parsing
//!
//! Supports:
//! - Creating scripts from templates
//! - Listing and deleting stored scripts
//! - Printing page breaks and the scene outline
//! - Applying a generated suggestion to a stored script

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use storyflow::ai::AiMode;
use storyflow::model::{ScriptId, ScriptLanguage};
use storyflow::templates::DEFAULT_TEMPLATE_ID;

/// Screenplay editor core
#[derive(Parser, Debug)]
#[command(name = "storyflow", version, about = "Screenplay pagination, editing and AI suggestions")]
pub struct CliArgs {
    /// Directory holding stored scripts (defaults to the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a script from a template and print its id
    New {
        #[arg(short, long, default_value = DEFAULT_TEMPLATE_ID)]
        template: String,
        #[arg(short, long, default_value = "en")]
        language: ScriptLanguage,
        #[arg(long)]
        title: Option<String>,
    },
    /// List stored scripts, most recent first
    List,
    /// Print page breaks
    Pages(ScriptSource),
    /// Print the scene outline
    Outline(ScriptSource),
    /// Apply a generated suggestion to a stored script and save it
    Accept {
        id: String,
        /// 1-based block to anchor on; omitted appends to the end
        #[arg(long, value_name = "N")]
        anchor: Option<usize>,
        #[arg(short, long, default_value = "continue")]
        mode: AiMode,
        /// File holding the suggestion text, `-` for stdin
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
    },
    /// Delete a stored script
    Delete { id: String },
}

/// Where to read a script from: the store by id, or a JSON file
#[derive(Args, Debug)]
pub struct ScriptSource {
    /// Stored script id
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub id: Option<String>,

    /// Script JSON file
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// A resolved `ScriptSource`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRef {
    Stored(ScriptId),
    File(PathBuf),
}

impl ScriptSource {
    pub fn resolve(self) -> Result<SourceRef, String> {
        match (self.id, self.file) {
            (Some(id), None) => Ok(SourceRef::Stored(ScriptId(id))),
            (None, Some(path)) => Ok(SourceRef::File(path)),
            _ => Err("Specify either a script id or --file".to_string()),
        }
    }
}

/// Convert a 1-based block number into an index
pub fn anchor_index(anchor: usize, block_count: usize) -> Result<usize, String> {
    if anchor == 0 || anchor > block_count {
        return Err(format!(
            "Anchor {} is out of range (script has {} blocks)",
            anchor, block_count
        ));
    }
    Ok(anchor - 1)
}
