//! AI-assisted writing
//!
//! The crate never talks to a provider itself. It builds a
//! [`GenerationRequest`], hands it to whatever implements [`TextGenerator`]
//! (via `Cmd::RequestGeneration`), and later applies the returned text with
//! the suggestion acceptor.

mod prompt;
mod suggestion;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::ScriptLanguage;

pub use prompt::{build_request, language_instruction, parse_ideas, script_context, PromptLimits};
pub use suggestion::{
    apply_suggestion, infer_block_type, parse_suggestion, strip_leading_tag,
    CHARACTER_MAX_CHARS, SCENE_PREFIXES,
};

/// Suggestion shown when a rewrite is requested with nothing focused
pub const REWRITE_NEEDS_FOCUS: &str = "Please select a block to rewrite.";

/// What the generator is asked to do
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiMode {
    /// Write the next few blocks
    #[default]
    Continue,
    /// Suggest plot directions
    Ideas,
    /// Rewrite the focused block
    Rewrite,
}

impl fmt::Display for AiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AiMode::Continue => "continue",
            AiMode::Ideas => "ideas",
            AiMode::Rewrite => "rewrite",
        })
    }
}

impl std::str::FromStr for AiMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "continue" => Ok(AiMode::Continue),
            "ideas" => Ok(AiMode::Ideas),
            "rewrite" => Ok(AiMode::Rewrite),
            _ => Err(format!("Unknown AI mode: {}", s)),
        }
    }
}

/// Everything a provider needs to produce one suggestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub mode: AiMode,
    pub system_prompt: String,
    pub user_prompt: String,
    pub language: ScriptLanguage,
}

/// Failure reported by a text generator; shown to the user verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// No API key configured for the selected provider
    MissingApiKey(String),
    /// Network, auth, or provider-side failure
    Provider(String),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::MissingApiKey(provider) => write!(
                f,
                "{} API Key is missing. Please configure it in settings.",
                provider
            ),
            GenerationError::Provider(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for GenerationError {}

/// External text-generation service
///
/// Implementations own transport, auth and timeouts. The returned text is
/// expected to use `[SCENE]`, `[ACTION]`, `[CHARACTER]`, `[DIALOGUE]`,
/// `[PARENTHETICAL]` and `[TRANSITION]` line tags, though untagged output is
/// tolerated.
pub trait TextGenerator {
    fn generate(&mut self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

/// AI interaction state attached to the open script
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AiState {
    pub mode: AiMode,
    /// A request is outstanding; new triggers are ignored until it resolves
    pub in_flight: bool,
    /// Completed suggestion awaiting acceptance
    pub suggestion: Option<String>,
    pub error: Option<String>,
}

impl AiState {
    /// Clear suggestion and error, keeping the mode
    pub fn reset(&mut self) {
        self.in_flight = false;
        self.suggestion = None;
        self.error = None;
    }
}
