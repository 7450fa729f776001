//! AI shortcut strings such as `Alt+C`
//!
//! A shortcut is modifiers and one primary key joined with `+`. Matching is
//! exact: every modifier flag of the event must equal the parsed set, so
//! `Alt+C` does not fire on `Alt+Shift+C`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::types::{KeyCode, Keystroke, Modifiers};
use crate::ai::AiMode;

/// A parsed shortcut
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shortcut {
    pub key: KeyCode,
    pub mods: Modifiers,
}

impl Shortcut {
    /// Parse a string like `"Ctrl+Shift+K"`
    ///
    /// The last segment is the primary key; every other segment must name a
    /// modifier.
    pub fn parse(s: &str) -> Result<Shortcut, ShortcutError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ShortcutError::Empty);
        }

        let mut parts: Vec<&str> = trimmed.split('+').map(str::trim).collect();
        let key_part = parts.pop().unwrap_or_default();
        if key_part.is_empty() {
            return Err(ShortcutError::MissingKey(s.to_string()));
        }

        let mut mods = Modifiers::NONE;
        for part in parts {
            mods = mods
                | match part.to_ascii_lowercase().as_str() {
                    "meta" | "cmd" | "super" | "win" => Modifiers::META,
                    "ctrl" | "control" => Modifiers::CTRL,
                    "alt" | "option" | "opt" => Modifiers::ALT,
                    "shift" => Modifiers::SHIFT,
                    _ => return Err(ShortcutError::UnknownModifier(part.to_string())),
                };
        }

        let key =
            KeyCode::from_name(key_part).ok_or_else(|| ShortcutError::UnknownKey(key_part.to_string()))?;

        Ok(Shortcut { key, mods })
    }

    /// Exact match on modifiers, case-insensitive on the key
    pub fn matches(&self, stroke: &Keystroke) -> bool {
        self.mods == stroke.mods && self.key == stroke.key
    }
}

impl FromStr for Shortcut {
    type Err = ShortcutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shortcut::parse(s)
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Keystroke::new(self.key, self.mods))
    }
}

/// Errors that can occur when parsing shortcuts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortcutError {
    Empty,
    MissingKey(String),
    UnknownModifier(String),
    UnknownKey(String),
}

impl fmt::Display for ShortcutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortcutError::Empty => write!(f, "Shortcut is empty"),
            ShortcutError::MissingKey(s) => write!(f, "No key found in shortcut: {}", s),
            ShortcutError::UnknownModifier(m) => write!(f, "Unknown modifier: {}", m),
            ShortcutError::UnknownKey(k) => write!(f, "Unknown key: {}", k),
        }
    }
}

impl std::error::Error for ShortcutError {}

/// User-configurable AI shortcuts, stored as strings in settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutConfig {
    #[serde(default = "default_ai_continue")]
    pub ai_continue: String,
    #[serde(default = "default_ai_ideas")]
    pub ai_ideas: String,
    #[serde(default = "default_ai_rewrite")]
    pub ai_rewrite: String,
}

fn default_ai_continue() -> String {
    "Alt+C".to_string()
}

fn default_ai_ideas() -> String {
    "Alt+I".to_string()
}

fn default_ai_rewrite() -> String {
    "Alt+R".to_string()
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        Self {
            ai_continue: default_ai_continue(),
            ai_ideas: default_ai_ideas(),
            ai_rewrite: default_ai_rewrite(),
        }
    }
}

impl ShortcutConfig {
    fn entries(&self) -> [(AiMode, &str); 3] {
        [
            (AiMode::Continue, self.ai_continue.as_str()),
            (AiMode::Ideas, self.ai_ideas.as_str()),
            (AiMode::Rewrite, self.ai_rewrite.as_str()),
        ]
    }

    /// AI mode bound to `stroke`, checking continue, ideas, rewrite in order
    ///
    /// Empty or unparsable shortcut strings never match.
    pub fn lookup(&self, stroke: &Keystroke) -> Option<AiMode> {
        self.entries().into_iter().find_map(|(mode, s)| {
            if s.trim().is_empty() {
                return None;
            }
            match Shortcut::parse(s) {
                Ok(shortcut) if shortcut.matches(stroke) => Some(mode),
                Ok(_) => None,
                Err(e) => {
                    tracing::debug!("Ignoring {:?} shortcut {:?}: {}", mode, s, e);
                    None
                }
            }
        })
    }

    /// Parse every non-empty shortcut, reporting the first failure
    pub fn validate(&self) -> Result<(), ShortcutError> {
        for (_, s) in self.entries() {
            if !s.trim().is_empty() {
                Shortcut::parse(s)?;
            }
        }
        Ok(())
    }
}
