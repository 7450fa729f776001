//! Script document - metadata plus the ordered block sequence

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use super::block::{Block, BlockIdGenerator};
use crate::templates::{self, ScriptTemplate};

/// Unique identifier for a stored script
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScriptId(pub String);

static SCRIPT_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

impl ScriptId {
    /// Generate a new id from the clock plus a process-local counter
    pub fn generate() -> Self {
        let nanos = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        let seq = SCRIPT_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        Self(format!("{}-{}", to_base36(nanos), to_base36(seq)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScriptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScriptId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Language the script is written in (drives template text and AI prompts)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptLanguage {
    #[default]
    En,
    Zh,
    /// English with Chinese translation alongside
    Dual,
}

impl std::str::FromStr for ScriptLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(ScriptLanguage::En),
            "zh" | "chinese" => Ok(ScriptLanguage::Zh),
            "dual" => Ok(ScriptLanguage::Dual),
            _ => Err(format!("Unknown script language: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptMetadata {
    pub title: String,
    pub author: String,
    /// Draft label, e.g. "First Draft"
    pub draft: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(default)]
    pub language: ScriptLanguage,
}

impl Default for ScriptMetadata {
    fn default() -> Self {
        Self {
            title: "Untitled Screenplay".to_string(),
            author: "Unknown Writer".to_string(),
            draft: "First Draft".to_string(),
            template_id: Some(templates::DEFAULT_TEMPLATE_ID.to_string()),
            language: ScriptLanguage::En,
        }
    }
}

/// A screenplay document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub id: ScriptId,
    pub metadata: ScriptMetadata,
    pub blocks: Vec<Block>,
    /// Unix epoch milliseconds
    #[serde(default)]
    pub last_modified: u64,
}

impl Script {
    pub fn new(metadata: ScriptMetadata, blocks: Vec<Block>) -> Self {
        Self {
            id: ScriptId::generate(),
            metadata,
            blocks,
            last_modified: now_epoch_millis(),
        }
    }

    /// The standard template in English, titled "Untitled Screenplay"
    pub fn default_script(ids: &mut BlockIdGenerator) -> Self {
        let template = templates::find(templates::DEFAULT_TEMPLATE_ID);
        let mut script = Self::from_template(template, ScriptLanguage::En, ids);
        script.metadata = ScriptMetadata::default();
        script
    }

    /// Fresh script seeded from a template's opening blocks
    ///
    /// Every block gets a new id. Chinese and dual-language scripts use the
    /// template's Chinese blocks when it has them.
    pub fn from_template(
        template: &ScriptTemplate,
        language: ScriptLanguage,
        ids: &mut BlockIdGenerator,
    ) -> Self {
        let blocks = template
            .initial_blocks(language)
            .iter()
            .map(|&(block_type, content)| Block::new(ids.next_id(), block_type, content))
            .collect();

        let metadata = ScriptMetadata {
            title: format!("Untitled {}", template.name),
            author: "Unknown".to_string(),
            draft: "First Draft".to_string(),
            template_id: Some(template.id.to_string()),
            language,
        };

        Self::new(metadata, blocks)
    }

    pub fn summary(&self) -> ScriptSummary {
        ScriptSummary {
            id: self.id.clone(),
            title: self.metadata.title.clone(),
            last_modified: self.last_modified,
        }
    }

    /// Mark the script as modified now
    pub fn touch(&mut self) {
        self.last_modified = now_epoch_millis();
    }
}

/// Index entry for a stored script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptSummary {
    pub id: ScriptId,
    pub title: String,
    pub last_modified: u64,
}

pub fn now_epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
