//! Script persistence
//!
//! The editor core never touches storage directly; it is handed a
//! [`DocumentStore`] and works on in-memory scripts. `FileStore` keeps one
//! JSON file per script plus an `index.json` of summaries so listing does
//! not have to parse every script.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::model::{Script, ScriptId, ScriptSummary};

const INDEX_FILE: &str = "index.json";

/// Errors that can occur when loading or saving scripts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    IoError(String),
    ParseError(String),
    NotFound(ScriptId),
    /// Id contains characters that cannot be used as a file name
    InvalidId(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::IoError(e) => write!(f, "IO error: {}", e),
            StoreError::ParseError(e) => write!(f, "Parse error: {}", e),
            StoreError::NotFound(id) => write!(f, "Script not found: {}", id),
            StoreError::InvalidId(id) => write!(f, "Invalid script id: {}", id),
        }
    }
}

impl std::error::Error for StoreError {}

/// Load/save/list/delete scripts by id
pub trait DocumentStore {
    fn load(&self, id: &ScriptId) -> Result<Script, StoreError>;

    /// Insert or replace the script and its index entry
    fn save(&mut self, script: &Script) -> Result<(), StoreError>;

    /// Summaries, most recently modified first
    fn list(&self) -> Result<Vec<ScriptSummary>, StoreError>;

    fn delete(&mut self, id: &ScriptId) -> Result<(), StoreError>;

    /// The most recently modified script, if any can be loaded
    fn most_recent(&self) -> Option<Script> {
        let summaries = match self.list() {
            Ok(summaries) => summaries,
            Err(e) => {
                tracing::warn!("Failed to read script index: {}", e);
                return None;
            }
        };
        summaries.iter().find_map(|summary| match self.load(&summary.id) {
            Ok(script) => Some(script),
            Err(e) => {
                tracing::warn!("Skipping unreadable script {}: {}", summary.id, e);
                None
            }
        })
    }
}

fn sort_recent_first(summaries: &mut [ScriptSummary]) {
    summaries.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
}

/// In-memory store, used by tests and as a scratch store
#[derive(Debug, Default)]
pub struct MemoryStore {
    scripts: HashMap<ScriptId, Script>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self, id: &ScriptId) -> Result<Script, StoreError> {
        self.scripts
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    fn save(&mut self, script: &Script) -> Result<(), StoreError> {
        self.scripts.insert(script.id.clone(), script.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<ScriptSummary>, StoreError> {
        let mut summaries: Vec<_> = self.scripts.values().map(Script::summary).collect();
        sort_recent_first(&mut summaries);
        Ok(summaries)
    }

    fn delete(&mut self, id: &ScriptId) -> Result<(), StoreError> {
        self.scripts
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }
}

/// Directory of JSON files
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `root`
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|e| {
            StoreError::IoError(format!("Failed to create {}: {}", root.display(), e))
        })?;
        Ok(Self { root })
    }

    /// Store in the default scripts directory
    pub fn open_default() -> Result<Self, StoreError> {
        let root = crate::config_paths::ensure_scripts_dir().map_err(StoreError::IoError)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn script_path(&self, id: &ScriptId) -> Result<PathBuf, StoreError> {
        let valid = !id.0.is_empty()
            && id
                .0
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidId(id.0.clone()));
        }
        Ok(self.root.join(format!("{}.json", id)))
    }

    fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }

    fn read_index(&self) -> Result<Vec<ScriptSummary>, StoreError> {
        let path = self.index_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let contents = std::fs::read_to_string(&path).map_err(|e| StoreError::IoError(e.to_string()))?;
        serde_json::from_str(&contents).map_err(|e| StoreError::ParseError(e.to_string()))
    }

    fn write_index(&self, index: &[ScriptSummary]) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(index).map_err(|e| StoreError::ParseError(e.to_string()))?;
        std::fs::write(self.index_path(), contents).map_err(|e| StoreError::IoError(e.to_string()))
    }
}

impl DocumentStore for FileStore {
    fn load(&self, id: &ScriptId) -> Result<Script, StoreError> {
        let path = self.script_path(id)?;
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(id.clone()))
            }
            Err(e) => return Err(StoreError::IoError(e.to_string())),
        };
        serde_json::from_str(&contents).map_err(|e| StoreError::ParseError(e.to_string()))
    }

    fn save(&mut self, script: &Script) -> Result<(), StoreError> {
        let path = self.script_path(&script.id)?;
        let contents =
            serde_json::to_string_pretty(script).map_err(|e| StoreError::ParseError(e.to_string()))?;
        std::fs::write(&path, contents).map_err(|e| StoreError::IoError(e.to_string()))?;

        let mut index = self.read_index()?;
        index.retain(|s| s.id != script.id);
        index.push(script.summary());
        self.write_index(&index)?;

        tracing::debug!("Saved script {} to {}", script.id, path.display());
        Ok(())
    }

    fn list(&self) -> Result<Vec<ScriptSummary>, StoreError> {
        let mut index = self.read_index()?;
        sort_recent_first(&mut index);
        Ok(index)
    }

    fn delete(&mut self, id: &ScriptId) -> Result<(), StoreError> {
        let path = self.script_path(id)?;
        let mut index = self.read_index()?;
        let before = index.len();
        index.retain(|s| &s.id != id);

        let existed = path.exists();
        if existed {
            std::fs::remove_file(&path).map_err(|e| StoreError::IoError(e.to_string()))?;
        }
        if index.len() != before {
            self.write_index(&index)?;
        }
        if !existed && index.len() == before {
            return Err(StoreError::NotFound(id.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlockIdGenerator, Script};

    fn script(title: &str, last_modified: u64) -> Script {
        let mut ids = BlockIdGenerator::new();
        let mut s = Script::default_script(&mut ids);
        s.metadata.title = title.to_string();
        s.last_modified = last_modified;
        s
    }

    #[test]
    fn test_memory_store_lists_recent_first() {
        let mut store = MemoryStore::new();
        store.save(&script("old", 1)).unwrap();
        store.save(&script("new", 5)).unwrap();

        let titles: Vec<_> = store.list().unwrap().into_iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["new", "old"]);
        assert_eq!(store.most_recent().unwrap().metadata.title, "new");
    }

    #[test]
    fn test_memory_store_delete_missing() {
        let mut store = MemoryStore::new();
        let id = ScriptId::from("nope");
        assert_eq!(store.delete(&id), Err(StoreError::NotFound(id)));
    }

    #[test]
    fn test_file_store_rejects_path_like_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        let id = ScriptId::from("../etc/passwd");
        assert_eq!(store.load(&id), Err(StoreError::InvalidId(id.0.clone())));
    }
}
