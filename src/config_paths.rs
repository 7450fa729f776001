//! Centralized configuration paths for storyflow
//!
//! Settings and logs live under:
//! - Unix/macOS: `~/.config/storyflow/`
//! - Windows: `%APPDATA%\storyflow\`
//!
//! Scripts live in the platform data directory (`~/.local/share/storyflow/scripts`
//! on Linux) unless `STORYFLOW_DATA_DIR` overrides it.
//!
//! This module is the single source of truth for these paths.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "storyflow";

/// Base config directory for storyflow
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/storyflow`
///   - Else: `~/.config/storyflow`
///
/// Windows:
///   - `%APPDATA%\storyflow`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/storyflow/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/storyflow/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Base data directory, honouring `STORYFLOW_DATA_DIR`
pub fn data_dir() -> Option<PathBuf> {
    env::var_os("STORYFLOW_DATA_DIR")
        .map(PathBuf::from)
        .or_else(|| dirs::data_dir().map(|d| d.join(APP_DIR)))
}

/// `<data>/scripts/` - one JSON file per script plus `index.json`
pub fn scripts_dir() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("scripts"))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&logs)?;
    Ok(logs)
}

/// Ensure scripts dir exists, returning it
pub fn ensure_scripts_dir() -> Result<PathBuf, String> {
    let scripts = scripts_dir().ok_or_else(|| "No data directory available".to_string())?;
    ensure_dir(&scripts)?;
    Ok(scripts)
}
