//! Application settings persistence
//!
//! Stores user preferences in `~/.config/storyflow/config.yaml`.
//!
//! Every field has its own serde default, so a file written by an older
//! version (or edited by hand) loads with the missing fields filled in
//! individually rather than falling back wholesale to defaults.

use serde::{Deserialize, Serialize};

use crate::ai::{GenerationError, PromptLimits};
use crate::keymap::ShortcutConfig;
use crate::model::BlockType;

/// Text generation provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Gemini,
    Deepseek,
}

impl Provider {
    /// Environment variable holding this provider's API key
    pub const fn api_key_var(self) -> &'static str {
        match self {
            Provider::Gemini => "GEMINI_API_KEY",
            Provider::Deepseek => "DEEPSEEK_API_KEY",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Provider::Gemini => "Gemini",
            Provider::Deepseek => "DeepSeek",
        }
    }
}

/// Per-block-type text colour as `#rrggbb`; empty means the theme default
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSettings {
    pub scene_heading: String,
    pub action: String,
    pub character: String,
    pub dialogue: String,
    pub parenthetical: String,
    pub transition: String,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            scene_heading: "#4f46e5".to_string(),
            action: String::new(),
            character: "#0891b2".to_string(),
            dialogue: String::new(),
            parenthetical: "#64748b".to_string(),
            transition: "#ea580c".to_string(),
        }
    }
}

impl ColorSettings {
    /// All-default colours (plain black and white)
    pub fn classic() -> Self {
        Self {
            scene_heading: String::new(),
            action: String::new(),
            character: String::new(),
            dialogue: String::new(),
            parenthetical: String::new(),
            transition: String::new(),
        }
    }

    /// Configured colour for a block type, `None` when using the default
    pub fn color_for(&self, block_type: BlockType) -> Option<&str> {
        let color = match block_type {
            BlockType::SceneHeading => &self.scene_heading,
            BlockType::Action => &self.action,
            BlockType::Character => &self.character,
            BlockType::Dialogue => &self.dialogue,
            BlockType::Parenthetical => &self.parenthetical,
            BlockType::Transition => &self.transition,
        };
        (!color.is_empty()).then_some(color.as_str())
    }
}

/// Application settings that persist across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Schema version for forward compatibility
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub provider: Provider,
    #[serde(default = "default_deepseek_model")]
    pub deepseek_model: String,
    #[serde(default)]
    pub shortcuts: ShortcutConfig,
    #[serde(default)]
    pub colors: ColorSettings,
    /// Apply completed suggestions without asking
    #[serde(default)]
    pub auto_accept_ai: bool,
    #[serde(default = "default_ai_context_blocks")]
    pub ai_context_blocks: usize,
    #[serde(default = "default_ai_output_blocks")]
    pub ai_output_blocks: usize,
}

fn default_version() -> u32 {
    AppSettings::CURRENT_VERSION
}

fn default_deepseek_model() -> String {
    "deepseek-chat".to_string()
}

fn default_ai_context_blocks() -> usize {
    50
}

fn default_ai_output_blocks() -> usize {
    10
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            provider: Provider::default(),
            deepseek_model: default_deepseek_model(),
            shortcuts: ShortcutConfig::default(),
            colors: ColorSettings::default(),
            auto_accept_ai: false,
            ai_context_blocks: default_ai_context_blocks(),
            ai_output_blocks: default_ai_output_blocks(),
        }
    }
}

impl AppSettings {
    pub const CURRENT_VERSION: u32 = 1;

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(settings) => {
                    tracing::info!("Loaded config from {}", path.display());
                    settings
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse settings YAML, upgrading older versions
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        let mut settings: Self = serde_yaml::from_str(yaml)?;
        settings.migrate();
        Ok(settings)
    }

    /// Bring a loaded config up to the current version
    fn migrate(&mut self) {
        if self.version < Self::CURRENT_VERSION {
            tracing::info!(
                "Upgrading config from version {} to {}",
                self.version,
                Self::CURRENT_VERSION
            );
            self.version = Self::CURRENT_VERSION;
        }
        if let Err(e) = self.shortcuts.validate() {
            tracing::warn!("Invalid AI shortcut in config: {}", e);
        }
    }

    /// Save settings to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// API key for the selected provider, read from the environment
    pub fn api_key(&self) -> Result<String, GenerationError> {
        std::env::var(self.provider.api_key_var())
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GenerationError::MissingApiKey(self.provider.display_name().to_string()))
    }

    pub fn prompt_limits(&self) -> PromptLimits {
        PromptLimits {
            context_blocks: self.ai_context_blocks,
            output_blocks: self.ai_output_blocks,
        }
    }
}
