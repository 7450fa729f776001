//! Configuration system tests
//!
//! Tests for config paths, settings defaults and migration, and templates.

use storyflow::ai::GenerationError;
use storyflow::config::{AppSettings, ColorSettings, Provider};
use storyflow::config_paths;
use storyflow::model::{BlockIdGenerator, BlockType, Script, ScriptLanguage};
use storyflow::templates;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("storyflow"));
}

#[test]
fn test_config_file_ends_with_yaml() {
    let path = config_paths::config_file().unwrap();
    assert!(path.to_string_lossy().ends_with("config.yaml"));
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    let config = config_paths::config_dir().unwrap();
    let logs = config_paths::logs_dir().unwrap();
    assert!(logs.starts_with(&config));
}

#[test]
fn test_scripts_dir_is_subdir_of_data() {
    let data = config_paths::data_dir().unwrap();
    let scripts = config_paths::scripts_dir().unwrap();
    assert!(scripts.starts_with(&data));
    assert!(scripts.ends_with("scripts"));
}

// ========================================================================
// App Settings Tests
// ========================================================================

#[test]
fn test_default_settings() {
    let settings = AppSettings::default();
    assert_eq!(settings.version, AppSettings::CURRENT_VERSION);
    assert_eq!(settings.provider, Provider::Gemini);
    assert_eq!(settings.shortcuts.ai_continue, "Alt+C");
    assert_eq!(settings.shortcuts.ai_ideas, "Alt+I");
    assert_eq!(settings.shortcuts.ai_rewrite, "Alt+R");
    assert!(!settings.auto_accept_ai);
    assert_eq!(settings.prompt_limits().context_blocks, 50);
    assert_eq!(settings.prompt_limits().output_blocks, 10);
}

#[test]
fn test_empty_yaml_gives_defaults() {
    let settings = AppSettings::from_yaml("{}").unwrap();
    assert_eq!(settings, AppSettings::default());
}

#[test]
fn test_unversioned_config_is_migrated() {
    let yaml = r#"
provider: deepseek
auto_accept_ai: true
ai_context_blocks: 150
"#;
    let settings = AppSettings::from_yaml(yaml).unwrap();
    assert_eq!(settings.version, AppSettings::CURRENT_VERSION);
    assert_eq!(settings.provider, Provider::Deepseek);
    assert!(settings.auto_accept_ai);
    assert_eq!(settings.ai_context_blocks, 150);
    assert_eq!(settings.ai_output_blocks, 10);
}

#[test]
fn test_invalid_shortcut_still_loads() {
    let settings = AppSettings::from_yaml("shortcuts:\n  ai_rewrite: Hyper+R\n").unwrap();
    assert_eq!(settings.shortcuts.ai_rewrite, "Hyper+R");
    assert_eq!(settings.shortcuts.ai_continue, "Alt+C");
}

#[test]
fn test_unknown_provider_is_an_error() {
    assert!(AppSettings::from_yaml("provider: openai\n").is_err());
}

#[test]
fn test_classic_colors_have_no_overrides() {
    let colors = ColorSettings::classic();
    for block_type in BlockType::ALL {
        assert_eq!(colors.color_for(block_type), None);
    }
}

#[test]
fn test_api_key_comes_from_environment() {
    let settings = AppSettings {
        provider: Provider::Deepseek,
        ..AppSettings::default()
    };

    std::env::remove_var("DEEPSEEK_API_KEY");
    assert_eq!(
        settings.api_key(),
        Err(GenerationError::MissingApiKey("DeepSeek".to_string()))
    );

    std::env::set_var("DEEPSEEK_API_KEY", "sk-test");
    assert_eq!(settings.api_key(), Ok("sk-test".to_string()));
    std::env::remove_var("DEEPSEEK_API_KEY");
}

#[test]
fn test_api_key_never_serialized() {
    let yaml = serde_yaml::to_string(&AppSettings::default()).unwrap();
    assert!(!yaml.to_lowercase().contains("api_key"));
}

// ========================================================================
// Template Tests
// ========================================================================

#[test]
fn test_template_catalogue() {
    let ids: Vec<_> = templates::TEMPLATES.iter().map(|t| t.id).collect();
    assert_eq!(
        ids,
        vec!["standard", "short_video", "mystery", "sitcom", "stageplay", "commercial"]
    );
}

#[test]
fn test_unknown_template_falls_back_to_standard() {
    assert_eq!(templates::find("nope").id, templates::DEFAULT_TEMPLATE_ID);
    assert_eq!(templates::for_script(None).id, "standard");
}

#[test]
fn test_every_template_has_opening_blocks() {
    let mut ids = BlockIdGenerator::new();
    for template in templates::TEMPLATES {
        for language in [ScriptLanguage::En, ScriptLanguage::Zh] {
            let script = Script::from_template(template, language, &mut ids);
            assert!(!script.blocks.is_empty(), "{} {:?}", template.id, language);
            assert_eq!(script.metadata.template_id.as_deref(), Some(template.id));
            assert!(!template.system_prompt.is_empty());
        }
    }
}

#[test]
fn test_default_script_metadata() {
    let script = Script::default_script(&mut BlockIdGenerator::new());
    assert_eq!(script.metadata.title, "Untitled Screenplay");
    assert_eq!(script.metadata.language, ScriptLanguage::En);
}
