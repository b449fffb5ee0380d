//! Integration-level unit tests for the SettingsEngine public API.
//!
//! These tests exercise the SettingsEngine through its public trait interface,
//! validating default loading, value persistence, and reset behavior.

use urlbar_suggest::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use urlbar_suggest::types::errors::SettingsError;
use urlbar_suggest::types::settings::{BrowserSettings, SettingKey};
use tempfile::TempDir;

/// Helper: create a SettingsEngine backed by a temp directory that lives for the
/// duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings, BrowserSettings::default());
    for key in SettingKey::ALL {
        assert!(engine.get_setting(key), "{} should default to on", key.path());
    }
}

/// A new engine reading the same file must see changes made through
/// `set_value`.
#[test]
fn test_set_value_persists_changes() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine
            .set_value(SettingKey::OpenedTabSuggestions.path(), serde_json::json!(false))
            .unwrap();
        engine
            .set_value("limits.max_search", serde_json::json!(5))
            .unwrap();
    }

    let mut engine = engine_in_temp(&dir);
    let settings = engine.load().unwrap();
    assert!(!settings.suggestions.opened_tab_suggestions);
    assert_eq!(settings.limits.max_search, 5);
    assert!(!engine.get_setting(SettingKey::OpenedTabSuggestions));
}

#[test]
fn test_set_value_rejects_bad_input() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    assert!(matches!(
        engine.set_value("suggestions.nope", serde_json::json!(true)),
        Err(SettingsError::InvalidKey(_))
    ));
    assert!(matches!(
        engine.set_value("limits.max_top_sites", serde_json::json!("three")),
        Err(SettingsError::InvalidValue(_))
    ));
    assert_eq!(engine.get_settings(), &BrowserSettings::default());
}

#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine
            .set_value("general.default_search_engine", serde_json::json!("duckduckgo"))
            .unwrap();
        engine.reset().unwrap();
        assert_eq!(engine.get_settings(), &BrowserSettings::default());
    }

    let mut engine = engine_in_temp(&dir);
    assert_eq!(engine.load().unwrap(), BrowserSettings::default());
}

#[test]
fn test_missing_debounce_section_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    let mut json = serde_json::to_value(BrowserSettings::default()).unwrap();
    json.as_object_mut().unwrap().remove("debounce");
    std::fs::write(&path, json.to_string()).unwrap();

    let mut engine = SettingsEngine::new(Some(path.to_string_lossy().to_string()));
    let settings = engine.load().unwrap();
    assert_eq!(settings.debounce.suggestions_ms, 5);
    assert_eq!(settings.debounce.search_ms, 10);
}
