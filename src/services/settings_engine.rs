// Settings Engine
// Loads, saves and updates the settings the URL bar consults: per-source
// suggestion toggles, per-type caps, debounce delays and the search engine.
// Settings are stored as a JSON file at the platform-specific config path.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::{BrowserSettings, SettingKey};

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<BrowserSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &BrowserSettings;
    fn get_setting(&self, key: SettingKey) -> bool;
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &str;
}

/// Settings engine implementation that persists settings as JSON on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: BrowserSettings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise, uses the platform-specific config directory with `settings.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => {
                let config_dir = platform::get_config_dir();
                config_dir
                    .join("settings.json")
                    .to_string_lossy()
                    .to_string()
            }
        };

        Self {
            config_path,
            settings: BrowserSettings::default(),
        }
    }

    /// Creates an engine that starts from `settings` instead of reading disk.
    pub fn with_settings(config_path: String, settings: BrowserSettings) -> Self {
        Self {
            config_path,
            settings,
        }
    }
}

fn io_err(what: &str, path: &Path, e: std::io::Error) -> SettingsError {
    SettingsError::IoError(format!("{} {}: {}", what, path.display(), e))
}

impl SettingsEngineTrait for SettingsEngine {
    /// Reads the settings file. A missing file yields defaults; a malformed
    /// one is an error and leaves the in-memory settings untouched.
    fn load(&mut self) -> Result<BrowserSettings, SettingsError> {
        let path = Path::new(&self.config_path);
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.settings = BrowserSettings::default();
                return Ok(self.settings.clone());
            }
            Err(e) => return Err(io_err("cannot read", path, e)),
        };

        self.settings = serde_json::from_str(&content)
            .map_err(|e| SettingsError::SerializationError(format!("{}: {}", path.display(), e)))?;
        Ok(self.settings.clone())
    }

    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| io_err("cannot create", parent, e))?;
        }

        let json = serde_json::to_string_pretty(&self.settings)
            .map_err(|e| SettingsError::SerializationError(e.to_string()))?;
        fs::write(path, json).map_err(|e| io_err("cannot write", path, e))
    }

    /// Returns a reference to the current in-memory settings.
    fn get_settings(&self) -> &BrowserSettings {
        &self.settings
    }

    fn get_setting(&self, key: SettingKey) -> bool {
        self.settings.get_setting(key)
    }

    /// Updates an individual setting by dot-notation key path, validates it
    /// against the typed settings and saves to disk.
    ///
    /// # Examples
    /// - `"general.default_search_engine"` → updates `settings.general.default_search_engine`
    /// - `"suggestions.opened_tab_suggestions"` → updates the open-tabs toggle
    /// - `"limits.max_search"` → updates the search suggestion cap
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        let (parent, field) = match key.rsplit_once('.') {
            Some((parent, field)) => (format!("/{}", parent.replace('.', "/")), field),
            None => (String::new(), key),
        };
        if field.is_empty() {
            return Err(SettingsError::InvalidKey(format!("Key '{}' is empty", key)));
        }

        let mut json_value = serde_json::to_value(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        let slot = json_value
            .pointer_mut(&parent)
            .and_then(serde_json::Value::as_object_mut)
            .and_then(|section| section.get_mut(field))
            .ok_or_else(|| {
                SettingsError::InvalidKey(format!("Key '{}' not found in settings", key))
            })?;
        *slot = value;

        self.settings = serde_json::from_value(json_value).map_err(|e| {
            SettingsError::InvalidValue(format!("Invalid value for key '{}': {}", key, e))
        })?;
        self.save()
    }

    /// Resets all settings to factory defaults and saves to disk.
    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = BrowserSettings::default();
        self.save()
    }

    /// Returns the path to the config file.
    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
