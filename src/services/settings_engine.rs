// DarkMin Settings Engine
// Loads shell settings from a JSON file at the platform-specific config path.
// The file is only read: edits made through `set_value` live in memory until exit.

use std::fs;
use std::path::Path;

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::ShellSettings;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<ShellSettings, SettingsError>;
    fn get_settings(&self) -> &ShellSettings;
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError>;
    fn reset(&mut self);
    fn get_config_path(&self) -> &str;
}

/// Settings engine backed by an optional JSON file on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: ShellSettings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise, uses `settings.json` in the platform config directory.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = path_override.unwrap_or_else(|| {
            platform::default_settings_path()
                .to_string_lossy()
                .to_string()
        });

        Self {
            config_path,
            settings: ShellSettings::default(),
        }
    }

    /// Applies a `key=value` override such as `landing.particle_count=80`.
    ///
    /// The value is read as JSON when it parses, otherwise as a plain string,
    /// so `general.homepage=https://example.com` needs no quoting.
    pub fn apply_override(&mut self, arg: &str) -> Result<(), SettingsError> {
        let (key, raw) = arg
            .split_once('=')
            .ok_or_else(|| SettingsError::InvalidKey(format!("Expected key=value, got '{}'", arg)))?;
        let value = serde_json::from_str(raw)
            .unwrap_or_else(|_| serde_json::Value::String(raw.to_string()));
        self.set_value(key.trim(), value)
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON config file.
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    /// Sections or fields absent from the file are not filled in, so the file
    /// must carry the complete structure.
    fn load(&mut self) -> Result<ShellSettings, SettingsError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            tracing::debug!(path = %self.config_path, "no config file, using defaults");
            self.settings = ShellSettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;

        let settings: ShellSettings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;

        tracing::info!(path = %self.config_path, "loaded settings");
        self.settings = settings;
        Ok(self.settings.clone())
    }

    fn get_settings(&self) -> &ShellSettings {
        &self.settings
    }

    /// Updates an individual setting by dot-notation key path.
    ///
    /// The settings are converted to a `serde_json::Value`, the addressed field
    /// is replaced, and the result is deserialized back so that type mismatches
    /// are rejected before anything changes.
    ///
    /// # Examples
    /// - `"general.homepage"` → updates `settings.general.homepage`
    /// - `"landing.particle_count"` → updates `settings.landing.particle_count`
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        if key.is_empty() {
            return Err(SettingsError::InvalidKey("Key cannot be empty".to_string()));
        }

        let parts: Vec<&str> = key.split('.').collect();

        let mut json_value = serde_json::to_value(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        {
            let mut current = &mut json_value;
            for (i, part) in parts.iter().enumerate() {
                if i == parts.len() - 1 {
                    match current {
                        serde_json::Value::Object(map) => {
                            if !map.contains_key(*part) {
                                return Err(SettingsError::InvalidKey(format!(
                                    "Key '{}' not found in settings",
                                    key
                                )));
                            }
                            map.insert(part.to_string(), value.clone());
                        }
                        _ => {
                            return Err(SettingsError::InvalidKey(format!(
                                "Cannot navigate to key '{}': intermediate value is not an object",
                                key
                            )));
                        }
                    }
                } else {
                    current = current.get_mut(*part).ok_or_else(|| {
                        SettingsError::InvalidKey(format!("Key '{}' not found in settings", key))
                    })?;
                }
            }
        }

        let new_settings: ShellSettings = serde_json::from_value(json_value).map_err(|e| {
            SettingsError::InvalidValue(format!("Invalid value for key '{}': {}", key, e))
        })?;

        self.settings = new_settings;
        Ok(())
    }

    /// Restores factory defaults in memory.
    fn reset(&mut self) {
        self.settings = ShellSettings::default();
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
