//! Integration-level unit tests for the SettingsEngine public API.
//!
//! These tests exercise the SettingsEngine through its public trait interface,
//! validating default loading, reading a config file, and in-memory edits.

use darkmin::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use darkmin::types::settings::ShellSettings;
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

    assert_eq!(
        settings,
        ShellSettings::default(),
        "Loading without a config file must return default settings"
    );
}

#[test]
fn test_default_values_match_classic_layout() {
    let defaults = ShellSettings::default();
    assert_eq!(defaults.general.homepage, "https://www.google.com");
    assert_eq!(defaults.general.homepage_title, "Google");
    assert_eq!(defaults.general.window_title, "DarkMin Browser");
    assert_eq!((defaults.general.window_width, defaults.general.window_height), (1000, 700));
    assert_eq!(defaults.landing.particle_count, 50);
    assert_eq!((defaults.landing.viewport_width, defaults.landing.viewport_height), (800.0, 600.0));
    assert_eq!(defaults.landing.particle_tick_ms, 30);
    assert_eq!(defaults.landing.clock_tick_ms, 1000);
}

#[test]
fn test_load_reads_config_file() {
    let dir = TempDir::new().unwrap();
    let mut custom = ShellSettings::default();
    custom.general.homepage = "https://duckduckgo.com".to_string();
    custom.landing.particle_count = 80;
    std::fs::write(
        dir.path().join("settings.json"),
        serde_json::to_string_pretty(&custom).unwrap(),
    )
    .unwrap();

    let mut engine = engine_in_temp(&dir);
    let loaded = engine.load().unwrap();

    assert_eq!(loaded, custom);
    assert_eq!(engine.get_settings().landing.particle_count, 80);
}

#[test]
fn test_load_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();

    let mut engine = engine_in_temp(&dir);
    assert!(engine.load().is_err());
}

#[test]
fn test_reset_discards_in_memory_edits() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    engine
        .set_value("general.window_title", serde_json::json!("Other"))
        .unwrap();
    assert_eq!(engine.get_settings().general.window_title, "Other");

    engine.reset();
    assert_eq!(*engine.get_settings(), ShellSettings::default());
}

#[test]
fn test_set_value_unknown_key() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    assert!(engine
        .set_value("landing.gravity", serde_json::json!(9.8))
        .is_err());
    assert!(engine.set_value("", serde_json::json!(1)).is_err());
}
