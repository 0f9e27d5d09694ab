// DarkMin platform abstraction
// Resolves where the read-only configuration file lives on each OS.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// File name of the shell configuration inside [`get_config_dir`].
pub const SETTINGS_FILE: &str = "settings.json";

/// Returns the platform-specific configuration directory for DarkMin.
///
/// - **Linux**: `$XDG_CONFIG_HOME/darkmin` or `~/.config/darkmin`
/// - **macOS**: `~/Library/Application Support/DarkMin`
/// - **Windows**: `%APPDATA%/DarkMin`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Full path of the default settings file.
pub fn default_settings_path() -> PathBuf {
    get_config_dir().join(SETTINGS_FILE)
}
