use std::fmt;

// === TabError ===

/// Errors related to tab management operations.
#[derive(Debug, PartialEq)]
pub enum TabError {
    /// Tab with the given ID was not found.
    NotFound(String),
    /// The provided tab index is out of bounds.
    InvalidIndex(usize),
}

impl fmt::Display for TabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabError::NotFound(id) => write!(f, "Tab not found: {}", id),
            TabError::InvalidIndex(index) => write!(f, "Invalid tab index: {}", index),
        }
    }
}

impl std::error::Error for TabError {}

// === SettingsError ===

/// Errors related to loading and editing shell settings.
#[derive(Debug)]
pub enum SettingsError {
    /// Reading the config file failed.
    IoError(String),
    /// The config file could not be parsed or serialized.
    SerializationError(String),
    /// The dot-notation key does not exist.
    InvalidKey(String),
    /// The value does not fit the field's type.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === IpcError ===

/// Errors decoding messages posted by the chrome and landing webviews.
#[derive(Debug)]
pub enum IpcError {
    /// The message body is not valid JSON or has an unexpected shape.
    Malformed(String),
    /// The `cmd` field names no known command.
    UnknownCommand(String),
}

impl fmt::Display for IpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpcError::Malformed(msg) => write!(f, "Malformed IPC message: {}", msg),
            IpcError::UnknownCommand(cmd) => write!(f, "Unknown IPC command: {}", cmd),
        }
    }
}

impl std::error::Error for IpcError {}

// === UiError ===

/// Errors raised while building the window and its webviews.
#[derive(Debug)]
pub enum UiError {
    /// The native window could not be created.
    Window(String),
    /// A webview could not be created or driven.
    WebView(String),
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::Window(msg) => write!(f, "Window error: {}", msg),
            UiError::WebView(msg) => write!(f, "WebView error: {}", msg),
        }
    }
}

impl std::error::Error for UiError {}
