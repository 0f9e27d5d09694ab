use serde::{Deserialize, Serialize};

/// Maximum number of characters shown in a tab label before it is elided.
pub const TAB_LABEL_MAX_CHARS: usize = 15;

/// Label given to tabs opened without an explicit title.
pub const DEFAULT_TAB_TITLE: &str = "New Tab";

/// URL loaded into a surface opened without an address.
pub const BLANK_URL: &str = "about:blank";

/// Represents a browser tab with its current state.
///
/// `id` is the key of the tab's rendering surface; the surface itself is owned
/// by the shell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tab {
    pub id: String,
    pub url: String,
    pub title: String,
}

impl Tab {
    /// Tab label as drawn in the tab strip.
    pub fn label(&self) -> String {
        truncate_title(&self.title)
    }
}

/// Shortens a page title to [`TAB_LABEL_MAX_CHARS`] characters, appending
/// `"..."` when anything was cut.
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > TAB_LABEL_MAX_CHARS {
        let mut label: String = title.chars().take(TAB_LABEL_MAX_CHARS).collect();
        label.push_str("...");
        label
    } else {
        title.to_string()
    }
}
