use serde::{Deserialize, Serialize};

/// Which page of the view stack is in front.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// The animated landing page with clock and search box.
    Landing,
    /// The tab container showing the active tab's surface.
    #[default]
    Browsing,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Landing => ViewMode::Browsing,
            ViewMode::Browsing => ViewMode::Landing,
        }
    }
}

/// Snapshot of a tab as the tab strip renders it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TabLabel {
    pub id: String,
    pub label: String,
    pub url: String,
}

/// Everything the toolbar and tab strip need to redraw themselves.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChromeState {
    pub tabs: Vec<TabLabel>,
    pub active_index: Option<usize>,
    pub address: String,
    pub view: ViewMode,
}
