use uuid::Uuid;

use crate::types::errors::TabError;
use crate::types::tab::Tab;

/// Trait defining the tab management interface.
pub trait TabManagerTrait {
    fn close_tab(&mut self, index: usize) -> Result<Option<Tab>, TabError>;
    fn switch_tab(&mut self, index: usize) -> Result<(), TabError>;
    fn get_tab(&self, tab_id: &str) -> Option<&Tab>;
    fn index_of(&self, tab_id: &str) -> Option<usize>;
    fn get_all_tabs(&self) -> &[Tab];
    fn get_active_tab(&self) -> Option<&Tab>;
    fn active_index(&self) -> Option<usize>;
    fn tab_count(&self) -> usize;
    fn update_tab_url(&mut self, tab_id: &str, url: &str) -> Result<(), TabError>;
    fn update_tab_title(&mut self, tab_id: &str, title: &str) -> Result<(), TabError>;
}

/// In-memory, ordered tab collection with a single active tab.
pub struct TabManager {
    tabs: Vec<Tab>,
    active_tab_id: Option<String>,
}

impl TabManager {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active_tab_id: None,
        }
    }

    /// Allocates an ID for a tab that is about to be added with [`TabManager::add_tab`].
    pub fn new_tab_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Appends an already-built tab and makes it active.
    pub fn add_tab(&mut self, tab: Tab) {
        self.active_tab_id = Some(tab.id.clone());
        self.tabs.push(tab);
    }

    fn find_tab_mut(&mut self, tab_id: &str) -> Result<&mut Tab, TabError> {
        self.tabs
            .iter_mut()
            .find(|t| t.id == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TabManagerTrait for TabManager {
    /// Close the tab at `index` and return it.
    ///
    /// The last remaining tab is never closed; `Ok(None)` is returned instead.
    /// Closing the active tab activates the tab that slides into its slot, or
    /// the new last tab when the closed one was rightmost.
    fn close_tab(&mut self, index: usize) -> Result<Option<Tab>, TabError> {
        if index >= self.tabs.len() {
            return Err(TabError::InvalidIndex(index));
        }
        if self.tabs.len() <= 1 {
            return Ok(None);
        }

        let removed = self.tabs.remove(index);
        if self.active_tab_id.as_deref() == Some(removed.id.as_str()) {
            let next = index.min(self.tabs.len() - 1);
            self.active_tab_id = Some(self.tabs[next].id.clone());
        }
        Ok(Some(removed))
    }

    fn switch_tab(&mut self, index: usize) -> Result<(), TabError> {
        let tab = self.tabs.get(index).ok_or(TabError::InvalidIndex(index))?;
        self.active_tab_id = Some(tab.id.clone());
        Ok(())
    }

    fn get_tab(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    fn index_of(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    fn get_all_tabs(&self) -> &[Tab] {
        &self.tabs
    }

    fn get_active_tab(&self) -> Option<&Tab> {
        self.active_tab_id
            .as_ref()
            .and_then(|id| self.tabs.iter().find(|t| t.id == *id))
    }

    fn active_index(&self) -> Option<usize> {
        self.active_tab_id
            .as_ref()
            .and_then(|id| self.index_of(id))
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn update_tab_url(&mut self, tab_id: &str, url: &str) -> Result<(), TabError> {
        self.find_tab_mut(tab_id)?.url = url.to_string();
        Ok(())
    }

    fn update_tab_title(&mut self, tab_id: &str, title: &str) -> Result<(), TabError> {
        self.find_tab_mut(tab_id)?.title = title.to_string();
        Ok(())
    }
}
