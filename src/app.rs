//! Browser shell for DarkMin.
//!
//! Owns the tab collection, the surface behind each tab, and the two-page
//! view stack (landing page and tab container). Every method runs on the
//! event-loop thread; surface callbacks arrive later as [`SurfaceEvent`]s.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::managers::tab_manager::{TabManager, TabManagerTrait};
use crate::services::navigation::normalize_url;
use crate::surface::{RenderSurface, SurfaceEvent, SurfaceFactory};
use crate::types::errors::UiError;
use crate::types::settings::GeneralSettings;
use crate::types::tab::{Tab, BLANK_URL, DEFAULT_TAB_TITLE};
use crate::types::view::{ChromeState, TabLabel, ViewMode};

/// Tab and navigation orchestration over a set of rendering surfaces.
pub struct BrowserShell<F: SurfaceFactory> {
    factory: F,
    tab_manager: TabManager,
    surfaces: HashMap<String, F::Surface>,
    view: ViewMode,
    address: String,
    landing_focus_requested: bool,
}

impl<F: SurfaceFactory> BrowserShell<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            tab_manager: TabManager::new(),
            surfaces: HashMap::new(),
            view: ViewMode::default(),
            address: String::new(),
            landing_focus_requested: false,
        }
    }

    /// Opens the configured home tab.
    pub fn start(&mut self, general: &GeneralSettings) -> Result<String, UiError> {
        info!(homepage = %general.homepage, "starting shell");
        self.open_tab(Some(&general.homepage), Some(&general.homepage_title))
    }

    /// Creates a tab, makes it active and returns its ID.
    ///
    /// Without a URL the surface is pointed at `about:blank`. The address bar
    /// follows the new tab.
    pub fn open_tab(&mut self, url: Option<&str>, title: Option<&str>) -> Result<String, UiError> {
        let id = TabManager::new_tab_id();
        let mut surface = self.factory.create(&id)?;
        let url = url.unwrap_or(BLANK_URL);
        surface.set_url(url);

        self.tab_manager.add_tab(Tab {
            id: id.clone(),
            url: url.to_string(),
            title: title.unwrap_or(DEFAULT_TAB_TITLE).to_string(),
        });
        self.surfaces.insert(id.clone(), surface);
        self.sync_address_bar();
        debug!(tab = %id, url, "opened tab");
        Ok(id)
    }

    /// Closes the tab at `index` unless it is the only one left.
    pub fn close_tab(&mut self, index: usize) {
        let active_before = self.active_tab_id();
        match self.tab_manager.close_tab(index) {
            Ok(Some(tab)) => {
                self.surfaces.remove(&tab.id);
                debug!(tab = %tab.id, index, "closed tab");
                if self.active_tab_id() != active_before {
                    self.sync_address_bar();
                }
            }
            Ok(None) => debug!("refusing to close the last tab"),
            Err(e) => warn!("close_tab ignored: {}", e),
        }
    }

    /// Activates the tab at `index` and shows its URL in the address bar.
    pub fn switch_tab(&mut self, index: usize) {
        match self.tab_manager.switch_tab(index) {
            Ok(()) => self.sync_address_bar(),
            Err(e) => warn!("switch_tab ignored: {}", e),
        }
    }

    /// Loads `text` as an address, in the active tab or in a new one.
    ///
    /// Returns the normalized URL, which the address bar shows right away.
    /// With no tab open the URL always gets a new tab.
    pub fn navigate(&mut self, text: &str, new_tab: bool) -> Result<String, UiError> {
        let url = normalize_url(text);
        let active = self.active_tab_id();

        match active {
            Some(id) if !new_tab => {
                if let Some(surface) = self.surfaces.get_mut(&id) {
                    surface.set_url(&url);
                }
                self.address = url.clone();
                debug!(tab = %id, url = %url, "navigating");
            }
            _ => {
                self.open_tab(Some(&url), None)?;
            }
        }
        Ok(url)
    }

    /// Address bar submission: navigate the current tab.
    pub fn submit_address_bar(&mut self, text: &str) -> Result<String, UiError> {
        self.navigate(text, false)
    }

    /// Landing page search submission: open the result in a new tab.
    pub fn submit_search(&mut self, text: &str) -> Result<String, UiError> {
        self.navigate(text, true)
    }

    /// Flips between the landing page and the tab container.
    ///
    /// Entering the landing page requests focus for its search box; see
    /// [`BrowserShell::take_landing_focus_request`].
    pub fn toggle_home(&mut self) -> ViewMode {
        self.view = self.view.toggled();
        if self.view == ViewMode::Landing {
            self.landing_focus_requested = true;
        }
        debug!(view = ?self.view, "toggled home");
        self.view
    }

    pub fn back(&mut self) {
        if let Some(surface) = self.active_surface_mut() {
            surface.back();
        }
    }

    pub fn forward(&mut self) {
        if let Some(surface) = self.active_surface_mut() {
            surface.forward();
        }
    }

    pub fn reload(&mut self) {
        if let Some(surface) = self.active_surface_mut() {
            surface.reload();
        }
    }

    /// Applies a notification from a tab's surface.
    ///
    /// A URL change on the active tab updates the address bar and brings the
    /// tab container to the front. Events for tabs that were already closed
    /// are dropped.
    pub fn handle_surface_event(&mut self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::UrlChanged { tab_id, url } => {
                if let Err(e) = self.tab_manager.update_tab_url(&tab_id, &url) {
                    debug!("stale url event: {}", e);
                    return;
                }
                if self.active_tab_id().as_deref() == Some(tab_id.as_str()) {
                    self.address = url;
                    self.view = ViewMode::Browsing;
                }
            }
            SurfaceEvent::TitleChanged { tab_id, title } => {
                if let Err(e) = self.tab_manager.update_tab_title(&tab_id, &title) {
                    debug!("stale title event: {}", e);
                }
            }
        }
    }

    /// Returns true once after `toggle_home` entered the landing page.
    pub fn take_landing_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.landing_focus_requested)
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn tabs(&self) -> &TabManager {
        &self.tab_manager
    }

    pub fn tab_count(&self) -> usize {
        self.tab_manager.tab_count()
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.tab_manager.get_active_tab()
    }

    pub fn surface(&self, tab_id: &str) -> Option<&F::Surface> {
        self.surfaces.get(tab_id)
    }

    pub fn surfaces(&self) -> impl Iterator<Item = (&str, &F::Surface)> {
        self.surfaces.iter().map(|(id, s)| (id.as_str(), s))
    }

    /// Everything the toolbar and tab strip display.
    pub fn chrome_state(&self) -> ChromeState {
        ChromeState {
            tabs: self
                .tab_manager
                .get_all_tabs()
                .iter()
                .map(|t| TabLabel {
                    id: t.id.clone(),
                    label: t.label(),
                    url: t.url.clone(),
                })
                .collect(),
            active_index: self.tab_manager.active_index(),
            address: self.address.clone(),
            view: self.view,
        }
    }

    fn active_tab_id(&self) -> Option<String> {
        self.tab_manager.get_active_tab().map(|t| t.id.clone())
    }

    fn active_surface_mut(&mut self) -> Option<&mut F::Surface> {
        let id = self.active_tab_id()?;
        self.surfaces.get_mut(&id)
    }

    fn sync_address_bar(&mut self) {
        if let Some(tab) = self.tab_manager.get_active_tab() {
            self.address = tab.url.clone();
        }
    }
}
