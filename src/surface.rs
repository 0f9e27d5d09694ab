//! Rendering surfaces: the embedded web views the shell drives.
//!
//! The shell never renders anything itself. Each tab owns a surface created
//! by a [`SurfaceFactory`]; the surface reports URL and title changes back as
//! [`SurfaceEvent`]s, which the event loop feeds to
//! [`BrowserShell::handle_surface_event`](crate::app::BrowserShell::handle_surface_event).

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::types::errors::UiError;

/// Commands the shell issues to a tab's web view.
pub trait RenderSurface {
    fn set_url(&mut self, url: &str);
    fn back(&mut self);
    fn forward(&mut self);
    fn reload(&mut self);
}

/// Creates one surface per tab.
pub trait SurfaceFactory {
    type Surface: RenderSurface;

    fn create(&mut self, tab_id: &str) -> Result<Self::Surface, UiError>;
}

/// Notifications emitted by a surface, keyed by the owning tab's ID.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    UrlChanged { tab_id: String, url: String },
    TitleChanged { tab_id: String, title: String },
}

/// Queue shared between headless surfaces and whoever pumps their events.
pub type EventQueue = Rc<RefCell<VecDeque<SurfaceEvent>>>;

/// A surface without a web engine.
///
/// Loading a URL commits immediately to an in-memory history and queues a
/// `UrlChanged` event; the page title is reported as the URL's host. Used by
/// the console demo and by tests in place of a real web view.
pub struct HeadlessSurface {
    tab_id: String,
    history: Vec<String>,
    position: usize,
    events: EventQueue,
}

impl HeadlessSurface {
    pub fn new(tab_id: &str, events: EventQueue) -> Self {
        Self {
            tab_id: tab_id.to_string(),
            history: Vec::new(),
            position: 0,
            events,
        }
    }

    pub fn current_url(&self) -> Option<&str> {
        self.history.get(self.position).map(String::as_str)
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    fn commit(&self) {
        let Some(url) = self.current_url() else {
            return;
        };
        let mut events = self.events.borrow_mut();
        events.push_back(SurfaceEvent::UrlChanged {
            tab_id: self.tab_id.clone(),
            url: url.to_string(),
        });
        events.push_back(SurfaceEvent::TitleChanged {
            tab_id: self.tab_id.clone(),
            title: host_of(url).to_string(),
        });
    }
}

impl RenderSurface for HeadlessSurface {
    fn set_url(&mut self, url: &str) {
        if !self.history.is_empty() {
            self.history.truncate(self.position + 1);
        }
        self.history.push(url.to_string());
        self.position = self.history.len() - 1;
        self.commit();
    }

    fn back(&mut self) {
        if self.position > 0 {
            self.position -= 1;
            self.commit();
        }
    }

    fn forward(&mut self) {
        if self.position + 1 < self.history.len() {
            self.position += 1;
            self.commit();
        }
    }

    fn reload(&mut self) {
        self.commit();
    }
}

/// Hands out [`HeadlessSurface`]s that all report into one queue.
#[derive(Default)]
pub struct HeadlessFactory {
    events: EventQueue,
}

impl HeadlessFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the queue the surfaces write to.
    pub fn events(&self) -> EventQueue {
        Rc::clone(&self.events)
    }
}

impl SurfaceFactory for HeadlessFactory {
    type Surface = HeadlessSurface;

    fn create(&mut self, tab_id: &str) -> Result<HeadlessSurface, UiError> {
        Ok(HeadlessSurface::new(tab_id, self.events()))
    }
}

fn host_of(url: &str) -> &str {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    rest.split(['/', '?', '#']).next().unwrap_or(rest)
}
