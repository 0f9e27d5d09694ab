//! WebView-based browser window using `wry` + `tao`.
//!
//! Layout:
//! - a chrome webview across the top (toolbar + tab strip), loaded from
//!   `resources/ui/chrome.html`;
//! - a landing webview filling the content area (particles, clock, search);
//! - one content webview per tab, also filling the content area.
//!
//! Only one of the content-area webviews is visible at a time: the landing
//! page in [`ViewMode::Landing`], the active tab's webview otherwise.
//! Page callbacks and IPC messages are turned into [`UserEvent`]s and handled
//! on the event-loop thread, which also drives the particle and clock tickers.

use std::rc::Rc;
use std::time::Instant;

use rand::Rng;
use serde::Serialize;
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy};
use tao::window::{Window, WindowBuilder};
use tracing::{debug, info, warn};
use wry::dpi::{LogicalPosition, LogicalSize};
use wry::{PageLoadEvent, Rect, WebView, WebViewBuilder};

use crate::app::BrowserShell;
use crate::chrome_ipc::{self, ChromeCommand};
use crate::services::clock;
use crate::services::particle_field::{ParticleField, BACKGROUND_BOTTOM, BACKGROUND_TOP};
use crate::services::ticker::{earliest_deadline, Ticker};
use crate::surface::{RenderSurface, SurfaceEvent, SurfaceFactory};
use crate::types::errors::UiError;
use crate::types::settings::ShellSettings;
use crate::types::tab::BLANK_URL;
use crate::types::view::ViewMode;

/// Height of the toolbar plus tab strip, in logical pixels.
const CHROME_HEIGHT: f64 = 72.0;

const CHROME_HTML: &str = include_str!("../../resources/ui/chrome.html");
const LANDING_HTML: &str = include_str!("../../resources/ui/landing.html");

#[derive(Debug)]
enum UserEvent {
    /// Raw IPC body from the chrome or landing webview.
    Ipc(String),
    Surface(SurfaceEvent),
}

/// Parameters the landing page needs before the first frame.
#[derive(Serialize)]
struct LandingSetup {
    width: f64,
    height: f64,
    top: [u8; 3],
    bottom: [u8; 3],
}

// ─── Surfaces ───

/// A tab's content webview.
pub struct WebviewSurface {
    webview: WebView,
}

impl WebviewSurface {
    fn eval(&self, js: &str) {
        if let Err(e) = self.webview.evaluate_script(js) {
            warn!("script failed on tab surface: {}", e);
        }
    }
}

impl RenderSurface for WebviewSurface {
    fn set_url(&mut self, url: &str) {
        if let Err(e) = self.webview.load_url(url) {
            warn!(url, "load_url failed: {}", e);
        }
    }

    fn back(&mut self) {
        self.eval("history.back()");
    }

    fn forward(&mut self) {
        self.eval("history.forward()");
    }

    fn reload(&mut self) {
        self.eval("location.reload()");
    }
}

/// Builds tab webviews as children of the main window.
struct WebviewFactory {
    window: Rc<Window>,
    proxy: EventLoopProxy<UserEvent>,
}

impl SurfaceFactory for WebviewFactory {
    type Surface = WebviewSurface;

    fn create(&mut self, tab_id: &str) -> Result<WebviewSurface, UiError> {
        let url_proxy = self.proxy.clone();
        let url_tab = tab_id.to_string();
        let title_proxy = self.proxy.clone();
        let title_tab = tab_id.to_string();

        let webview = WebViewBuilder::new()
            .with_url(BLANK_URL)
            .with_bounds(content_bounds(&self.window))
            .with_visible(false)
            .with_on_page_load_handler(move |event, url| {
                if let PageLoadEvent::Finished = event {
                    let _ = url_proxy.send_event(UserEvent::Surface(SurfaceEvent::UrlChanged {
                        tab_id: url_tab.clone(),
                        url,
                    }));
                }
            })
            .with_document_title_changed_handler(move |title| {
                let _ = title_proxy.send_event(UserEvent::Surface(SurfaceEvent::TitleChanged {
                    tab_id: title_tab.clone(),
                    title,
                }));
            })
            .with_devtools(cfg!(debug_assertions))
            .build_as_child(self.window.as_ref())
            .map_err(|e| UiError::WebView(e.to_string()))?;

        Ok(WebviewSurface { webview })
    }
}

// ─── Layout ───

fn logical_size(window: &Window) -> (f64, f64) {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    (size.width, size.height)
}

fn chrome_bounds(window: &Window) -> Rect {
    let (width, _) = logical_size(window);
    Rect {
        position: LogicalPosition::new(0.0, 0.0).into(),
        size: LogicalSize::new(width, CHROME_HEIGHT).into(),
    }
}

fn content_bounds(window: &Window) -> Rect {
    let (width, height) = logical_size(window);
    Rect {
        position: LogicalPosition::new(0.0, CHROME_HEIGHT).into(),
        size: LogicalSize::new(width, (height - CHROME_HEIGHT).max(0.0)).into(),
    }
}

// ─── Window state ───

struct BrowserWindow {
    window: Rc<Window>,
    chrome: WebView,
    landing: WebView,
    shell: BrowserShell<WebviewFactory>,
    field: ParticleField,
    particle_ticker: Ticker,
    clock_ticker: Ticker,
}

impl BrowserWindow {
    fn eval(view: &WebView, js: &str) {
        if let Err(e) = view.evaluate_script(js) {
            warn!("script failed: {}", e);
        }
    }

    fn push_json<T: Serialize>(view: &WebView, function: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => Self::eval(view, &format!("if(window.{0}){0}({1})", function, json)),
            Err(e) => warn!("could not serialize {} payload: {}", function, e),
        }
    }

    fn push_landing_setup(&self) {
        let setup = LandingSetup {
            width: self.field.width(),
            height: self.field.height(),
            top: BACKGROUND_TOP,
            bottom: BACKGROUND_BOTTOM,
        };
        Self::push_json(&self.landing, "__dm_setup", &setup);
        Self::push_json(&self.landing, "__dm_frame", &self.field.render());
        Self::push_json(&self.landing, "__dm_clock", &clock::now());
    }

    /// Brings the visible webviews and the toolbar in line with the shell.
    fn sync(&mut self) {
        let view = self.shell.view_mode();
        let active = self.shell.active_tab().map(|t| t.id.clone());

        if let Err(e) = self.landing.set_visible(view == ViewMode::Landing) {
            warn!("landing visibility: {}", e);
        }
        for (id, surface) in self.shell.surfaces() {
            let visible = view == ViewMode::Browsing && active.as_deref() == Some(id);
            if let Err(e) = surface.webview.set_visible(visible) {
                warn!(tab = id, "surface visibility: {}", e);
            }
        }

        if self.shell.take_landing_focus_request() {
            if let Err(e) = self.landing.focus() {
                warn!("landing focus: {}", e);
            }
            Self::eval(&self.landing, "if(window.__dm_focusSearch)__dm_focusSearch()");
        }

        Self::push_json(&self.chrome, "__dm_updateChrome", &self.shell.chrome_state());
    }

    fn relayout(&self) {
        if let Err(e) = self.chrome.set_bounds(chrome_bounds(&self.window)) {
            warn!("chrome bounds: {}", e);
        }
        if let Err(e) = self.landing.set_bounds(content_bounds(&self.window)) {
            warn!("landing bounds: {}", e);
        }
        for (id, surface) in self.shell.surfaces() {
            if let Err(e) = surface.webview.set_bounds(content_bounds(&self.window)) {
                warn!(tab = id, "surface bounds: {}", e);
            }
        }
    }

    fn handle_user_event(&mut self, event: UserEvent) {
        match event {
            UserEvent::Ipc(body) => {
                debug!(body = %body.chars().take(200).collect::<String>(), "ipc");
                match chrome_ipc::parse_command(&body) {
                    Ok(ChromeCommand::Ready) => self.push_landing_setup(),
                    Ok(command) => chrome_ipc::apply_command(&mut self.shell, command),
                    Err(e) => warn!("{}", e),
                }
            }
            UserEvent::Surface(event) => {
                debug!(?event, "surface event");
                self.shell.handle_surface_event(event);
            }
        }
        self.sync();
    }

    /// Fires due tickers and returns the next wake-up time.
    fn run_tickers(&mut self, now: Instant) -> Option<Instant> {
        if self.particle_ticker.poll(now) {
            let frame = self.field.next_frame();
            if self.shell.view_mode() == ViewMode::Landing {
                Self::push_json(&self.landing, "__dm_frame", &frame);
            }
        }
        if self.clock_ticker.poll(now) {
            Self::push_json(&self.landing, "__dm_clock", &clock::now());
        }
        earliest_deadline([&self.particle_ticker, &self.clock_ticker])
    }
}

// ─── Main entry point ───

fn build_window(
    event_loop: &EventLoop<UserEvent>,
    settings: &ShellSettings,
    rng: &mut impl Rng,
) -> Result<BrowserWindow, UiError> {
    let general = &settings.general;
    let landing_settings = &settings.landing;
    let proxy = event_loop.create_proxy();

    let min_size =
        tao::dpi::LogicalSize::new(general.window_width as f64, general.window_height as f64);
    let window = WindowBuilder::new()
        .with_title(general.window_title.as_str())
        .with_inner_size(min_size)
        .with_min_inner_size(min_size)
        .build(event_loop)
        .map_err(|e| UiError::Window(e.to_string()))?;
    let window = Rc::new(window);

    let chrome_proxy = proxy.clone();
    let chrome = WebViewBuilder::new()
        .with_html(CHROME_HTML)
        .with_bounds(chrome_bounds(&window))
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let _ = chrome_proxy.send_event(UserEvent::Ipc(msg.body().clone()));
        })
        .build_as_child(window.as_ref())
        .map_err(|e| UiError::WebView(e.to_string()))?;

    let landing_proxy = proxy.clone();
    let landing = WebViewBuilder::new()
        .with_html(LANDING_HTML)
        .with_bounds(content_bounds(&window))
        .with_visible(false)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let _ = landing_proxy.send_event(UserEvent::Ipc(msg.body().clone()));
        })
        .build_as_child(window.as_ref())
        .map_err(|e| UiError::WebView(e.to_string()))?;

    let factory = WebviewFactory {
        window: Rc::clone(&window),
        proxy,
    };
    let mut shell = BrowserShell::new(factory);
    shell.start(general)?;

    let field = ParticleField::new(
        landing_settings.particle_count,
        landing_settings.viewport_width,
        landing_settings.viewport_height,
        rng,
    );
    let now = Instant::now();

    Ok(BrowserWindow {
        window,
        chrome,
        landing,
        shell,
        field,
        particle_ticker: Ticker::from_millis(landing_settings.particle_tick_ms, now),
        clock_ticker: Ticker::from_millis(landing_settings.clock_tick_ms, now),
    })
}

/// Opens the browser window and runs the event loop until it is closed.
pub fn run(settings: ShellSettings) -> Result<(), UiError> {
    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let mut browser = build_window(&event_loop, &settings, &mut rand::rng())?;
    browser.sync();
    info!(title = %settings.general.window_title, "window ready");

    event_loop.run(move |event, _, control_flow| {
        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("window closed, shutting down");
                *control_flow = ControlFlow::Exit;
                return;
            }
            Event::WindowEvent {
                event: WindowEvent::Resized(_),
                ..
            } => browser.relayout(),
            Event::UserEvent(user_event) => browser.handle_user_event(user_event),
            _ => {}
        }

        *control_flow = match browser.run_tickers(Instant::now()) {
            Some(deadline) => ControlFlow::WaitUntil(deadline),
            None => ControlFlow::Wait,
        };
    });
}
