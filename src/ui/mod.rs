//! DarkMin UI layer.
//!
//! Uses `wry` for the platform web engine and `tao` for the window:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The toolbar, tab strip and landing page are HTML pages in their own
//! webviews; they talk to the Rust side through wry IPC.

pub mod webview_app;
