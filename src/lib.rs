//! DarkMin — a minimal dark web browser shell with an animated landing page.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod chrome_ipc;
pub mod managers;
pub mod platform;
pub mod services;
pub mod surface;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
