//! IPC commands posted by the toolbar and landing page webviews.
//!
//! Both pages call `window.ipc.postMessage(JSON.stringify({cmd: ..., ...}))`.
//! Decoding is kept apart from the GUI so it can be unit-tested without a
//! window.

use serde::Deserialize;
use tracing::warn;

use crate::app::BrowserShell;
use crate::surface::SurfaceFactory;
use crate::types::errors::IpcError;

/// A user action in the browser chrome.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum ChromeCommand {
    /// A page finished loading and wants the current chrome state.
    Ready,
    Home,
    Back,
    Forward,
    Reload,
    /// Address bar submission.
    Navigate { text: String },
    /// Landing page search box submission.
    Search { text: String },
    NewTab,
    CloseTab { index: usize },
    SwitchTab { index: usize },
    /// Any `cmd` not listed above. [`parse_command`] reports it as
    /// [`IpcError::UnknownCommand`].
    #[serde(other)]
    Unknown,
}

/// Decodes a raw IPC message body.
pub fn parse_command(body: &str) -> Result<ChromeCommand, IpcError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| IpcError::Malformed(e.to_string()))?;
    let cmd = value
        .get("cmd")
        .and_then(|v| v.as_str())
        .ok_or_else(|| IpcError::Malformed("missing cmd".to_string()))?
        .to_string();

    match serde_json::from_value(value) {
        Ok(ChromeCommand::Unknown) => Err(IpcError::UnknownCommand(cmd)),
        Ok(command) => Ok(command),
        Err(e) => Err(IpcError::Malformed(e.to_string())),
    }
}

/// Applies a decoded command to the shell.
pub fn apply_command<F: SurfaceFactory>(shell: &mut BrowserShell<F>, command: ChromeCommand) {
    let result = match command {
        ChromeCommand::Ready | ChromeCommand::Unknown => Ok(()),
        ChromeCommand::Home => {
            shell.toggle_home();
            Ok(())
        }
        ChromeCommand::Back => {
            shell.back();
            Ok(())
        }
        ChromeCommand::Forward => {
            shell.forward();
            Ok(())
        }
        ChromeCommand::Reload => {
            shell.reload();
            Ok(())
        }
        ChromeCommand::Navigate { text } => shell.submit_address_bar(&text).map(|_| ()),
        ChromeCommand::Search { text } => shell.submit_search(&text).map(|_| ()),
        ChromeCommand::NewTab => shell.open_tab(None, None).map(|_| ()),
        ChromeCommand::CloseTab { index } => {
            shell.close_tab(index);
            Ok(())
        }
        ChromeCommand::SwitchTab { index } => {
            shell.switch_tab(index);
            Ok(())
        }
    };

    if let Err(e) = result {
        warn!("chrome command failed: {}", e);
    }
}

/// Decodes and applies `body`; malformed messages are logged and dropped.
pub fn handle_message<F: SurfaceFactory>(shell: &mut BrowserShell<F>, body: &str) {
    match parse_command(body) {
        Ok(command) => apply_command(shell, command),
        Err(e) => warn!("{}", e),
    }
}
