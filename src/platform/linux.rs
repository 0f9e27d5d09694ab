// DarkMin config location on Linux: $XDG_CONFIG_HOME/darkmin or ~/.config/darkmin

use std::env;
use std::path::PathBuf;

pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("darkmin")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("darkmin")
    }
}
