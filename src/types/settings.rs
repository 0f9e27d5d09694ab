use serde::{Deserialize, Serialize};

/// Top-level shell settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ShellSettings {
    pub general: GeneralSettings,
    pub landing: LandingSettings,
}

/// Window and start-up settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralSettings {
    /// URL of the tab opened at start-up.
    pub homepage: String,
    /// Label of the start-up tab until its page reports a title.
    pub homepage_title: String,
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            homepage: "https://www.google.com".to_string(),
            homepage_title: "Google".to_string(),
            window_title: "DarkMin Browser".to_string(),
            window_width: 1000,
            window_height: 700,
        }
    }
}

/// Landing page animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LandingSettings {
    pub particle_count: usize,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub particle_tick_ms: u64,
    pub clock_tick_ms: u64,
}

impl Default for LandingSettings {
    fn default() -> Self {
        Self {
            particle_count: 50,
            viewport_width: 800.0,
            viewport_height: 600.0,
            particle_tick_ms: 30,
            clock_tick_ms: 1000,
        }
    }
}
