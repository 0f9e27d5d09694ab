use serde::Serialize;

/// What the landing page shows above the search box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockReading {
    /// Local time as `HH:MM`.
    pub time: String,
    pub greeting: &'static str,
}
