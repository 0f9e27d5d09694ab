//! Clock and greeting shown on the landing page.

use chrono::{Local, Timelike};

use crate::types::clock::ClockReading;

/// Greeting for an hour of the day (0-23).
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good Morning",
        12..=17 => "Good Afternoon",
        _ => "Good Evening",
    }
}

/// Formats a time of day as `HH:MM`.
pub fn format_time<T: Timelike>(time: &T) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Clock text and greeting for the given time of day.
pub fn reading_at<T: Timelike>(time: &T) -> ClockReading {
    ClockReading {
        time: format_time(time),
        greeting: greeting_for_hour(time.hour()),
    }
}

/// Clock text and greeting for the current local time.
pub fn now() -> ClockReading {
    reading_at(&Local::now())
}
