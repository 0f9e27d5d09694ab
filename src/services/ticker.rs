//! Fixed-period timers polled by the event loop.
//!
//! A [`Ticker`] never sleeps or spawns anything; the driver asks for the
//! earliest deadline, waits until then, and polls each ticker.

use std::time::{Duration, Instant};

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A periodic task descriptor.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Instant,
}

impl Ticker {
    /// First firing is one `period` after `now`.
    pub fn new(period: Duration, now: Instant) -> Self {
        let period = period.max(MIN_PERIOD);
        Self {
            period,
            next_due: now + period,
        }
    }

    pub fn from_millis(millis: u64, now: Instant) -> Self {
        Self::new(Duration::from_millis(millis), now)
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    /// Returns true when the ticker is due at `now` and schedules the next firing.
    ///
    /// Missed periods are dropped rather than replayed, so a stalled loop
    /// produces one tick, not a burst.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due += self.period;
        if self.next_due <= now {
            self.next_due = now + self.period;
        }
        true
    }
}

/// Earliest deadline among `tickers`, if any.
pub fn earliest_deadline<'a, I>(tickers: I) -> Option<Instant>
where
    I: IntoIterator<Item = &'a Ticker>,
{
    tickers.into_iter().map(Ticker::next_due).min()
}
