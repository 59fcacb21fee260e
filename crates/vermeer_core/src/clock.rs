//! Time-of-day classification: quiet hours and posting windows.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Named time-of-day buckets used to bias action selection.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Window {
    /// Morning slot (default 07:00–11:00)
    Morning,
    /// Midday slot (default 11:00–19:00)
    Midday,
    /// Evening slot (default 19:00–23:00)
    Evening,
    /// Anything outside the named slots
    Other,
}

/// Hour range during which posting is suppressed.
///
/// The range may wrap past midnight: `QuietHours { start: 23, end: 7 }`
/// covers 23:00–07:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuietHours {
    /// First quiet hour (inclusive)
    pub start: u32,
    /// First non-quiet hour (exclusive)
    pub end: u32,
}

impl Default for QuietHours {
    fn default() -> Self {
        Self { start: 23, end: 7 }
    }
}

impl QuietHours {
    /// Whether an hour-of-day falls in the quiet range.
    pub fn contains(&self, hour: u32) -> bool {
        if self.start <= self.end {
            self.start <= hour && hour < self.end
        } else {
            hour >= self.start || hour < self.end
        }
    }
}

/// Hour boundaries for the named posting windows.
///
/// Each window is `[start, end)`. The boundaries may overlap the quiet range
/// at the edges; posting is already blocked there by the cap check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowBounds {
    /// Morning window start (inclusive)
    pub morning_start: u32,
    /// Morning window end / midday start
    pub midday_start: u32,
    /// Midday window end / evening start
    pub evening_start: u32,
    /// Evening window end (exclusive)
    pub evening_end: u32,
}

impl Default for WindowBounds {
    fn default() -> Self {
        Self {
            morning_start: 7,
            midday_start: 11,
            evening_start: 19,
            evening_end: 23,
        }
    }
}

impl WindowBounds {
    /// Classify an hour-of-day into a window.
    pub fn classify(&self, hour: u32) -> Window {
        if (self.morning_start..self.midday_start).contains(&hour) {
            Window::Morning
        } else if (self.midday_start..self.evening_start).contains(&hour) {
            Window::Midday
        } else if (self.evening_start..self.evening_end).contains(&hour) {
            Window::Evening
        } else {
            Window::Other
        }
    }
}

/// Pure time-of-day classifier over a fixed IANA zone.
///
/// The zone is configured once at process start; every tick asks the clock
/// for the zoned current time and classifies it. No state, no side effects.
///
/// # Examples
///
/// ```
/// use vermeer_core::{Clock, QuietHours, WindowBounds};
///
/// let clock = Clock::new(chrono_tz::Europe::Brussels, QuietHours::default(), WindowBounds::default());
/// let now = clock.now();
/// let _ = clock.window_of(&now);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    tz: Tz,
    quiet: QuietHours,
    windows: WindowBounds,
}

impl Clock {
    /// Create a clock over a fixed zone with the given ranges.
    pub fn new(tz: Tz, quiet: QuietHours, windows: WindowBounds) -> Self {
        Self { tz, quiet, windows }
    }

    /// Current zoned time.
    pub fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.tz)
    }

    /// The configured zone.
    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Whether the given instant falls in the quiet range.
    pub fn is_quiet_hours(&self, now: &DateTime<Tz>) -> bool {
        self.quiet.contains(now.hour())
    }

    /// Classify the given instant into a posting window.
    pub fn window_of(&self, now: &DateTime<Tz>) -> Window {
        self.windows.classify(now.hour())
    }
}
