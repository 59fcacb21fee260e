//! Lazy counter resets and cap checks.

use crate::{BotState, HourKey};
use chrono::DateTime;
use vermeer_core::Caps;

/// Answers "may a post happen now?" against the persisted counters.
///
/// Counters are not advanced by a clock; they reset lazily on the first tick
/// that observes a new calendar date or clock hour. Both resets must run
/// before any cap check within a tick.
///
/// # Examples
///
/// ```
/// use vermeer_core::Caps;
/// use vermeer_state::{BotState, CapTracker};
///
/// let tracker = CapTracker::new(Caps::default());
/// let state = BotState::default();
/// assert!(tracker.can_post(&state));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CapTracker {
    caps: Caps,
}

impl CapTracker {
    /// Create a tracker with the given ceilings.
    pub fn new(caps: Caps) -> Self {
        Self { caps }
    }

    /// The configured ceilings.
    pub fn caps(&self) -> &Caps {
        &self.caps
    }

    /// Zero the daily counters if `now` is a new calendar date.
    ///
    /// Idempotent for a given timestamp.
    pub fn reset_if_new_day<Tz: chrono::TimeZone>(&self, state: &mut BotState, now: &DateTime<Tz>) {
        let today = now.date_naive();
        if state.daily.date != today {
            state.daily.date = today;
            state.daily.total_posts = 0;
            state.daily.per_type.reset();
        }
    }

    /// Zero the hourly counter if `now` is a new clock hour.
    ///
    /// Idempotent for a given timestamp.
    pub fn reset_if_new_hour<Tz: chrono::TimeZone>(
        &self,
        state: &mut BotState,
        now: &DateTime<Tz>,
    ) {
        let key = HourKey::of(now);
        if state.hourly.hour_key != key {
            state.hourly.hour_key = key;
            state.hourly.total_posts = 0;
        }
    }

    /// Whether the daily total is under its ceiling.
    pub fn under_daily_cap(&self, state: &BotState) -> bool {
        state.daily.total_posts < self.caps.posts_per_day
    }

    /// Whether the hourly total is under its ceiling.
    pub fn under_hourly_cap(&self, state: &BotState) -> bool {
        state.hourly.total_posts < self.caps.posts_per_hour
    }

    /// Whether the daily and hourly totals are both under their ceilings.
    pub fn can_post(&self, state: &BotState) -> bool {
        self.under_daily_cap(state) && self.under_hourly_cap(state)
    }
}
