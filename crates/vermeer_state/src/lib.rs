//! Persisted state and cap tracking for the Vermeer posting agent.
//!
//! One [`BotState`] aggregate exists per process: loaded at start, mutated in
//! place by each tick, saved after every state-changing action, reloaded
//! fresh on the next start.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod state;
mod store;
mod tracker;

pub use state::{
    BotState, DailyCounters, HourKey, HourlyCounters, PostRecord, HISTORY_CAP, MENTIONS_CAP,
};
pub use store::StateStore;
pub use tracker::CapTracker;
