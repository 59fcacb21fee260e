//! Scheduling and tick orchestration for the Vermeer posting agent.
//!
//! Each tick runs at most one external side effect: an engagement (upvote or
//! short reply to a mention), a post, or nothing. Engagement is tried first;
//! posting is gated by quiet hours and caps, then planned by the
//! [`ActionScheduler`] with content from the [`ContentSelector`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod engage;
mod scheduler;
mod selector;
mod tick;

pub use engage::EngagementQueue;
pub use scheduler::{ActionScheduler, PlannedPost, PostContent, SchedulerState};
pub use selector::ContentSelector;
pub use tick::{Agent, TickOutcome};
