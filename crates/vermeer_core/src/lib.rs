//! Core data types for the Vermeer posting agent.
//!
//! This crate provides the domain types shared across the Vermeer workspace:
//! action kinds, time-of-day windows, posting caps, and configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod action;
mod caps;
mod clock;
mod config;
mod settings;

pub use action::{PostKind, TypeCounts};
pub use caps::Caps;
pub use clock::{Clock, QuietHours, Window, WindowBounds};
pub use config::{AgentConfig, ContentPools, EngagementConfig, Pacing, RecencyConfig};
pub use settings::Settings;
