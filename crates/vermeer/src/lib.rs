//! Vermeer - Rate-Limited Reddit Posting Agent
//!
//! Vermeer decides, on each tick, whether to publish content, engage an
//! inbound mention, or do nothing, subject to daily/hourly/per-kind caps,
//! quiet hours, and anti-repetition constraints on recently used content.
//!
//! # Features
//!
//! - **Posting windows**: morning/midday/evening priority tables with a
//!   deterministic downgrade chain when content is unavailable
//! - **Caps**: daily, hourly, and per-kind ceilings with lazy counter resets
//! - **Anti-repetition**: recency-windowed content selection with uniform
//!   fallback
//! - **Engagement**: opt-in upvotes/replies to mentions, at most one per tick
//! - **Retry**: bounded exponential backoff around every platform call
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use vermeer::agent::Agent;
//! use vermeer::client::RedditClient;
//! use vermeer::core::{AgentConfig, Settings};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings::from_env()?;
//!     let config = AgentConfig::load()?;
//!     let client = RedditClient::connect(&settings).await?;
//!     let mut agent = Agent::new(client, config, &settings, StdRng::from_entropy());
//!     println!("{}", agent.tick().await?);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Vermeer is organized as a workspace with focused crates:
//!
//! - `vermeer_core` - Domain types, clock windows, configuration
//! - `vermeer_error` - Error types
//! - `vermeer_state` - Persisted counters, history, cap tracking
//! - `vermeer_client` - Platform client and retry executor
//! - `vermeer_agent` - Scheduler, content selection, tick orchestration
//!
//! This crate (`vermeer`) re-exports everything for convenience and carries
//! the CLI binary.

#![forbid(unsafe_code)]

pub use vermeer_agent as agent;
pub use vermeer_client as client;
pub use vermeer_core as core;
pub use vermeer_error as error;
pub use vermeer_state as state;
