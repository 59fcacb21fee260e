//! Error types for the Vermeer posting agent.
//!
//! This crate provides the foundation error types used throughout the Vermeer
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use vermeer_error::{VermeerResult, ConfigError};
//!
//! fn read_setting() -> VermeerResult<String> {
//!     Err(ConfigError::new("REDDIT_CLIENT_ID not set"))?
//! }
//!
//! match read_setting() {
//!     Ok(v) => println!("Got: {}", v),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod error;
mod http;
mod state;

pub use client::{ClientError, ClientErrorKind};
pub use config::ConfigError;
pub use error::{VermeerError, VermeerErrorKind, VermeerResult};
pub use http::HttpError;
pub use state::{StateError, StateErrorKind};
