//! Platform collaborator for the Vermeer posting agent.
//!
//! Everything that touches the remote platform lives behind the [`Platform`]
//! trait; the rest of the workspace consumes it only through the [`Backoff`]
//! retry executor. [`RedditClient`] is the bundled implementation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assets;
mod backoff;
mod platform;
mod reddit;

pub use assets::{list_local_images, ALLOWED_EXTS};
pub use backoff::Backoff;
pub use platform::{ClientResult, Mention, Platform};
pub use reddit::RedditClient;
