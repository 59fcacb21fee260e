//! Top-level error wrapper types.

use crate::{ClientError, ConfigError, HttpError, StateError};

/// The foundation error enum for the Vermeer workspace.
///
/// # Examples
///
/// ```
/// use vermeer_error::{VermeerError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: VermeerError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VermeerErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// State persistence error
    #[from(StateError)]
    State(StateError),
    /// Platform client error
    #[from(ClientError)]
    Client(ClientError),
}

/// Vermeer error with kind discrimination.
///
/// # Examples
///
/// ```
/// use vermeer_error::{VermeerResult, ConfigError};
///
/// fn might_fail() -> VermeerResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Vermeer Error: {}", _0)]
pub struct VermeerError(Box<VermeerErrorKind>);

impl VermeerError {
    /// Create a new error from a kind.
    pub fn new(kind: VermeerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Access the underlying error kind.
    pub fn kind(&self) -> &VermeerErrorKind {
        &self.0
    }
}

impl<T> From<T> for VermeerError
where
    T: Into<VermeerErrorKind>,
{
    fn from(value: T) -> Self {
        Self::new(value.into())
    }
}

/// Convenience alias for results carrying a [`VermeerError`].
pub type VermeerResult<T> = Result<T, VermeerError>;
