//! Platform client error types and retry classification.

/// Platform client error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ClientErrorKind {
    /// Credentials missing or rejected during authentication
    #[display("Authentication failed: {}", _0)]
    Authentication(String),
    /// Transport-level failure (connect, timeout, TLS)
    #[display("Transport error: {}", _0)]
    Transport(String),
    /// API returned a non-success status code
    #[display("API {} error: {}", status_code, message)]
    Api {
        /// HTTP status code
        status_code: u16,
        /// Error message from the response
        message: String,
    },
    /// Response body could not be decoded
    #[display("Malformed API response: {}", _0)]
    MalformedResponse(String),
    /// Retry budget exhausted for a call
    #[display("Retries exhausted after {} attempts: {}", attempts, message)]
    RetriesExhausted {
        /// Attempts made before giving up
        attempts: usize,
        /// Message of the final failure
        message: String,
    },
}

impl ClientErrorKind {
    /// Check if this error type should be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientErrorKind::Transport(_) => true,
            ClientErrorKind::Api { status_code, .. } => {
                matches!(*status_code, 408 | 429 | 500 | 502 | 503 | 504)
            }
            _ => false,
        }
    }
}

/// Platform client error with source location tracking.
///
/// # Examples
///
/// ```
/// use vermeer_error::{ClientError, ClientErrorKind};
///
/// let err = ClientError::new(ClientErrorKind::Transport("connection reset".into()));
/// assert!(err.kind.is_retryable());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Client Error: {} at line {} in {}", kind, line, file)]
pub struct ClientError {
    /// The kind of error that occurred
    pub kind: ClientErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ClientError {
    /// Create a new ClientError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ClientErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
