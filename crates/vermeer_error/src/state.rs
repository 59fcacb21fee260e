//! State persistence error types.

/// State persistence error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StateErrorKind {
    /// Failed to serialize state for writing
    #[display("Failed to serialize state: {}", _0)]
    Serialize(String),
    /// Failed to write the state file
    #[display("Failed to write state file {}: {}", path, message)]
    Write {
        /// Path to the state file
        path: String,
        /// Underlying I/O message
        message: String,
    },
    /// Failed to rename the temporary file into place
    #[display("Failed to commit state file {}: {}", path, message)]
    Commit {
        /// Path to the state file
        path: String,
        /// Underlying I/O message
        message: String,
    },
}

/// State persistence error with source location tracking.
///
/// Load-side problems (missing file, unparsable contents) are deliberately
/// not represented here: loading always falls back to defaults. Only the
/// save path can fail.
///
/// # Examples
///
/// ```
/// use vermeer_error::{StateError, StateErrorKind};
///
/// let err = StateError::new(StateErrorKind::Serialize("bad record".into()));
/// assert!(format!("{}", err).contains("serialize"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("State Error: {} at line {} in {}", kind, line, file)]
pub struct StateError {
    /// The kind of error that occurred
    pub kind: StateErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StateError {
    /// Create a new StateError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StateErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
