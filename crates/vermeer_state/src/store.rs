//! Durable storage for the state aggregate.

use crate::BotState;
use std::path::PathBuf;
use vermeer_error::{StateError, StateErrorKind, VermeerResult};

/// Loads and saves [`BotState`] as JSON at a fixed path.
///
/// Loading is tolerant: a missing or unparsable file yields defaults, never
/// an error. Saving is atomic: the new state is written to a sibling temp
/// file and renamed into place, so a crash mid-write cannot truncate the
/// previous state.
///
/// # Examples
///
/// ```no_run
/// use vermeer_state::{BotState, StateStore};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = StateStore::new("vermeer_state.json");
/// let mut state = store.load();
/// state.remember_mention("t1_abc");
/// store.save(&state)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Create a store over the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the state file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Load state, substituting defaults for a missing or corrupt file.
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> BotState {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => {
                tracing::debug!("No state file, starting fresh");
                return BotState::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(error = %e, "State file unreadable, starting fresh");
                BotState::default()
            }
        }
    }

    /// Save state atomically.
    ///
    /// # Errors
    ///
    /// Returns a [`StateError`] if serialization or the filesystem write
    /// fails. Callers treat this as fatal for the tick.
    #[tracing::instrument(skip(self, state), fields(path = %self.path.display()))]
    pub fn save(&self, state: &BotState) -> VermeerResult<()> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| StateError::new(StateErrorKind::Serialize(e.to_string())))?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(|e| {
            StateError::new(StateErrorKind::Write {
                path: tmp.display().to_string(),
                message: e.to_string(),
            })
        })?;

        std::fs::rename(&tmp, &self.path).map_err(|e| {
            StateError::new(StateErrorKind::Commit {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })
        })?;

        tracing::debug!("State saved");
        Ok(())
    }
}
