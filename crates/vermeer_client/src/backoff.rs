//! Bounded exponential-backoff retry around platform calls.

use std::future::Future;
use std::time::Duration;
use tokio_retry2::{strategy::ExponentialBackoff, Retry, RetryError};
use tracing::warn;
use vermeer_error::{ClientError, ClientErrorKind};

use crate::ClientResult;

/// Retry policy: exponential delays with a hard cap and an attempt budget.
///
/// Delay before retry `n` (1-based) is `min(base * 2^(n-1), cap)`. Errors
/// whose kind is not retryable fail immediately; a retryable error that
/// survives the whole budget surfaces as
/// [`ClientErrorKind::RetriesExhausted`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use vermeer_client::Backoff;
///
/// let backoff = Backoff::new(Duration::from_secs(4), 5);
/// let delays: Vec<u64> = backoff.delays().map(|d| d.as_secs()).collect();
/// assert_eq!(delays, vec![4, 8, 16, 32]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Backoff {
    base: Duration,
    cap: Duration,
    max_attempts: usize,
}

impl Backoff {
    /// Policy with the given base delay and attempt budget, capped at 60s.
    pub fn new(base: Duration, max_attempts: usize) -> Self {
        Self {
            base,
            cap: Duration::from_secs(60),
            max_attempts,
        }
    }

    /// Override the delay cap.
    pub fn with_cap(mut self, cap: Duration) -> Self {
        self.cap = cap;
        self
    }

    /// The attempt budget (initial call included).
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// The retry delay sequence, one entry per retry.
    pub fn delays(&self) -> impl Iterator<Item = Duration> {
        // ExponentialBackoff yields powers of two; factor scales them to the
        // configured base, so retry n sleeps min(base * 2^(n-1), cap).
        let factor = (self.base.as_millis() as u64 / 2).max(1);
        ExponentialBackoff::from_millis(2)
            .factor(factor)
            .max_delay(self.cap)
            .take(self.max_attempts.saturating_sub(1))
    }

    /// Run a platform call under this policy.
    ///
    /// # Errors
    ///
    /// A non-retryable failure propagates unchanged from the first attempt.
    /// A retryable failure that outlives the budget surfaces as
    /// [`ClientErrorKind::RetriesExhausted`] carrying the final message.
    pub async fn run<T, F, Fut>(&self, mut call: F) -> ClientResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ClientResult<T>>,
    {
        let result = Retry::spawn(self.delays(), || {
            let fut = call();
            async move {
                match fut.await {
                    Ok(value) => Ok(value),
                    Err(e) => {
                        if e.kind.is_retryable() {
                            warn!(error = %e, "Platform call failed, will retry");
                            Err(RetryError::Transient {
                                err: e,
                                retry_after: None,
                            })
                        } else {
                            warn!(error = %e, "Permanent platform error, failing immediately");
                            Err(RetryError::Permanent(e))
                        }
                    }
                }
            }
        })
        .await;

        result.map_err(|e| {
            if e.kind.is_retryable() {
                ClientError::new(ClientErrorKind::RetriesExhausted {
                    attempts: self.max_attempts,
                    message: e.to_string(),
                })
            } else {
                e
            }
        })
    }
}

impl Default for Backoff {
    fn default() -> Self {
        Self::new(Duration::from_secs(4), 5)
    }
}
