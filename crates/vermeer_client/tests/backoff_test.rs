//! Tests for the retry executor.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use vermeer_client::Backoff;
use vermeer_error::{ClientError, ClientErrorKind};

fn transient() -> ClientError {
    ClientError::new(ClientErrorKind::Transport("connection reset".into()))
}

fn permanent() -> ClientError {
    ClientError::new(ClientErrorKind::Authentication("bad credentials".into()))
}

#[test]
fn delay_sequence_doubles_then_caps() {
    let backoff = Backoff::new(Duration::from_secs(4), 7).with_cap(Duration::from_secs(60));
    let delays: Vec<u64> = backoff.delays().map(|d| d.as_secs()).collect();
    assert_eq!(delays, vec![4, 8, 16, 32, 60, 60]);
}

#[test]
fn delay_count_matches_attempt_budget() {
    // N attempts means N-1 sleeps between them.
    let backoff = Backoff::new(Duration::from_secs(4), 5);
    assert_eq!(backoff.delays().count(), 4);
}

#[tokio::test]
async fn succeeds_after_transient_failures() {
    let backoff = Backoff::new(Duration::from_millis(1), 5);
    let attempts = Arc::new(AtomicUsize::new(0));

    let counter = attempts.clone();
    let result: Result<&str, _> = backoff
        .run(|| {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                if n < 2 {
                    Err(transient())
                } else {
                    Ok("done")
                }
            }
        })
        .await;

    assert_eq!(result.unwrap(), "done");
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn permanent_failure_is_not_retried() {
    let backoff = Backoff::new(Duration::from_millis(1), 5);
    let attempts = Arc::new(AtomicUsize::new(0));

    let counter = attempts.clone();
    let result: Result<(), _> = backoff
        .run(|| {
            counter.fetch_add(1, Ordering::SeqCst);
            async move { Err(permanent()) }
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err.kind, ClientErrorKind::Authentication(_)));
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn exhausted_budget_surfaces_typed_failure_and_stops() {
    let backoff = Backoff::new(Duration::from_millis(1), 4);
    let attempts = Arc::new(AtomicUsize::new(0));

    let counter = attempts.clone();
    let result: Result<(), _> = backoff
        .run(|| {
            counter.fetch_add(1, Ordering::SeqCst);
            async move { Err(transient()) }
        })
        .await;

    let err = result.unwrap_err();
    match err.kind {
        ClientErrorKind::RetriesExhausted { attempts: a, .. } => assert_eq!(a, 4),
        other => panic!("expected RetriesExhausted, got {:?}", other),
    }
    // No further retry once the budget is spent.
    assert_eq!(attempts.load(Ordering::SeqCst), 4);
}
