//! Tests for the persisted state aggregate and its store.

use chrono::{TimeZone, Utc};
use tempfile::TempDir;
use vermeer_core::PostKind;
use vermeer_state::{BotState, PostRecord, StateStore, HISTORY_CAP, MENTIONS_CAP};

fn record(key: &str, ts_secs: i64) -> PostRecord {
    PostRecord {
        content_key: key.to_string(),
        media_ref: None,
        timestamp: Utc.timestamp_opt(ts_secs, 0).unwrap(),
    }
}

#[test]
fn history_never_exceeds_cap() {
    let mut state = BotState::default();
    for i in 0..(HISTORY_CAP + 50) {
        state.remember_post(record(&format!("item-{}", i), i as i64));
    }
    assert_eq!(state.history.len(), HISTORY_CAP);
    // Eviction is oldest-first: the survivors are the most recent.
    assert_eq!(state.history[0].content_key, "item-50");
    assert_eq!(
        state.history.last().unwrap().content_key,
        format!("item-{}", HISTORY_CAP + 49)
    );
}

#[test]
fn processed_mentions_never_exceed_cap() {
    let mut state = BotState::default();
    for i in 0..(MENTIONS_CAP + 10) {
        state.remember_mention(format!("t1_{}", i));
    }
    assert_eq!(state.processed_mentions.len(), MENTIONS_CAP);
    assert!(!state.is_mention_processed("t1_0"));
    assert!(state.is_mention_processed("t1_10"));
    assert!(state.is_mention_processed(&format!("t1_{}", MENTIONS_CAP + 9)));
}

#[test]
fn used_since_honors_cutoff() {
    let mut state = BotState::default();
    state.remember_post(record("old.png", 1_000));
    state.remember_post(record("fresh.png", 9_000));

    let cutoff = Utc.timestamp_opt(5_000, 0).unwrap();
    assert!(state.used_since("fresh.png", cutoff));
    assert!(!state.used_since("old.png", cutoff));
    assert!(!state.used_since("never.png", cutoff));
}

#[test]
fn count_post_touches_daily_and_hourly() {
    let mut state = BotState::default();
    state.count_post(PostKind::Image);
    state.count_post(PostKind::Link);

    assert_eq!(state.daily.total_posts, 2);
    assert_eq!(state.hourly.total_posts, 2);
    assert_eq!(state.daily.per_type.get(PostKind::Image), 1);
    assert_eq!(state.daily.per_type.get(PostKind::Link), 1);
    assert_eq!(state.daily.per_type.get(PostKind::Long), 0);
}

#[test]
fn missing_state_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let store = StateStore::new(dir.path().join("absent.json"));
    assert_eq!(store.load(), BotState::default());
}

#[test]
fn corrupt_state_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "{not json at all").unwrap();

    let store = StateStore::new(&path);
    assert_eq!(store.load(), BotState::default());
}

#[test]
fn save_then_load_preserves_state() {
    let dir = TempDir::new().unwrap();
    let store = StateStore::new(dir.path().join("state.json"));

    let mut state = BotState::default();
    state.count_post(PostKind::Long);
    state.remember_post(PostRecord {
        content_key: "assets/blue.png".to_string(),
        media_ref: Some("assets/blue.png".to_string()),
        timestamp: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
    });
    state.remember_mention("t1_abc");
    store.save(&state).unwrap();

    let loaded = store.load();
    assert_eq!(loaded, state);
    assert_eq!(loaded.history[0].media_ref.as_deref(), Some("assets/blue.png"));
}

#[test]
fn save_overwrites_previous_state() {
    let dir = TempDir::new().unwrap();
    let store = StateStore::new(dir.path().join("state.json"));

    let mut state = BotState::default();
    store.save(&state).unwrap();
    state.remember_mention("t1_x");
    store.save(&state).unwrap();

    let loaded = store.load();
    assert!(loaded.is_mention_processed("t1_x"));
}
