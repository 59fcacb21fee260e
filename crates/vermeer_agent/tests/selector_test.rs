//! Tests for anti-repetition content selection.

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;
use vermeer_agent::ContentSelector;
use vermeer_core::{ContentPools, RecencyConfig};
use vermeer_state::{BotState, PostRecord};

fn pools() -> ContentPools {
    ContentPools {
        titles: vec!["Art drop".into(), "A little color".into()],
        flourishes: vec!["🎨".into()],
        long_greetings: vec!["greeting one".into(), "greeting two".into()],
        replies: vec!["Thanks!".into()],
    }
}

fn selector(links: Vec<String>, assets_dir: std::path::PathBuf) -> ContentSelector {
    ContentSelector::new(pools(), links, assets_dir, RecencyConfig::default())
}

fn used(state: &mut BotState, key: &str, days_ago: i64) {
    state.history.push(PostRecord {
        content_key: key.to_string(),
        media_ref: None,
        timestamp: Utc::now() - Duration::days(days_ago),
    });
}

#[test]
fn recently_used_links_are_never_selected_while_alternatives_exist() {
    let links: Vec<String> = vec!["https://a.example".into(), "https://b.example".into()];
    let sel = selector(links, ".".into());

    let mut state = BotState::default();
    used(&mut state, "https://a.example", 2);

    // Across many seeds, the fresh candidate must always win.
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let picked = sel.pick_link(&mut rng, &state, Utc::now()).unwrap();
        assert_eq!(picked, "https://b.example", "seed {}", seed);
    }
}

#[test]
fn link_outside_recency_window_is_eligible_again() {
    let links: Vec<String> = vec!["https://a.example".into()];
    let sel = selector(links, ".".into());

    let mut state = BotState::default();
    used(&mut state, "https://a.example", 10);

    let mut rng = StdRng::seed_from_u64(1);
    let picked = sel.pick_link(&mut rng, &state, Utc::now()).unwrap();
    assert_eq!(picked, "https://a.example");
}

#[test]
fn exhausted_pool_falls_back_to_repetition() {
    let links: Vec<String> = vec!["https://a.example".into(), "https://b.example".into()];
    let sel = selector(links, ".".into());

    let mut state = BotState::default();
    used(&mut state, "https://a.example", 1);
    used(&mut state, "https://b.example", 1);

    let mut rng = StdRng::seed_from_u64(7);
    // Repetition is preferred over skipping.
    assert!(sel.pick_link(&mut rng, &state, Utc::now()).is_some());
}

#[test]
fn empty_pool_yields_no_candidate() {
    let sel = selector(Vec::new(), "./definitely-missing".into());
    let state = BotState::default();

    let mut rng = StdRng::seed_from_u64(3);
    assert!(sel.pick_link(&mut rng, &state, Utc::now()).is_none());
    assert!(sel.pick_image(&mut rng, &state, Utc::now()).is_none());
}

#[test]
fn images_come_from_the_assets_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("blue.png"), b"x").unwrap();
    std::fs::write(dir.path().join("notes.txt"), b"x").unwrap();

    let sel = selector(Vec::new(), dir.path().to_path_buf());
    let state = BotState::default();

    let mut rng = StdRng::seed_from_u64(5);
    let picked = sel.pick_image(&mut rng, &state, Utc::now()).unwrap();
    assert_eq!(picked.file_name().unwrap(), "blue.png");
}

#[test]
fn image_used_within_fourteen_days_is_excluded() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("blue.png"), b"x").unwrap();
    std::fs::write(dir.path().join("red.jpg"), b"x").unwrap();

    let sel = selector(Vec::new(), dir.path().to_path_buf());
    let blue_key = dir.path().join("blue.png").display().to_string();

    let mut state = BotState::default();
    used(&mut state, &blue_key, 5);

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let picked = sel.pick_image(&mut rng, &state, Utc::now()).unwrap();
        assert_eq!(picked.file_name().unwrap(), "red.jpg", "seed {}", seed);
    }
}

#[test]
fn short_greetings_draw_from_the_title_pool() {
    let sel = selector(Vec::new(), ".".into());
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..20 {
        let title = sel.short_greeting(&mut rng);
        assert!(
            title.starts_with("Art drop") || title.starts_with("A little color"),
            "unexpected title: {}",
            title
        );
    }
}
