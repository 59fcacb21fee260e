//! Tests for the agent configuration system.

use vermeer_core::{AgentConfig, PostKind};

#[test]
fn bundled_defaults_load() {
    let config = AgentConfig::load().unwrap();

    assert_eq!(config.caps.posts_per_day, 4);
    assert_eq!(config.caps.posts_per_hour, 1);
    assert_eq!(config.caps.per_kind(PostKind::Image), 1);
    assert_eq!(config.caps.per_kind(PostKind::Link), 2);
    assert_eq!(config.caps.per_kind(PostKind::Long), 2);

    assert_eq!(config.quiet.start, 23);
    assert_eq!(config.quiet.end, 7);

    assert_eq!(config.recency.image_days, 14);
    assert_eq!(config.recency.text_days, 7);

    assert!((config.engagement.upvote_probability - 0.75).abs() < f64::EPSILON);
}

#[test]
fn bundled_pools_are_populated() {
    let config = AgentConfig::load().unwrap();

    assert!(!config.pools.titles.is_empty());
    assert!(!config.pools.flourishes.is_empty());
    assert!(!config.pools.long_greetings.is_empty());
    assert!(!config.pools.replies.is_empty());
}

#[test]
fn user_file_overrides_load() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("vermeer.toml");
    std::fs::write(
        &path,
        r#"
[caps]
posts_per_day = 2
posts_per_hour = 1
image_per_day = 1
link_per_day = 1
long_per_day = 1

[pools]
titles = ["Hi"]
flourishes = []
long_greetings = ["A note"]
replies = ["Thanks"]
"#,
    )
    .unwrap();

    let config = AgentConfig::from_file(&path).unwrap();
    assert_eq!(config.caps.posts_per_day, 2);
    assert_eq!(config.pools.titles, vec!["Hi"]);
    // Unspecified sections fall back to defaults.
    assert_eq!(config.quiet.start, 23);
}
