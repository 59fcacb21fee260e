//! Tests for the action-selection state machine.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;
use vermeer_agent::{ActionScheduler, ContentSelector, PostContent, SchedulerState};
use vermeer_core::{Caps, ContentPools, PostKind, RecencyConfig, Window};
use vermeer_state::BotState;

fn pools(long_greetings: Vec<String>) -> ContentPools {
    ContentPools {
        titles: vec!["Art drop".into()],
        flourishes: vec!["🎨".into()],
        long_greetings,
        replies: vec!["Thanks!".into()],
    }
}

struct Fixture {
    scheduler: ActionScheduler,
    selector: ContentSelector,
    _assets: Option<TempDir>,
}

fn fixture(with_image: bool, links: Vec<String>, long_greetings: Vec<String>) -> Fixture {
    fixture_with_caps(Caps::default(), with_image, links, long_greetings)
}

fn fixture_with_caps(
    caps: Caps,
    with_image: bool,
    links: Vec<String>,
    long_greetings: Vec<String>,
) -> Fixture {
    let (assets, dir) = if with_image {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("piece.png"), b"x").unwrap();
        let path = dir.path().to_path_buf();
        (Some(dir), path)
    } else {
        (None, "./no-assets".into())
    };

    Fixture {
        scheduler: ActionScheduler::new(caps),
        selector: ContentSelector::new(pools(long_greetings), links, dir, RecencyConfig::default()),
        _assets: assets,
    }
}

fn plan(fix: &Fixture, window: Window, state: &BotState) -> SchedulerState {
    let mut rng = StdRng::seed_from_u64(42);
    fix.scheduler
        .plan(window, &fix.selector, &mut rng, state, Utc::now())
}

fn committed_kind(state: SchedulerState) -> PostKind {
    match state {
        SchedulerState::Committed(planned) => planned.content.kind(),
        other => panic!("expected Committed, got {:?}", other),
    }
}

#[test]
fn morning_prefers_an_image_when_none_posted_today() {
    let fix = fixture(true, vec!["https://a.example".into()], vec!["hello".into()]);
    let state = BotState::default();

    assert_eq!(committed_kind(plan(&fix, Window::Morning, &state)), PostKind::Image);
}

#[test]
fn morning_image_slot_is_single_use() {
    // Even with the daily image cap not yet reached, the morning slot only
    // opens while the day's image count is exactly zero.
    let caps = Caps {
        image_per_day: 2,
        ..Caps::default()
    };
    let fix = fixture_with_caps(caps, true, vec!["https://a.example".into()], vec![]);

    let mut state = BotState::default();
    state.daily.per_type.increment(PostKind::Image);

    assert_eq!(committed_kind(plan(&fix, Window::Morning, &state)), PostKind::Link);
}

#[test]
fn evening_image_slot_is_gated_by_the_daily_cap_alone() {
    let caps = Caps {
        image_per_day: 2,
        ..Caps::default()
    };
    let fix = fixture_with_caps(caps, true, vec!["https://a.example".into()], vec![]);

    let mut state = BotState::default();
    state.daily.per_type.increment(PostKind::Image);

    // One image already posted today: morning says no, evening says yes.
    assert_eq!(committed_kind(plan(&fix, Window::Evening, &state)), PostKind::Image);
}

#[test]
fn morning_downgrades_to_link_when_no_image_exists() {
    let fix = fixture(false, vec!["https://a.example".into()], vec!["hello".into()]);
    let state = BotState::default();

    assert_eq!(committed_kind(plan(&fix, Window::Morning, &state)), PostKind::Link);
}

#[test]
fn morning_downgrades_past_links_to_long_post() {
    let fix = fixture(false, vec![], vec!["hello there everyone".into()]);
    let state = BotState::default();

    assert_eq!(committed_kind(plan(&fix, Window::Morning, &state)), PostKind::Long);
}

#[test]
fn everything_unavailable_ends_in_skip() {
    let fix = fixture(false, vec![], vec![]);
    let state = BotState::default();

    assert_eq!(plan(&fix, Window::Morning, &state), SchedulerState::Skip);
}

#[test]
fn midday_has_no_image_slot() {
    let fix = fixture(true, vec!["https://a.example".into()], vec!["hello".into()]);
    let state = BotState::default();

    assert_eq!(committed_kind(plan(&fix, Window::Midday, &state)), PostKind::Link);
}

#[test]
fn other_window_has_no_image_slot() {
    let fix = fixture(true, vec!["https://a.example".into()], vec![]);
    let state = BotState::default();

    assert_eq!(committed_kind(plan(&fix, Window::Other, &state)), PostKind::Link);
}

#[test]
fn link_cap_moves_selection_to_long_posts() {
    let fix = fixture(false, vec!["https://a.example".into()], vec!["hello".into()]);

    let mut state = BotState::default();
    state.daily.per_type.increment(PostKind::Link);
    state.daily.per_type.increment(PostKind::Link);

    assert_eq!(committed_kind(plan(&fix, Window::Midday, &state)), PostKind::Long);
}

#[test]
fn per_kind_counts_never_pass_their_caps() {
    let caps = Caps::default();
    let fix = fixture(false, vec!["https://a.example".into()], vec!["hello".into()]);

    let mut state = BotState::default();
    // Drive the scheduler until it skips; counts must stay under the caps.
    for _ in 0..20 {
        match plan(&fix, Window::Midday, &state) {
            SchedulerState::Committed(planned) => {
                let kind = planned.content.kind();
                assert!(state.daily.per_type.get(kind) < caps.per_kind(kind));
                state.count_post(kind);
            }
            SchedulerState::Skip => break,
            other => panic!("non-terminal state: {:?}", other),
        }
    }
    assert!(state.daily.per_type.get(PostKind::Link) <= caps.link_per_day);
    assert!(state.daily.per_type.get(PostKind::Long) <= caps.long_per_day);
}

#[test]
fn committed_posts_carry_ready_content() {
    let fix = fixture(false, vec!["https://a.example".into()], vec![]);
    let state = BotState::default();

    match plan(&fix, Window::Midday, &state) {
        SchedulerState::Committed(planned) => {
            assert!(!planned.title.is_empty());
            assert_eq!(planned.content, PostContent::Link("https://a.example".into()));
        }
        other => panic!("expected Committed, got {:?}", other),
    }
}
