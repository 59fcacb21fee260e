//! The action-selection state machine.

use crate::ContentSelector;
use chrono::{DateTime, Utc};
use rand::Rng;
use std::path::PathBuf;
use vermeer_core::{Caps, PostKind, Window};
use vermeer_state::BotState;

/// Ready-to-submit content for a planned post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostContent {
    /// Path of the image to upload
    Image(PathBuf),
    /// URL of the link post
    Link(String),
    /// Body of the long-form text post
    Long(String),
}

impl PostContent {
    /// The post kind this content belongs to.
    pub fn kind(&self) -> PostKind {
        match self {
            PostContent::Image(_) => PostKind::Image,
            PostContent::Link(_) => PostKind::Link,
            PostContent::Long(_) => PostKind::Long,
        }
    }

    /// The anti-repetition equality key of this content.
    pub fn content_key(&self) -> String {
        match self {
            PostContent::Image(path) => path.display().to_string(),
            PostContent::Link(url) => url.clone(),
            PostContent::Long(body) => body.clone(),
        }
    }
}

/// A committed action: kind, title, and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedPost {
    /// Post title
    pub title: String,
    /// Post content
    pub content: PostContent,
}

/// Scheduler states. `Skip` and `Committed` are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulerState {
    /// Evaluating the window's priority list from the top
    Selecting,
    /// A selected kind failed to produce content; moving forward in the list
    Downgrading,
    /// No category can act this tick; a normal outcome, not an error
    Skip,
    /// An action and its content are ready to submit
    Committed(PlannedPost),
}

/// Picks the next action for a window, downgrading when content is missing.
///
/// Each window carries a fixed priority list; the first kind that is under
/// its cap and can produce content wins. A kind that passes the cap gate but
/// yields no content is excluded and selection moves strictly forward until
/// a kind succeeds or the list is exhausted.
#[derive(Debug, Clone, Copy)]
pub struct ActionScheduler {
    caps: Caps,
}

impl ActionScheduler {
    /// Create a scheduler with the given ceilings.
    pub fn new(caps: Caps) -> Self {
        Self { caps }
    }

    /// Priority order of post kinds for a window.
    pub fn priorities(window: Window) -> &'static [PostKind] {
        match window {
            Window::Morning | Window::Evening => {
                &[PostKind::Image, PostKind::Link, PostKind::Long]
            }
            Window::Midday | Window::Other => &[PostKind::Link, PostKind::Long],
        }
    }

    /// Whether a kind's cap gate passes in this window.
    ///
    /// The morning image slot is a single daily slot: it opens only while the
    /// day's image count is exactly zero. The evening slot is gated by the
    /// daily image cap alone.
    fn gate(&self, window: Window, kind: PostKind, state: &BotState) -> bool {
        let count = state.daily.per_type.get(kind);
        match kind {
            PostKind::Image => match window {
                Window::Morning => count == 0,
                Window::Evening => count < self.caps.image_per_day,
                Window::Midday | Window::Other => false,
            },
            PostKind::Link => count < self.caps.link_per_day,
            PostKind::Long => count < self.caps.long_per_day,
        }
    }

    fn produce<R: Rng>(
        &self,
        kind: PostKind,
        selector: &ContentSelector,
        rng: &mut R,
        state: &BotState,
        now: DateTime<Utc>,
    ) -> Option<PlannedPost> {
        let content = match kind {
            PostKind::Image => selector.pick_image(rng, state, now).map(PostContent::Image),
            PostKind::Link => selector.pick_link(rng, state, now).map(PostContent::Link),
            PostKind::Long => selector
                .pick_long_greeting(rng, state, now)
                .map(PostContent::Long),
        }?;

        Some(PlannedPost {
            title: selector.short_greeting(rng),
            content,
        })
    }

    /// Run the machine to a terminal state for this window.
    pub fn plan<R: Rng>(
        &self,
        window: Window,
        selector: &ContentSelector,
        rng: &mut R,
        state: &BotState,
        now: DateTime<Utc>,
    ) -> SchedulerState {
        let mut tried: Vec<PostKind> = Vec::new();
        let mut machine = SchedulerState::Selecting;

        loop {
            match machine {
                SchedulerState::Selecting | SchedulerState::Downgrading => {
                    let candidate = Self::priorities(window)
                        .iter()
                        .copied()
                        .filter(|kind| !tried.contains(kind))
                        .find(|kind| self.gate(window, *kind, state));

                    machine = match candidate {
                        None => SchedulerState::Skip,
                        Some(kind) => match self.produce(kind, selector, rng, state, now) {
                            Some(planned) => SchedulerState::Committed(planned),
                            None => {
                                tracing::debug!(kind = %kind, "No content for kind, downgrading");
                                tried.push(kind);
                                SchedulerState::Downgrading
                            }
                        },
                    };
                }
                terminal @ (SchedulerState::Skip | SchedulerState::Committed(_)) => {
                    return terminal;
                }
            }
        }
    }
}
