//! Posting caps.

use crate::PostKind;
use serde::{Deserialize, Serialize};

/// Daily, hourly, and per-kind posting ceilings.
///
/// # Examples
///
/// ```
/// use vermeer_core::{Caps, PostKind};
///
/// let caps = Caps::default();
/// assert_eq!(caps.posts_per_day, 4);
/// assert_eq!(caps.per_kind(PostKind::Image), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caps {
    /// Total posts allowed per calendar day
    pub posts_per_day: u32,
    /// Total posts allowed per clock hour
    pub posts_per_hour: u32,
    /// Image posts allowed per day
    pub image_per_day: u32,
    /// Link posts allowed per day
    pub link_per_day: u32,
    /// Long-form posts allowed per day
    pub long_per_day: u32,
}

impl Default for Caps {
    fn default() -> Self {
        Self {
            posts_per_day: 4,
            posts_per_hour: 1,
            image_per_day: 1,
            link_per_day: 2,
            long_per_day: 2,
        }
    }
}

impl Caps {
    /// Daily ceiling for a post kind.
    pub fn per_kind(&self, kind: PostKind) -> u32 {
        match kind {
            PostKind::Image => self.image_per_day,
            PostKind::Link => self.link_per_day,
            PostKind::Long => self.long_per_day,
        }
    }
}
