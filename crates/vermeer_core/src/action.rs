//! Post action kinds and per-kind counters.

use serde::{Deserialize, Serialize};

/// The kinds of post the agent can publish.
///
/// Kinds are a closed set: per-kind counters are fields, not dictionary
/// entries, so an unknown kind cannot appear in persisted state.
///
/// # Examples
///
/// ```
/// use vermeer_core::PostKind;
///
/// assert_eq!(format!("{}", PostKind::Image), "image");
/// assert_ne!(PostKind::Link, PostKind::Long);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PostKind {
    /// Image post sourced from the local assets directory
    Image,
    /// Link post pointing at a configured URL
    Link,
    /// Long-form text post
    Long,
}

/// Daily counts per post kind.
///
/// # Examples
///
/// ```
/// use vermeer_core::{PostKind, TypeCounts};
///
/// let mut counts = TypeCounts::default();
/// counts.increment(PostKind::Image);
/// assert_eq!(counts.get(PostKind::Image), 1);
/// assert_eq!(counts.get(PostKind::Link), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCounts {
    /// Image posts published today
    #[serde(default)]
    pub image: u32,
    /// Link posts published today
    #[serde(default)]
    pub link: u32,
    /// Long-form posts published today
    #[serde(default)]
    pub long: u32,
}

impl TypeCounts {
    /// Count for a kind.
    pub fn get(&self, kind: PostKind) -> u32 {
        match kind {
            PostKind::Image => self.image,
            PostKind::Link => self.link,
            PostKind::Long => self.long,
        }
    }

    /// Increment the count for a kind.
    pub fn increment(&mut self, kind: PostKind) {
        match kind {
            PostKind::Image => self.image += 1,
            PostKind::Link => self.link += 1,
            PostKind::Long => self.long += 1,
        }
    }

    /// Zero every count.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
