//! The persisted state aggregate.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use vermeer_core::{PostKind, TypeCounts};

/// Most recent posts kept for anti-repetition lookups.
pub const HISTORY_CAP: usize = 400;

/// Most recent engaged mention ids kept for dedup.
pub const MENTIONS_CAP: usize = 500;

/// Date-scoped posting counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCounters {
    /// Calendar date the counters belong to
    pub date: NaiveDate,
    /// Posts published on that date
    pub total_posts: u32,
    /// Posts published on that date, per kind
    pub per_type: TypeCounts,
}

/// A (date, hour) pair identifying one clock hour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HourKey {
    /// Calendar date
    pub date: NaiveDate,
    /// Hour of day, 0–23
    pub hour: u32,
}

impl HourKey {
    /// Key for a zoned instant.
    pub fn of<Tz: chrono::TimeZone>(now: &DateTime<Tz>) -> Self {
        use chrono::Timelike;
        Self {
            date: now.date_naive(),
            hour: now.hour(),
        }
    }
}

/// Hour-scoped posting counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyCounters {
    /// Clock hour the counter belongs to
    pub hour_key: HourKey,
    /// Posts published in that hour
    pub total_posts: u32,
}

/// One published post, kept for anti-repetition lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Equality key of the content (file path for images, exact string otherwise)
    pub content_key: String,
    /// Media path, present only for image posts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_ref: Option<String>,
    /// When the post was published
    pub timestamp: DateTime<Utc>,
}

/// The single persisted state aggregate.
///
/// # Examples
///
/// ```
/// use vermeer_state::BotState;
/// use vermeer_core::PostKind;
///
/// let mut state = BotState::default();
/// state.count_post(PostKind::Link);
/// assert_eq!(state.daily.total_posts, 1);
/// assert_eq!(state.hourly.total_posts, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotState {
    /// Date-scoped counters
    pub daily: DailyCounters,
    /// Hour-scoped counters
    pub hourly: HourlyCounters,
    /// Recent posts, insertion-ordered, capped at [`HISTORY_CAP`]
    #[serde(default)]
    pub history: Vec<PostRecord>,
    /// Recently engaged mention ids, capped at [`MENTIONS_CAP`]
    #[serde(default)]
    pub processed_mentions: Vec<String>,
}

impl BotState {
    /// Append a post record, evicting the oldest past [`HISTORY_CAP`].
    pub fn remember_post(&mut self, record: PostRecord) {
        self.history.push(record);
        if self.history.len() > HISTORY_CAP {
            let excess = self.history.len() - HISTORY_CAP;
            self.history.drain(..excess);
        }
    }

    /// Count a published post against the daily and hourly counters.
    pub fn count_post(&mut self, kind: PostKind) {
        self.daily.total_posts += 1;
        self.daily.per_type.increment(kind);
        self.hourly.total_posts += 1;
    }

    /// Whether a mention id has already been engaged.
    pub fn is_mention_processed(&self, id: &str) -> bool {
        self.processed_mentions.iter().any(|m| m == id)
    }

    /// Record an engaged mention id, evicting the oldest past [`MENTIONS_CAP`].
    pub fn remember_mention(&mut self, id: impl Into<String>) {
        self.processed_mentions.push(id.into());
        if self.processed_mentions.len() > MENTIONS_CAP {
            let excess = self.processed_mentions.len() - MENTIONS_CAP;
            self.processed_mentions.drain(..excess);
        }
    }

    /// Scan history newest-first for a content key used since `cutoff`.
    pub fn used_since(&self, content_key: &str, cutoff: DateTime<Utc>) -> bool {
        self.history
            .iter()
            .rev()
            .any(|record| record.timestamp >= cutoff && record.content_key == content_key)
    }
}
