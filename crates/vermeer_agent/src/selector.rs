//! Anti-repetition content selection.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::PathBuf;
use vermeer_client::list_local_images;
use vermeer_core::{ContentPools, RecencyConfig};
use vermeer_state::BotState;

/// Chooses content items while avoiding recent repeats.
///
/// One algorithm serves images, links, and long greetings: shuffle the
/// candidate pool, take the first entry whose equality key (file path or
/// exact string) has not been posted within the recency window, and fall
/// back to a uniform random choice when every candidate is disqualified.
/// Repetition beats skipping once the pool is exhausted.
///
/// Short greeting titles are procedural and exempt from recency filtering.
pub struct ContentSelector {
    pools: ContentPools,
    links: Vec<String>,
    assets_dir: PathBuf,
    recency: RecencyConfig,
}

impl ContentSelector {
    /// Create a selector over the configured pools.
    pub fn new(
        pools: ContentPools,
        links: Vec<String>,
        assets_dir: PathBuf,
        recency: RecencyConfig,
    ) -> Self {
        Self {
            pools,
            links,
            assets_dir,
            recency,
        }
    }

    /// The generic selection pass.
    fn pick_fresh<R: Rng>(
        rng: &mut R,
        mut candidates: Vec<String>,
        state: &BotState,
        cutoff: DateTime<Utc>,
    ) -> Option<String> {
        if candidates.is_empty() {
            return None;
        }

        candidates.shuffle(rng);
        for candidate in &candidates {
            if !state.used_since(candidate, cutoff) {
                return Some(candidate.clone());
            }
        }

        // Whole pool used recently: repeat rather than skip.
        candidates.choose(rng).cloned()
    }

    fn cutoff(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
        now - Duration::days(days)
    }

    /// Pick an image not posted within the image recency window.
    ///
    /// The pool is the assets directory, enumerated lazily; `None` means no
    /// candidate exists at all.
    pub fn pick_image<R: Rng>(
        &self,
        rng: &mut R,
        state: &BotState,
        now: DateTime<Utc>,
    ) -> Option<PathBuf> {
        let candidates: Vec<String> = list_local_images(&self.assets_dir)
            .into_iter()
            .map(|p| p.display().to_string())
            .collect();

        Self::pick_fresh(
            rng,
            candidates,
            state,
            Self::cutoff(now, self.recency.image_days),
        )
        .map(PathBuf::from)
    }

    /// Pick a link URL not posted within the text recency window.
    pub fn pick_link<R: Rng>(
        &self,
        rng: &mut R,
        state: &BotState,
        now: DateTime<Utc>,
    ) -> Option<String> {
        Self::pick_fresh(
            rng,
            self.links.clone(),
            state,
            Self::cutoff(now, self.recency.text_days),
        )
    }

    /// Pick a long greeting not posted within the text recency window.
    pub fn pick_long_greeting<R: Rng>(
        &self,
        rng: &mut R,
        state: &BotState,
        now: DateTime<Utc>,
    ) -> Option<String> {
        Self::pick_fresh(
            rng,
            self.pools.long_greetings.clone(),
            state,
            Self::cutoff(now, self.recency.text_days),
        )
    }

    /// A short greeting title: random phrase, sometimes with a flourish.
    pub fn short_greeting<R: Rng>(&self, rng: &mut R) -> String {
        let phrase = self
            .pools
            .titles
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| "Hello!".to_string());

        match self.pools.flourishes.choose(rng) {
            Some(flourish) if rng.gen_bool(0.7) => format!("{} {}", phrase, flourish),
            _ => phrase,
        }
    }

    /// A reply phrase for mention engagement.
    pub fn reply_phrase<R: Rng>(&self, rng: &mut R) -> Option<String> {
        self.pools.replies.choose(rng).cloned()
    }
}
