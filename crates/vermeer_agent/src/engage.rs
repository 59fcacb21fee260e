//! Opt-in mention engagement.

use crate::ContentSelector;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, warn};
use vermeer_client::{Backoff, Mention, Platform};
use vermeer_core::EngagementConfig;
use vermeer_error::VermeerResult;
use vermeer_state::{BotState, StateStore};

/// Performs at most one engagement per tick, ahead of posting.
///
/// Engagement is best-effort: an empty queue or a failed platform call falls
/// through silently to the posting path and never blocks it.
pub struct EngagementQueue {
    config: EngagementConfig,
    backoff: Backoff,
}

impl EngagementQueue {
    /// Create a queue with the given tuning and retry policy.
    pub fn new(config: EngagementConfig, backoff: Backoff) -> Self {
        Self { config, backoff }
    }

    /// Fetch recent mentions and drop any already engaged.
    async fn fetch_unprocessed<P: Platform>(
        &self,
        platform: &P,
        state: &BotState,
    ) -> Option<Vec<Mention>> {
        let limit = self.config.fetch_limit;
        match self.backoff.run(|| platform.fetch_mentions(limit)).await {
            Ok(mentions) => Some(
                mentions
                    .into_iter()
                    .filter(|m| !state.is_mention_processed(&m.id))
                    .collect(),
            ),
            Err(e) => {
                warn!(error = %e, "Mention fetch failed, skipping engagement");
                None
            }
        }
    }

    /// Try to engage one mention; returns whether an engagement happened.
    ///
    /// On success the mention id is recorded (bounded, oldest evicted) and
    /// state is saved before returning, so a restart cannot replay the
    /// engagement.
    ///
    /// # Errors
    ///
    /// Only the state save can error; platform failures are swallowed here
    /// by design.
    pub async fn try_engage<P: Platform, R: Rng>(
        &self,
        platform: &P,
        state: &mut BotState,
        store: &StateStore,
        selector: &ContentSelector,
        rng: &mut R,
    ) -> VermeerResult<bool> {
        let unprocessed = match self.fetch_unprocessed(platform, state).await {
            Some(mentions) if !mentions.is_empty() => mentions,
            _ => {
                debug!("No unprocessed mentions");
                return Ok(false);
            }
        };

        // Uniform over the unprocessed set, not necessarily the newest.
        let Some(mention) = unprocessed.choose(rng).cloned() else {
            return Ok(false);
        };

        let upvote = rng.gen_bool(self.config.upvote_probability);
        let outcome = if upvote {
            self.backoff.run(|| platform.upvote(&mention.id)).await
        } else {
            match selector.reply_phrase(rng) {
                Some(text) => self.backoff.run(|| platform.reply(&mention.id, &text)).await,
                None => self.backoff.run(|| platform.upvote(&mention.id)).await,
            }
        };

        if let Err(e) = outcome {
            warn!(error = %e, mention = %mention.id, "Engagement failed, falling through");
            return Ok(false);
        }

        state.remember_mention(mention.id.clone());
        store.save(state)?;
        info!(mention = %mention.id, author = %mention.author, upvote, "Engaged a mention");
        Ok(true)
    }
}
