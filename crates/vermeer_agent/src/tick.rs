//! Per-tick decision procedure.

use crate::{ActionScheduler, ContentSelector, EngagementQueue, PlannedPost, PostContent, SchedulerState};
use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;
use tracing::{info, instrument, warn};
use vermeer_client::{Backoff, Platform};
use vermeer_core::{AgentConfig, Clock, PostKind, Settings};
use vermeer_error::VermeerResult;
use vermeer_state::{BotState, CapTracker, PostRecord, StateStore};

/// Terminal status of one tick.
///
/// `Skip` is the normal outcome when caps are exhausted or pools are empty;
/// `PostFailed` means a submission was attempted and errored after the retry
/// budget. The `Display` form is the log token printed per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum TickOutcome {
    /// One mention was engaged; posting was skipped this tick
    Engaged,
    /// A post was published
    #[strum(to_string = "posted")]
    Posted(PostKind),
    /// Inside the quiet-hour range
    SkipQuietHours,
    /// Daily post ceiling reached
    SkipDailyCap,
    /// Hourly post ceiling reached
    SkipHourlyCap,
    /// No target communities configured
    NoSubs,
    /// No category could act (caps or empty pools)
    Skip,
    /// Submission errored after exhausting retries
    PostFailed,
}

/// The per-tick decision procedure and its collaborators.
///
/// Owns the in-memory [`BotState`]; every state-changing action saves it
/// through the [`StateStore`] before the tick ends. Single-threaded by
/// construction: one tick runs at a time.
pub struct Agent<P, R> {
    platform: P,
    store: StateStore,
    state: BotState,
    clock: Clock,
    tracker: CapTracker,
    scheduler: ActionScheduler,
    selector: ContentSelector,
    engagement: EngagementQueue,
    backoff: Backoff,
    subreddits: Vec<String>,
    pacing: vermeer_core::Pacing,
    rng: R,
}

impl<P: Platform, R: Rng> Agent<P, R> {
    /// Assemble an agent from configuration and settings.
    ///
    /// Loads persisted state immediately; a missing or corrupt state file
    /// yields defaults.
    pub fn new(platform: P, config: AgentConfig, settings: &Settings, rng: R) -> Self {
        let store = StateStore::new(settings.state_file.clone());
        let state = store.load();
        let clock = Clock::new(settings.timezone, config.quiet, config.windows);
        let backoff = Backoff::default();
        let selector = ContentSelector::new(
            config.pools,
            settings.links.clone(),
            settings.assets_dir.clone(),
            config.recency,
        );

        Self {
            platform,
            store,
            state,
            clock,
            tracker: CapTracker::new(config.caps),
            scheduler: ActionScheduler::new(config.caps),
            selector,
            engagement: EngagementQueue::new(config.engagement, backoff),
            backoff,
            subreddits: settings.subreddits.clone(),
            pacing: config.pacing,
            rng,
        }
    }

    /// Read access to the current state, for inspection and tests.
    pub fn state(&self) -> &BotState {
        &self.state
    }

    /// Read access to the platform collaborator.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Run one tick: at most one external side effect.
    ///
    /// # Errors
    ///
    /// Only a failed state save surfaces as an error; platform failures are
    /// folded into the returned [`TickOutcome`].
    #[instrument(skip(self))]
    pub async fn tick(&mut self) -> VermeerResult<TickOutcome> {
        // Engagement first; if it acts, the tick ends here.
        let engaged = self
            .engagement
            .try_engage(
                &self.platform,
                &mut self.state,
                &self.store,
                &self.selector,
                &mut self.rng,
            )
            .await?;
        if engaged {
            return Ok(TickOutcome::Engaged);
        }

        let now = self.clock.now();
        self.tracker.reset_if_new_day(&mut self.state, &now);
        self.tracker.reset_if_new_hour(&mut self.state, &now);

        if !self.tracker.under_daily_cap(&self.state) {
            return Ok(TickOutcome::SkipDailyCap);
        }
        if !self.tracker.under_hourly_cap(&self.state) {
            return Ok(TickOutcome::SkipHourlyCap);
        }
        if self.clock.is_quiet_hours(&now) {
            return Ok(TickOutcome::SkipQuietHours);
        }

        let Some(community) = self.subreddits.choose(&mut self.rng).cloned() else {
            return Ok(TickOutcome::NoSubs);
        };

        let window = self.clock.window_of(&now);
        let planned = match self.scheduler.plan(
            window,
            &self.selector,
            &mut self.rng,
            &self.state,
            now.with_timezone(&Utc),
        ) {
            SchedulerState::Committed(planned) => planned,
            _ => return Ok(TickOutcome::Skip),
        };

        let kind = planned.content.kind();
        info!(window = %window, kind = %kind, community = %community, "Submitting post");

        if let Err(e) = self.submit(&community, &planned).await {
            warn!(error = %e, kind = %kind, "Post failed after retries");
            return Ok(TickOutcome::PostFailed);
        }

        // Mutate and save only after the platform call succeeded, so a crash
        // in between cannot replay the post on restart.
        self.state.count_post(kind);
        self.state.remember_post(PostRecord {
            content_key: planned.content.content_key(),
            media_ref: match &planned.content {
                PostContent::Image(path) => Some(path.display().to_string()),
                _ => None,
            },
            timestamp: Utc::now(),
        });
        self.store.save(&self.state)?;

        self.pace().await;
        Ok(TickOutcome::Posted(kind))
    }

    async fn submit(&self, community: &str, planned: &PlannedPost) -> Result<String, vermeer_error::ClientError> {
        match &planned.content {
            PostContent::Image(path) => {
                self.backoff
                    .run(|| self.platform.submit_image_post(community, &planned.title, path))
                    .await
            }
            PostContent::Link(url) => {
                self.backoff
                    .run(|| self.platform.submit_link_post(community, &planned.title, url))
                    .await
            }
            PostContent::Long(body) => {
                self.backoff
                    .run(|| self.platform.submit_text_post(community, &planned.title, body))
                    .await
            }
        }
    }

    /// Short random delay after a successful post.
    async fn pace(&mut self) {
        let secs = self
            .rng
            .gen_range(self.pacing.post_delay_min_s..=self.pacing.post_delay_max_s);
        tokio::time::sleep(Duration::from_secs(secs)).await;
    }
}
