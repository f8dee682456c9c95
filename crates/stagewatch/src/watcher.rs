//! The watcher loop: scheduling and cycle orchestration.

use crate::config::{SubscriberMode, WatchConfig};
use crate::metrics::WatchMetrics;
use stagewatch_core::{KnownShows, reconcile};
use stagewatch_error::StagewatchResult;
use stagewatch_scrape::ShowSource;
use stagewatch_store::StateStore;
use stagewatch_telegram::{ChatId, Messenger, ShowAnnouncer};
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, instrument, warn};

/// Long-lived watcher owning the in-memory known set.
///
/// The known set has exactly one owner: this struct, on the scheduler task.
/// Cycles run inline in the loop, so at most one is ever in flight and no
/// locking is needed anywhere.
pub struct ShowWatcher<S, M> {
    source: S,
    store: StateStore,
    announcer: ShowAnnouncer<M>,
    config: WatchConfig,
    known: KnownShows,
    metrics: WatchMetrics,
}

impl<S: ShowSource, M: Messenger> ShowWatcher<S, M> {
    /// Creates a watcher, loading whatever state survived previous runs.
    ///
    /// A missing or unreadable state file degrades to an empty known set;
    /// it is never fatal.
    pub async fn new(
        source: S,
        store: StateStore,
        announcer: ShowAnnouncer<M>,
        config: WatchConfig,
    ) -> Self {
        let known = store.load().await;
        info!(known = known.len(), "Watcher initialized");

        Self {
            source,
            store,
            announcer,
            config,
            known,
            metrics: WatchMetrics::new(),
        }
    }

    /// The metrics handle for this watcher.
    pub fn metrics(&self) -> &WatchMetrics {
        &self.metrics
    }

    /// Number of shows currently known.
    pub fn known_shows(&self) -> usize {
        self.known.len()
    }

    /// Run cycles forever on the configured interval.
    ///
    /// The cycle body runs inline on this task; a cycle that overruns the
    /// interval delays the next tick instead of overlapping it. Per-cycle
    /// failures are logged at the cycle boundary and never escape the loop.
    #[instrument(skip(self))]
    pub async fn run(mut self) {
        let interval = self.config.schedule.interval();
        info!(interval_secs = interval.as_secs(), "Starting watch loop");

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            self.run_once().await;
        }
    }

    /// Run one cycle, absorbing any failure at the cycle boundary.
    pub async fn run_once(&mut self) {
        self.metrics.record_cycle();

        if let Err(e) = self.cycle().await {
            self.metrics.record_cycle_failure();
            error!(error = %e, "Cycle failed");
        }

        debug!(metrics = ?self.metrics.snapshot(), "Cycle finished");
    }

    /// One full cycle: extract, reconcile, persist, announce.
    async fn cycle(&mut self) -> StagewatchResult<()> {
        // An extraction failure aborts here, before any state mutation.
        let extraction = self.source.current_shows().await?;

        let fresh = reconcile(&extraction, &mut self.known);
        if fresh.is_empty() {
            debug!(scraped = extraction.len(), "No new shows");
            return Ok(());
        }

        info!(new_shows = fresh.len(), known = self.known.len(), "Discovered new shows");
        self.metrics.record_discoveries(fresh.len());

        // The in-memory set is authoritative; a failed save is retried the
        // next time a cycle discovers something, and never blocks delivery.
        if self.config.state.persist {
            if let Err(e) = self.store.save(&self.known).await {
                warn!(error = %e, "Failed to persist state, keeping in-memory set");
            }
        } else {
            debug!("State persistence disabled, skipping save");
        }

        let chats = self.subscriber_chats().await?;
        if chats.is_empty() {
            warn!("No subscribers to notify");
            return Ok(());
        }

        let report = self.announcer.announce(&fresh, &chats).await;
        self.metrics.record_delivery(report);

        Ok(())
    }

    async fn subscriber_chats(&self) -> StagewatchResult<Vec<ChatId>> {
        match self.config.notify.subscribers {
            SubscriberMode::Static => Ok(self.config.notify.chat_ids.clone()),
            SubscriberMode::Updates => self.announcer.messenger().subscribers().await,
        }
    }
}
