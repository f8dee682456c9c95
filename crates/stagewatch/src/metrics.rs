//! Metrics collection for watcher cycles.

use serde::Serialize;
use stagewatch_telegram::DeliveryReport;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Metrics collector for watcher cycles.
#[derive(Debug, Clone, Default)]
pub struct WatchMetrics {
    inner: Arc<WatchMetricsInner>,
}

#[derive(Debug, Default)]
struct WatchMetricsInner {
    cycles: AtomicU64,
    cycle_failures: AtomicU64,
    shows_discovered: AtomicU64,
    notifications_sent: AtomicU64,
    notification_failures: AtomicU64,
    last_discovery: parking_lot::Mutex<Option<Instant>>,
}

impl WatchMetrics {
    /// Creates a new metrics collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a started cycle.
    pub fn record_cycle(&self) {
        self.inner.cycles.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a failed cycle.
    pub fn record_cycle_failure(&self) {
        self.inner.cycle_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Records newly discovered shows.
    pub fn record_discoveries(&self, count: usize) {
        self.inner
            .shows_discovered
            .fetch_add(count as u64, Ordering::Relaxed);
        *self.inner.last_discovery.lock() = Some(Instant::now());
    }

    /// Records the outcome of one announcement pass.
    pub fn record_delivery(&self, report: DeliveryReport) {
        self.inner
            .notifications_sent
            .fetch_add(report.sent as u64, Ordering::Relaxed);
        self.inner
            .notification_failures
            .fetch_add(report.failed as u64, Ordering::Relaxed);
    }

    /// Takes a snapshot of the current counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            as_of: chrono::Utc::now(),
            cycles: self.inner.cycles.load(Ordering::Relaxed),
            cycle_failures: self.inner.cycle_failures.load(Ordering::Relaxed),
            shows_discovered: self.inner.shows_discovered.load(Ordering::Relaxed),
            notifications_sent: self.inner.notifications_sent.load(Ordering::Relaxed),
            notification_failures: self.inner.notification_failures.load(Ordering::Relaxed),
            seconds_since_last_discovery: self
                .inner
                .last_discovery
                .lock()
                .as_ref()
                .map(|at| at.elapsed().as_secs()),
        }
    }
}

/// Point-in-time view of the watcher counters.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// When the snapshot was taken
    pub as_of: chrono::DateTime<chrono::Utc>,
    /// Cycles started
    pub cycles: u64,
    /// Cycles that failed at the cycle boundary
    pub cycle_failures: u64,
    /// Shows discovered across all cycles
    pub shows_discovered: u64,
    /// Announcement messages delivered
    pub notifications_sent: u64,
    /// Announcement messages that failed to deliver
    pub notification_failures: u64,
    /// Seconds since something was last discovered, if ever
    pub seconds_since_last_discovery: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let metrics = WatchMetrics::new();

        metrics.record_cycle();
        metrics.record_cycle();
        metrics.record_cycle_failure();
        metrics.record_discoveries(3);
        metrics.record_delivery(DeliveryReport { sent: 5, failed: 1 });

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.cycles, 2);
        assert_eq!(snapshot.cycle_failures, 1);
        assert_eq!(snapshot.shows_discovered, 3);
        assert_eq!(snapshot.notifications_sent, 5);
        assert_eq!(snapshot.notification_failures, 1);
        assert!(snapshot.seconds_since_last_discovery.is_some());
    }

    #[test]
    fn discovery_timestamp_starts_absent() {
        let metrics = WatchMetrics::new();
        assert_eq!(metrics.snapshot().seconds_since_last_discovery, None);
    }
}
