//! Simulated live status feed for the resort panel.
//!
//! There is no telemetry backend: a background task periodically refreshes
//! the "last update" label of each metric and publishes the result.
//!
//! ## Submodules
//!
//! - [`metric`]: the [`Metric`] record and its status presentation mapping
//! - [`poller`]: the cancellable background task driving [`MetricsFeed::tick`]
//! - [`source`]: the [`MetricsSource`] trait the app reads metrics through
//!
//! ## Data Flow
//!
//! ```text
//! MetricsFeed (owned by the poller task)
//!        │ tick() every period
//!        ▼
//! watch::Sender<FeedSnapshot>
//!        │
//!        ▼
//! FeedSource::poll()  ──▶ App
//! ```

pub mod metric;
pub mod poller;
pub mod source;

pub use metric::{default_metrics, Metric, MetricStatus, Tone};
pub use poller::{spawn_poller, PollerHandle, DEFAULT_PERIOD, MIN_PERIOD};
pub use source::{FeedSource, MetricsSource, StaticSource};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

/// Metrics as published after a tick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeedSnapshot {
    /// Number of ticks applied so far.
    pub ticks: u64,
    pub metrics: Vec<Metric>,
}

/// The metric sequence plus the randomness used to refresh it.
#[derive(Debug)]
pub struct MetricsFeed {
    metrics: Vec<Metric>,
    ticks: u64,
    rng: StdRng,
}

impl MetricsFeed {
    /// Seed a feed with an entropy-backed generator.
    pub fn new(seed: Vec<Metric>) -> Self {
        Self::with_rng(seed, StdRng::from_entropy())
    }

    /// Seed a feed with a caller-supplied generator (deterministic in tests).
    pub fn with_rng(seed: Vec<Metric>, rng: StdRng) -> Self {
        Self {
            metrics: seed,
            ticks: 0,
            rng,
        }
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Refresh every metric's last-update label.
    pub fn tick(&mut self) {
        metric::refresh_labels(&mut self.metrics, &mut self.rng);
        self.ticks += 1;
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        FeedSnapshot {
            ticks: self.ticks,
            metrics: self.metrics.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::metric::{parse_minutes_ago, DELAY_MINUTES};

    fn seed() -> Vec<Metric> {
        vec![
            Metric::new("occupancy", "Ocupación", "87%", MetricStatus::Normal, "Hace 2 min"),
            Metric::new("wifi", "Wi-Fi", "Estable", MetricStatus::Warning, "Hace 1 min"),
            Metric::new("temperature", "Temperatura", "24°C", MetricStatus::Critical, "Hace 5 min"),
        ]
    }

    #[test]
    fn test_tick_keeps_ids_in_order() {
        let mut feed = MetricsFeed::with_rng(seed(), StdRng::seed_from_u64(1));
        feed.tick();

        let ids: Vec<&str> = feed.metrics().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["occupancy", "wifi", "temperature"]);
        for metric in feed.metrics() {
            let minutes = parse_minutes_ago(&metric.last_update_label).unwrap();
            assert!(DELAY_MINUTES.contains(&minutes));
        }
    }

    #[test]
    fn test_tick_leaves_value_and_status() {
        let mut feed = MetricsFeed::new(seed());
        feed.tick();
        for (after, before) in feed.metrics().iter().zip(seed()) {
            assert_eq!(after.value, before.value);
            assert_eq!(after.status, before.status);
            assert_eq!(after.label, before.label);
        }
    }

    #[test]
    fn test_tick_counter_and_snapshot() {
        let mut feed = MetricsFeed::new(seed());
        assert_eq!(feed.snapshot().ticks, 0);
        feed.tick();
        feed.tick();
        let snapshot = feed.snapshot();
        assert_eq!(snapshot.ticks, 2);
        assert_eq!(snapshot.metrics, feed.metrics());
    }

    #[test]
    fn test_empty_feed_ticks() {
        let mut feed = MetricsFeed::new(Vec::new());
        feed.tick();
        assert!(feed.metrics().is_empty());
        assert_eq!(feed.ticks(), 1);
    }
}
