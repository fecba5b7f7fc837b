//! Background task that ticks a [`MetricsFeed`] on a fixed period.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use super::{FeedSnapshot, FeedSource, MetricsFeed};

/// Refresh period used when none is configured.
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(30);

/// Shortest period the task will tick at; shorter requests are raised to it.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Start ticking `feed` every `period` on the current tokio runtime.
///
/// The first tick happens one full period after spawning; the initial
/// state is available from the returned source immediately. The task owns
/// the feed outright, so nothing else can mutate it.
///
/// A `period` below [`MIN_PERIOD`] (including zero) is raised to it.
///
/// Must be called from within a tokio runtime.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use huesped::feed::{default_metrics, spawn_poller, MetricsFeed, MetricsSource};
///
/// # tokio_test::block_on(async {
/// let feed = MetricsFeed::new(default_metrics());
/// let (handle, mut source) = spawn_poller(feed, Duration::from_secs(30));
///
/// let initial = source.poll().unwrap();
/// assert_eq!(initial.ticks, 0);
///
/// handle.shutdown().await;
/// # });
/// ```
pub fn spawn_poller(feed: MetricsFeed, period: Duration) -> (PollerHandle, FeedSource) {
    if period < MIN_PERIOD {
        tracing::warn!(?period, "refresh period too short, using {:?}", MIN_PERIOD);
    }
    let period = period.max(MIN_PERIOD);
    let (stop_tx, stop_rx) = watch::channel(false);
    let (snapshot_tx, snapshot_rx) = watch::channel(feed.snapshot());

    let task = tokio::spawn(run(feed, period, snapshot_tx, stop_rx));
    tracing::info!(period_secs = period.as_secs_f64(), "metrics poller started");

    let handle = PollerHandle {
        stop_tx,
        task: Some(task),
    };
    (handle, FeedSource::new(snapshot_rx, "simulated"))
}

async fn run(
    mut feed: MetricsFeed,
    period: Duration,
    snapshot_tx: watch::Sender<FeedSnapshot>,
    mut stop_rx: watch::Receiver<bool>,
) {
    let mut timer = time::interval_at(Instant::now() + period, period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = timer.tick() => {
                feed.tick();
                tracing::debug!(ticks = feed.ticks(), "metrics refreshed");
                if snapshot_tx.send(feed.snapshot()).is_err() {
                    // Every receiver is gone; nobody is watching.
                    break;
                }
            }
            changed = stop_rx.changed() => {
                if changed.is_err() || *stop_rx.borrow() {
                    break;
                }
            }
        }
    }

    tracing::info!(ticks = feed.ticks(), "metrics poller stopped");
}

/// Owner of a running poller task.
///
/// Call [`PollerHandle::stop`] or [`PollerHandle::shutdown`] when the owning
/// view goes away. Dropping the handle aborts the task, so a forgotten handle
/// cannot leave a repeating timer behind.
#[derive(Debug)]
pub struct PollerHandle {
    stop_tx: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl PollerHandle {
    /// Signal the task to stop without waiting for it.
    ///
    /// The task is detached rather than aborted, so it still finishes its
    /// current tick and exits on its own.
    pub fn stop(mut self) {
        let _ = self.stop_tx.send(true);
        self.task.take();
    }

    /// Signal the task to stop and wait until it has exited.
    pub async fn shutdown(mut self) {
        let _ = self.stop_tx.send(true);
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }

    /// Whether the task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, |task| task.is_finished())
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::metric::parse_minutes_ago;
    use crate::feed::{default_metrics, MetricsSource};

    fn feed() -> MetricsFeed {
        MetricsFeed::new(default_metrics())
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_snapshot_available_before_first_tick() {
        let (handle, mut source) = spawn_poller(feed(), DEFAULT_PERIOD);

        let snapshot = source.poll().unwrap();
        assert_eq!(snapshot.ticks, 0);
        assert_eq!(snapshot.metrics, default_metrics());
        assert!(source.poll().is_none());

        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_tick_before_one_period() {
        let (handle, mut source) = spawn_poller(feed(), DEFAULT_PERIOD);
        source.poll();

        time::sleep(Duration::from_secs(29)).await;
        assert!(source.poll().is_none());

        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_tick_per_period() {
        let (handle, mut source) = spawn_poller(feed(), DEFAULT_PERIOD);
        source.poll();

        time::sleep(Duration::from_secs(31)).await;
        let snapshot = source.poll().unwrap();
        assert_eq!(snapshot.ticks, 1);
        for metric in &snapshot.metrics {
            assert!(parse_minutes_ago(&metric.last_update_label).is_some());
        }

        time::sleep(Duration::from_secs(60)).await;
        assert_eq!(source.poll().unwrap().ticks, 3);

        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_ends_task() {
        let (handle, mut source) = spawn_poller(feed(), DEFAULT_PERIOD);
        source.poll();

        handle.shutdown().await;
        assert!(source.error().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_ends_task() {
        let (handle, mut source) = spawn_poller(feed(), DEFAULT_PERIOD);
        source.poll();
        handle.stop();

        time::sleep(Duration::from_secs(120)).await;
        assert!(source.poll().is_none());
        assert!(source.error().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_period_is_clamped() {
        let (handle, mut source) = spawn_poller(feed(), Duration::ZERO);
        source.poll();

        time::sleep(Duration::from_millis(10)).await;
        let snapshot = source.poll().unwrap();
        assert!(snapshot.ticks >= 1);
        assert!(source.error().is_none());
        assert!(!handle.is_finished());

        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_task() {
        let (handle, mut source) = spawn_poller(feed(), DEFAULT_PERIOD);
        source.poll();
        drop(handle);

        time::sleep(Duration::from_secs(120)).await;
        assert!(source.poll().is_none());
        assert!(source.error().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_task_exits_when_source_dropped() {
        let (handle, source) = spawn_poller(feed(), DEFAULT_PERIOD);
        drop(source);

        time::sleep(Duration::from_secs(31)).await;
        tokio::task::yield_now().await;
        assert!(handle.is_finished());
    }
}
