//! Where the app reads metrics from.
//!
//! The app never touches a [`MetricsFeed`](super::MetricsFeed) directly. It
//! polls a [`MetricsSource`], which is either the receiving end of a running
//! poller or a fixed list.

use std::fmt::Debug;

use tokio::sync::watch;

use super::{FeedSnapshot, Metric};

/// Trait for receiving metric snapshots.
pub trait MetricsSource: Send + Debug {
    /// Poll for the latest snapshot.
    ///
    /// Returns `Some(snapshot)` if new data is available, `None` otherwise.
    /// This method must not block.
    fn poll(&mut self) -> Option<FeedSnapshot>;

    /// Human-readable description of the source, shown in the status bar.
    fn description(&self) -> &str;

    /// Returns a message if the source can no longer produce data.
    fn error(&self) -> Option<&str>;
}

/// Receives snapshots published by a poller task.
#[derive(Debug)]
pub struct FeedSource {
    receiver: watch::Receiver<FeedSnapshot>,
    description: String,
    initial_returned: bool,
}

impl FeedSource {
    pub fn new(receiver: watch::Receiver<FeedSnapshot>, source_description: &str) -> Self {
        Self {
            receiver,
            description: format!("feed: {}", source_description),
            initial_returned: false,
        }
    }
}

impl MetricsSource for FeedSource {
    fn poll(&mut self) -> Option<FeedSnapshot> {
        // The seed metrics count as the first snapshot.
        if !self.initial_returned {
            self.initial_returned = true;
            return Some(self.receiver.borrow_and_update().clone());
        }

        if self.receiver.has_changed().unwrap_or(false) {
            Some(self.receiver.borrow_and_update().clone())
        } else {
            None
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        // has_changed only fails once the sending task has gone away.
        match self.receiver.has_changed() {
            Ok(_) => None,
            Err(_) => Some("el feed de estado se ha detenido"),
        }
    }
}

/// A fixed list of metrics that never changes.
#[derive(Debug)]
pub struct StaticSource {
    snapshot: Option<FeedSnapshot>,
}

impl StaticSource {
    pub fn new(metrics: Vec<Metric>) -> Self {
        Self {
            snapshot: Some(FeedSnapshot { ticks: 0, metrics }),
        }
    }
}

impl MetricsSource for StaticSource {
    fn poll(&mut self) -> Option<FeedSnapshot> {
        self.snapshot.take()
    }

    fn description(&self) -> &str {
        "static"
    }

    fn error(&self) -> Option<&str> {
        None
    }
}
