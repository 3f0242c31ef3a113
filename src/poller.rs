// src/poller.rs
//! Fixed-cadence refresh of the notification summary
//!
//! Kept for consumers that want a polling contract instead of subscribing to
//! the store's watch channel. The poller is read-only: each tick re-reads
//! the store and republishes the summary. Dropping the guard aborts the
//! task, so a consuming view cannot leak periodic work after teardown.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::notifications::{NotificationStore, NotificationSummary};

pub const POLL_PERIOD: Duration = Duration::from_secs(30);

pub struct NotificationPoller {
    handle: JoinHandle<()>,
}

impl NotificationPoller {
    /// Spawn the refresh loop. The first summary is published immediately;
    /// subsequent ones every `period`.
    pub fn start(
        store: Arc<NotificationStore>,
        period: Duration,
    ) -> (Self, watch::Receiver<NotificationSummary>) {
        let (tx, rx) = watch::channel(store.summary());

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // First tick fires immediately; skip it, the initial summary is
            // already in the channel.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let summary = store.summary();
                debug!(
                    "Notification poll: {} entries, {} unread",
                    summary.notifications.len(),
                    summary.unread_count
                );
                tx.send_replace(summary);
            }
        });

        (Self { handle }, rx)
    }
}

impl Drop for NotificationPoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
