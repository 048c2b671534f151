//! Alert persistence to the shared cache

use super::store::AlertStore;
use crate::monitoring::types::Alert;
use crate::storage::redis::RedisPool;
use crate::utils::error::Result;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Best-effort mirror for alert records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AlertSink: Send + Sync {
    /// Write the current state of `alert`
    async fn persist(&self, alert: &Alert) -> Result<()>;
}

/// Mirrors alerts as JSON under `{prefix}{id}` with a fixed TTL
#[derive(Debug, Clone)]
pub struct RedisAlertSink {
    pool: Arc<RedisPool>,
    key_prefix: String,
    ttl: Duration,
}

impl RedisAlertSink {
    pub fn new(pool: Arc<RedisPool>, key_prefix: impl Into<String>, ttl: Duration) -> Self {
        Self {
            pool,
            key_prefix: key_prefix.into(),
            ttl,
        }
    }

    pub fn key_for(&self, id: &str) -> String {
        format!("{}{}", self.key_prefix, id)
    }
}

#[async_trait]
impl AlertSink for RedisAlertSink {
    async fn persist(&self, alert: &Alert) -> Result<()> {
        let payload = serde_json::to_string(alert)?;
        self.pool
            .set(&self.key_for(&alert.id), &payload, Some(self.ttl.as_secs()))
            .await
    }
}

/// Ordered writer feeding one alert sink.
///
/// Writes go through a single worker task, so the last write for an alert
/// always carries its newest state. Each write is bounded by `deadline` and
/// failures are logged, never returned.
pub(crate) struct PersistQueue {
    sink: Arc<dyn AlertSink>,
    store: Arc<AlertStore>,
    deadline: Duration,
    sender: Mutex<Option<mpsc::UnboundedSender<Alert>>>,
}

impl PersistQueue {
    pub(crate) fn new(
        sink: Arc<dyn AlertSink>,
        store: Arc<AlertStore>,
        deadline: Duration,
    ) -> Self {
        Self {
            sink,
            store,
            deadline,
            sender: Mutex::new(None),
        }
    }

    /// Queue a write of `alert`.
    ///
    /// Returns `false` when no Tokio runtime is available, in which case the
    /// write is skipped.
    pub(crate) fn enqueue(&self, alert: Alert) -> bool {
        let mut sender = self.sender.lock();
        let alert = match sender.as_ref() {
            Some(tx) => match tx.send(alert) {
                Ok(()) => return true,
                // The worker's runtime has shut down
                Err(mpsc::error::SendError(alert)) => alert,
            },
            None => alert,
        };

        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                warn!(
                    alert_id = %alert.id,
                    "No async runtime available, skipping alert persistence"
                );
                *sender = None;
                return false;
            }
        };

        let (tx, rx) = mpsc::unbounded_channel();
        handle.spawn(run_worker(
            Arc::clone(&self.sink),
            Arc::clone(&self.store),
            self.deadline,
            rx,
        ));
        let queued = tx.send(alert).is_ok();
        *sender = Some(tx);
        queued
    }
}

async fn run_worker(
    sink: Arc<dyn AlertSink>,
    store: Arc<AlertStore>,
    deadline: Duration,
    mut rx: mpsc::UnboundedReceiver<Alert>,
) {
    debug!("Alert persistence worker started");
    while let Some(queued) = rx.recv().await {
        // Pruned alerts fall back to the queued copy
        let alert = store.get(&queued.id).unwrap_or(queued);
        match tokio::time::timeout(deadline, sink.persist(&alert)).await {
            Ok(Ok(())) => debug!(
                alert_id = %alert.id,
                resolved = alert.resolved,
                "Alert persisted"
            ),
            Ok(Err(e)) => warn!(alert_id = %alert.id, "Failed to persist alert: {}", e),
            Err(_) => warn!(
                alert_id = %alert.id,
                "Alert persistence timed out after {:?}", deadline
            ),
        }
    }
    debug!("Alert persistence worker stopped");
}
