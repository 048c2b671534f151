//! Request counters fed by the HTTP layer and flushed into the monitor

use crate::monitoring::system::Monitor;
use dashmap::DashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Counter values read at flush time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecorderSnapshot {
    pub request_count: u64,
    pub error_count: u64,
    pub avg_response_time: Duration,
    pub active_users: u64,
}

/// Lock-free request accounting.
///
/// Request, error, and latency totals are cumulative. The active user set
/// covers the window since the previous flush.
#[derive(Debug, Default)]
pub struct RequestRecorder {
    requests: AtomicU64,
    errors: AtomicU64,
    total_latency_micros: AtomicU64,
    active_users: DashSet<String>,
}

impl RequestRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed request. Statuses of 500 and above count as errors.
    pub fn record(&self, status: u16, latency: Duration, user: Option<&str>) {
        self.requests.fetch_add(1, Ordering::Relaxed);
        if status >= 500 {
            self.errors.fetch_add(1, Ordering::Relaxed);
        }
        let micros = u64::try_from(latency.as_micros()).unwrap_or(u64::MAX);
        self.total_latency_micros.fetch_add(micros, Ordering::Relaxed);
        if let Some(user) = user {
            if !self.active_users.contains(user) {
                self.active_users.insert(user.to_string());
            }
        }
    }

    pub fn snapshot(&self) -> RecorderSnapshot {
        let request_count = self.requests.load(Ordering::Relaxed);
        let total_latency = self.total_latency_micros.load(Ordering::Relaxed);
        let avg_response_time = if request_count == 0 {
            Duration::ZERO
        } else {
            Duration::from_micros(total_latency / request_count)
        };
        RecorderSnapshot {
            request_count,
            error_count: self.errors.load(Ordering::Relaxed),
            avg_response_time,
            active_users: self.active_users.len() as u64,
        }
    }

    /// Push the current counters into `monitor` and start a new user window
    pub fn flush_into(&self, monitor: &Monitor) -> RecorderSnapshot {
        let snapshot = self.snapshot();
        self.active_users.clear();
        monitor.update_metrics(
            snapshot.request_count,
            snapshot.error_count,
            snapshot.avg_response_time,
            snapshot.active_users,
        );
        snapshot
    }

    /// Flush every `interval` until a shutdown signal arrives
    pub fn start_flush_task(
        self: &Arc<Self>,
        monitor: Monitor,
        interval: Duration,
        mut shutdown_rx: broadcast::Receiver<()>,
    ) -> JoinHandle<()> {
        let recorder = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // First tick completes immediately
            ticker.tick().await;
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let snapshot = recorder.flush_into(&monitor);
                        debug!(
                            requests = snapshot.request_count,
                            errors = snapshot.error_count,
                            "Flushed request metrics"
                        );
                    }
                    _ = shutdown_rx.recv() => {
                        info!("Metrics flush task shutting down");
                        break;
                    }
                }
            }
        })
    }
}
