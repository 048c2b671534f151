//! Shared metrics snapshot

use crate::monitoring::types::{ErrorBreakdown, HealthCheck, SystemMetrics};
use chrono::Utc;
use parking_lot::RwLock;
use std::time::Duration;

/// Counter values reported by the host application
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricsUpdate {
    pub request_count: u64,
    pub error_count: u64,
    pub avg_response_time: Duration,
    pub active_users: u64,
}

/// Error rate as a percentage, 0 when there were no requests
pub fn error_rate(request_count: u64, error_count: u64) -> f64 {
    if request_count == 0 {
        return 0.0;
    }
    error_count as f64 * 100.0 / request_count as f64
}

/// Single `SystemMetrics` record behind a reader/writer lock
#[derive(Debug, Default)]
pub struct MetricsSnapshot {
    inner: RwLock<SystemMetrics>,
}

impl MetricsSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the counters, recompute the error rate, and restamp.
    ///
    /// `breakdown` replaces the stored error breakdown only when present.
    /// Returns a copy of the updated record.
    pub fn apply(&self, update: MetricsUpdate, breakdown: Option<ErrorBreakdown>) -> SystemMetrics {
        let mut metrics = self.inner.write();
        metrics.timestamp = Utc::now();
        metrics.request_count = update.request_count;
        metrics.error_count = update.error_count;
        metrics.error_rate = error_rate(update.request_count, update.error_count);
        metrics.avg_response_time = update.avg_response_time;
        metrics.active_users = update.active_users;
        if breakdown.is_some() {
            metrics.error_breakdown = breakdown;
        }
        metrics.clone()
    }

    /// Store the latest result for `check.name`
    pub fn record_health_check(&self, check: HealthCheck) {
        self.inner
            .write()
            .health_checks
            .insert(check.name.clone(), check);
    }

    /// Mirror the dependency statuses from the latest background tick
    pub fn set_dependency_health(&self, database: impl Into<String>, redis: impl Into<String>) {
        let mut metrics = self.inner.write();
        metrics.database_health = database.into();
        metrics.redis_health = redis.into();
    }

    /// Deep copy of the current record
    pub fn snapshot(&self) -> SystemMetrics {
        self.inner.read().clone()
    }
}
