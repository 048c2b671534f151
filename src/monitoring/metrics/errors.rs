//! Error breakdown by category

use crate::monitoring::types::ErrorBreakdown;
use crate::utils::error::Result;
use chrono::Utc;
use parking_lot::RwLock;

pub const CLIENT_ERROR: &str = "client_error";
pub const SERVER_ERROR: &str = "server_error";

/// Supplies the error breakdown folded into each metrics update
#[cfg_attr(test, mockall::automock)]
pub trait ErrorMetricsSource: Send + Sync {
    fn error_breakdown(&self) -> Result<ErrorBreakdown>;
}

/// In-process error counter keyed by category
#[derive(Debug, Default)]
pub struct ErrorTracker {
    inner: RwLock<ErrorBreakdown>,
}

impl ErrorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one error under `category`
    pub fn record(&self, category: &str) {
        let mut breakdown = self.inner.write();
        breakdown.total_errors += 1;
        *breakdown
            .by_category
            .entry(category.to_string())
            .or_insert(0) += 1;
        breakdown.last_error_at = Some(Utc::now());
    }

    /// Count an HTTP response status; statuses below 400 are ignored
    pub fn record_status(&self, status: u16) {
        match status {
            400..=499 => self.record(CLIENT_ERROR),
            500..=599 => self.record(SERVER_ERROR),
            _ => {}
        }
    }

    pub fn reset(&self) {
        *self.inner.write() = ErrorBreakdown::default();
    }
}

impl ErrorMetricsSource for ErrorTracker {
    fn error_breakdown(&self) -> Result<ErrorBreakdown> {
        Ok(self.inner.read().clone())
    }
}
