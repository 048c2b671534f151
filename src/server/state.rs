//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::monitoring::Monitor;
use crate::monitoring::metrics::{ErrorTracker, RequestRecorder};
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are cheap to clone and shared by every worker.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Alert store, metrics, and health checks
    pub monitor: Monitor,
    /// Request counters flushed into the monitor
    pub recorder: Arc<RequestRecorder>,
    /// Error breakdown read by the monitor on each metrics update
    pub errors: Arc<ErrorTracker>,
}

impl AppState {
    pub fn new(
        config: Config,
        monitor: Monitor,
        recorder: Arc<RequestRecorder>,
        errors: Arc<ErrorTracker>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            monitor,
            recorder,
            errors,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
