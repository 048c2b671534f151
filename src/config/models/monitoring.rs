//! Monitoring configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Monitoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    /// Service name stamped on every alert
    #[serde(default = "default_service_name")]
    pub service_name: String,
    /// Background health check interval in seconds
    #[serde(default = "default_check_interval")]
    pub check_interval_secs: u64,
    /// How long resolved alerts are kept, in seconds
    #[serde(default = "default_alert_retention")]
    pub alert_retention_secs: u64,
    /// Deadline for cache writes and the cache probe, in seconds
    #[serde(default = "default_cache_timeout")]
    pub cache_timeout_secs: u64,
    /// Deadline for the database probe, in seconds
    #[serde(default = "default_database_timeout")]
    pub database_timeout_secs: u64,
    /// Error rate (percent) above which a warning alert is raised
    #[serde(default = "default_error_rate_threshold")]
    pub error_rate_threshold: f64,
    /// Average response time (milliseconds) above which a warning alert is raised
    #[serde(default = "default_response_time_threshold")]
    pub response_time_threshold_ms: u64,
    /// Key prefix for alerts mirrored to Redis
    #[serde(default = "default_alert_key_prefix")]
    pub alert_key_prefix: String,
    /// How often request counters are pushed into the metrics snapshot, in seconds
    #[serde(default = "default_metrics_flush_interval")]
    pub metrics_flush_interval_secs: u64,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            check_interval_secs: default_check_interval(),
            alert_retention_secs: default_alert_retention(),
            cache_timeout_secs: default_cache_timeout(),
            database_timeout_secs: default_database_timeout(),
            error_rate_threshold: default_error_rate_threshold(),
            response_time_threshold_ms: default_response_time_threshold(),
            alert_key_prefix: default_alert_key_prefix(),
            metrics_flush_interval_secs: default_metrics_flush_interval(),
        }
    }
}

impl MonitoringConfig {
    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_secs)
    }

    /// Retention window, saturating at [`chrono::Duration::MAX`]
    pub fn alert_retention(&self) -> chrono::Duration {
        i64::try_from(self.alert_retention_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .unwrap_or(chrono::Duration::MAX)
    }

    pub fn cache_timeout(&self) -> Duration {
        Duration::from_secs(self.cache_timeout_secs)
    }

    pub fn database_timeout(&self) -> Duration {
        Duration::from_secs(self.database_timeout_secs)
    }

    pub fn response_time_threshold(&self) -> Duration {
        Duration::from_millis(self.response_time_threshold_ms)
    }

    pub fn metrics_flush_interval(&self) -> Duration {
        Duration::from_secs(self.metrics_flush_interval_secs)
    }
}
