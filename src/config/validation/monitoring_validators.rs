//! Monitoring configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

/// Ten years
pub const MAX_ALERT_RETENTION_SECS: u64 = 10 * 365 * 24 * 60 * 60;

impl Validate for MonitoringConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating monitoring configuration");

        if self.service_name.trim().is_empty() {
            return Err("Service name cannot be empty".to_string());
        }

        if self.check_interval_secs == 0 {
            return Err("Health check interval must be greater than 0".to_string());
        }

        if self.alert_retention_secs == 0 {
            return Err("Alert retention must be greater than 0".to_string());
        }

        if self.alert_retention_secs > MAX_ALERT_RETENTION_SECS {
            return Err(format!(
                "Alert retention cannot exceed {} seconds",
                MAX_ALERT_RETENTION_SECS
            ));
        }

        if self.cache_timeout_secs == 0 {
            return Err("Cache timeout must be greater than 0".to_string());
        }

        if self.database_timeout_secs == 0 {
            return Err("Database timeout must be greater than 0".to_string());
        }

        if !(0.0..=100.0).contains(&self.error_rate_threshold) {
            return Err("Error rate threshold must be between 0 and 100".to_string());
        }

        if self.response_time_threshold_ms == 0 {
            return Err("Response time threshold must be greater than 0".to_string());
        }

        if self.alert_key_prefix.is_empty() {
            return Err("Alert key prefix cannot be empty".to_string());
        }

        if self.metrics_flush_interval_secs == 0 {
            return Err("Metrics flush interval must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.level.to_ascii_lowercase().as_str()) {
            return Err(format!(
                "Invalid log level '{}', expected one of {:?}",
                self.level, LEVELS
            ));
        }
        Ok(())
    }
}
