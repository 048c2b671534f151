//! Threshold evaluation and the metrics operations on [`Monitor`]

use super::snapshot::MetricsUpdate;
use crate::config::MonitoringConfig;
use crate::monitoring::system::Monitor;
use crate::monitoring::types::{AlertLevel, AlertMetadata, ErrorBreakdown, SystemMetrics};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, warn};

/// Limits that raise a warning alert when exceeded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdRules {
    /// Error rate percentage
    pub error_rate: f64,
    /// Average response time
    pub response_time: Duration,
}

impl Default for ThresholdRules {
    fn default() -> Self {
        Self {
            error_rate: 10.0,
            response_time: Duration::from_secs(5),
        }
    }
}

impl ThresholdRules {
    pub fn from_config(config: &MonitoringConfig) -> Self {
        Self {
            error_rate: config.error_rate_threshold,
            response_time: config.response_time_threshold(),
        }
    }

    /// Checks that `metrics` breaches, in evaluation order
    pub fn evaluate(&self, metrics: &SystemMetrics) -> Vec<ThresholdBreach> {
        let mut breaches = Vec::new();
        if metrics.error_rate > self.error_rate {
            breaches.push(ThresholdBreach::HighErrorRate {
                error_rate: metrics.error_rate,
                error_count: metrics.error_count,
                request_count: metrics.request_count,
                threshold: self.error_rate,
            });
        }
        if metrics.avg_response_time > self.response_time {
            breaches.push(ThresholdBreach::HighResponseTime {
                avg_response_time: metrics.avg_response_time,
                threshold: self.response_time,
            });
        }
        breaches
    }
}

/// A single exceeded threshold
#[derive(Debug, Clone, PartialEq)]
pub enum ThresholdBreach {
    HighErrorRate {
        error_rate: f64,
        error_count: u64,
        request_count: u64,
        threshold: f64,
    },
    HighResponseTime {
        avg_response_time: Duration,
        threshold: Duration,
    },
}

impl ThresholdBreach {
    pub fn level(&self) -> AlertLevel {
        AlertLevel::Warning
    }

    pub fn title(&self) -> &'static str {
        match self {
            ThresholdBreach::HighErrorRate { .. } => "High Error Rate Detected",
            ThresholdBreach::HighResponseTime { .. } => "High Response Time Detected",
        }
    }

    pub fn message(&self) -> String {
        match self {
            ThresholdBreach::HighErrorRate { error_rate, .. } => {
                format!("Error rate is {:.2}%", error_rate)
            }
            ThresholdBreach::HighResponseTime {
                avg_response_time, ..
            } => format!("Average response time is {:?}", avg_response_time),
        }
    }

    pub fn metadata(&self) -> AlertMetadata {
        let mut metadata = AlertMetadata::new();
        match self {
            ThresholdBreach::HighErrorRate {
                error_rate,
                error_count,
                request_count,
                threshold,
            } => {
                metadata.insert("error_rate".into(), json!(error_rate));
                metadata.insert("error_count".into(), json!(error_count));
                metadata.insert("request_count".into(), json!(request_count));
                metadata.insert("threshold".into(), json!(threshold));
            }
            ThresholdBreach::HighResponseTime {
                avg_response_time,
                threshold,
            } => {
                metadata.insert(
                    "avg_response_time_ms".into(),
                    json!(avg_response_time.as_millis() as u64),
                );
                metadata.insert("threshold_ms".into(), json!(threshold.as_millis() as u64));
            }
        }
        metadata
    }
}

impl Monitor {
    /// Replace the request counters and raise alerts for any breached threshold
    pub fn update_metrics(
        &self,
        request_count: u64,
        error_count: u64,
        avg_response_time: Duration,
        active_users: u64,
    ) -> SystemMetrics {
        let update = MetricsUpdate {
            request_count,
            error_count,
            avg_response_time,
            active_users,
        };
        let metrics = self.metrics.apply(update, self.read_error_breakdown());
        debug!(
            request_count,
            error_count,
            error_rate = metrics.error_rate,
            "Metrics updated"
        );

        for breach in self.thresholds.evaluate(&metrics) {
            self.create_alert(
                breach.level(),
                breach.title(),
                breach.message(),
                Some(breach.metadata()),
            );
        }
        metrics
    }

    /// Copy of the current metrics snapshot
    pub fn get_metrics(&self) -> SystemMetrics {
        self.metrics.snapshot()
    }

    fn read_error_breakdown(&self) -> Option<ErrorBreakdown> {
        let source = self.error_source.as_ref()?;
        match source.error_breakdown() {
            Ok(breakdown) => Some(breakdown),
            Err(e) => {
                warn!("Failed to read error breakdown: {}", e);
                None
            }
        }
    }
}
