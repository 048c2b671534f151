//! Type definitions for alerts, health checks, and the metrics snapshot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Free-form key/value data attached to an alert
pub type AlertMetadata = HashMap<String, serde_json::Value>;

/// Dependency status before the first background tick
pub const HEALTH_UNKNOWN: &str = "unknown";
/// Dependency status when no probe is configured for it
pub const HEALTH_NOT_CONFIGURED: &str = "not_configured";

/// Alert severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Info,
    Warning,
    Critical,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Info => "info",
            AlertLevel::Warning => "warning",
            AlertLevel::Critical => "critical",
        }
    }
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alert information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Alert ID
    pub id: String,
    /// Alert severity
    pub level: AlertLevel,
    /// Short title
    pub title: String,
    /// Free text description
    pub message: String,
    /// Originating service
    pub service: String,
    /// Creation time
    pub timestamp: DateTime<Utc>,
    /// Alert metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AlertMetadata>,
    /// Whether the alert is resolved
    pub resolved: bool,
    /// Resolution time, set together with `resolved`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Alert {
    /// Create an unresolved alert stamped with a fresh id and the current time
    pub fn new(
        level: AlertLevel,
        title: impl Into<String>,
        message: impl Into<String>,
        service: impl Into<String>,
        metadata: Option<AlertMetadata>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            level,
            title: title.into(),
            message: message.into(),
            service: service.into(),
            timestamp: Utc::now(),
            metadata,
            resolved: false,
            resolved_at: None,
        }
    }

    /// Mark the alert resolved at `at`.
    ///
    /// Returns `false` and leaves the alert untouched if it was already
    /// resolved. `resolved_at` never precedes `timestamp`.
    pub fn resolve(&mut self, at: DateTime<Utc>) -> bool {
        if self.resolved {
            return false;
        }
        self.resolved = true;
        self.resolved_at = Some(at.max(self.timestamp));
        true
    }

    /// Whether the alert was resolved strictly before `cutoff`
    pub fn resolved_before(&self, cutoff: DateTime<Utc>) -> bool {
        self.resolved && self.resolved_at.is_some_and(|at| at < cutoff)
    }
}

/// Outcome of a single health check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Unhealthy => "unhealthy",
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Latest result of a named health check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthCheck {
    /// Check name (unique key)
    pub name: String,
    /// Healthy or unhealthy
    pub status: HealthStatus,
    /// Probe message, or the error text on failure
    pub message: String,
    /// When the probe returned
    pub timestamp: DateTime<Utc>,
    /// Wall-clock time spent in the probe
    #[serde(rename = "duration_ms", with = "duration_ms")]
    pub duration: Duration,
}

impl HealthCheck {
    pub fn new(
        name: impl Into<String>,
        status: HealthStatus,
        message: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            status,
            message: message.into(),
            timestamp: Utc::now(),
            duration,
        }
    }

    #[inline]
    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}

/// Error counts by category.
///
/// Supplied by an [`ErrorMetricsSource`](super::metrics::ErrorMetricsSource).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBreakdown {
    /// Total errors recorded
    pub total_errors: u64,
    /// Errors by category
    pub by_category: HashMap<String, u64>,
    /// Time of the most recent error
    pub last_error_at: Option<DateTime<Utc>>,
}

/// System metrics snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemMetrics {
    /// Time of the last counter update
    pub timestamp: DateTime<Utc>,
    /// Cumulative request count
    pub request_count: u64,
    /// Cumulative error count
    pub error_count: u64,
    /// Error rate (percentage)
    pub error_rate: f64,
    /// Average response time
    #[serde(rename = "avg_response_time_ms", with = "duration_ms")]
    pub avg_response_time: Duration,
    /// Active user gauge
    pub active_users: u64,
    /// Status of the latest "database" check
    pub database_health: String,
    /// Status of the latest "redis" check
    pub redis_health: String,
    /// Latest result per check name
    pub health_checks: HashMap<String, HealthCheck>,
    /// Error breakdown by category
    pub error_breakdown: Option<ErrorBreakdown>,
}

impl Default for SystemMetrics {
    fn default() -> Self {
        Self {
            timestamp: Utc::now(),
            request_count: 0,
            error_count: 0,
            error_rate: 0.0,
            avg_response_time: Duration::ZERO,
            active_users: 0,
            database_health: HEALTH_UNKNOWN.to_string(),
            redis_health: HEALTH_UNKNOWN.to_string(),
            health_checks: HashMap::new(),
            error_breakdown: None,
        }
    }
}

/// Serialize a `Duration` as fractional milliseconds
mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.as_secs_f64() * 1000.0)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let millis = f64::deserialize(deserializer)?;
        if !millis.is_finite() || millis < 0.0 {
            return Err(serde::de::Error::custom("duration must be a non-negative number"));
        }
        Ok(Duration::from_secs_f64(millis / 1000.0))
    }
}
