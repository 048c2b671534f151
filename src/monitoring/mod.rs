//! Monitoring and alerting
//!
//! A [`Monitor`] owns the alert store and the metrics snapshot, runs health
//! checks against the database and cache, and raises alerts on failures and
//! breached thresholds.

pub mod alerts;
pub mod global;
pub mod health;
pub mod metrics;

mod background;
mod system;
mod types;


pub use system::{Monitor, MonitorBuilder};
pub use types::{
    Alert, AlertLevel, AlertMetadata, ErrorBreakdown, HEALTH_NOT_CONFIGURED, HEALTH_UNKNOWN,
    HealthCheck, HealthStatus, SystemMetrics,
};
