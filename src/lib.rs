//! # Storefront Monitor
//!
//! Monitoring and alerting for the storefront backend.
//!
//! ## Features
//!
//! - **Alert lifecycle**: create, resolve, and expire alerts, mirrored to Redis
//! - **Metrics snapshot**: request counters, error rate, and threshold alerts
//! - **Health checks**: timed probes against PostgreSQL and Redis
//! - **Background loop**: periodic checks and alert cleanup with graceful shutdown
//!
//! ## Usage
//!
//! ```rust,no_run
//! use storefront_monitor::{AlertLevel, Monitor, MonitoringConfig};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let monitor = Monitor::new(MonitoringConfig::default());
//!     let (shutdown_tx, shutdown_rx) = tokio::sync::broadcast::channel(1);
//!     monitor.start_background_tasks(shutdown_rx);
//!
//!     monitor.create_alert(AlertLevel::Info, "Deploy", "v2 is live", None);
//!     monitor.update_metrics(1000, 50, Duration::from_millis(120), 42);
//!     println!("error rate: {}", monitor.get_metrics().error_rate);
//!
//!     let _ = shutdown_tx.send(());
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod monitoring;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::{Config, MonitoringConfig};
pub use monitoring::{
    Alert, AlertLevel, HealthCheck, HealthStatus, Monitor, MonitorBuilder, SystemMetrics,
};
pub use utils::error::{MonitorError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
