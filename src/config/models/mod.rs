//! Configuration data models
//!
//! This module defines all configuration structures used by the monitor.

#![allow(missing_docs)]

pub mod logging;
pub mod monitoring;
pub mod server;
pub mod storage;

pub use logging::*;
pub use monitoring::*;
pub use server::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8081
}

pub fn default_service_name() -> String {
    "storefront-api".to_string()
}

pub fn default_check_interval() -> u64 {
    60
}

pub fn default_alert_retention() -> u64 {
    24 * 60 * 60
}

pub fn default_cache_timeout() -> u64 {
    5
}

pub fn default_database_timeout() -> u64 {
    5
}

pub fn default_error_rate_threshold() -> f64 {
    10.0
}

pub fn default_response_time_threshold() -> u64 {
    5000
}

pub fn default_alert_key_prefix() -> String {
    "alert:".to_string()
}

pub fn default_metrics_flush_interval() -> u64 {
    10
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}
