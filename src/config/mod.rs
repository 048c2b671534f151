//! Configuration management for the monitor
//!
//! This module handles loading, validation, and environment overrides of the
//! service configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{MonitorError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the monitor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Database and Redis configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Alerting, threshold, and health check configuration
    #[serde(default)]
    pub monitoring: MonitoringConfig,
    /// Log output configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| MonitorError::Config(format!("Failed to read config file: {}", e)))?;

        let mut config = Self::from_yaml(&content)?;
        config.apply_env_overrides();
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse configuration from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Override selected fields from the process environment
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL") {
            self.storage.database.url = url;
        }
        if let Some(url) = lookup("REDIS_URL") {
            self.storage.redis.url = url;
        }
        if let Some(host) = lookup("MONITOR_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("MONITOR_PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
        if let Some(name) = lookup("MONITOR_SERVICE_NAME") {
            self.monitoring.service_name = name;
        }
        if let Some(level) = lookup("MONITOR_LOG_LEVEL") {
            self.logging.level = level;
        }
    }

    /// Validate every configuration section
    pub fn validate(&self) -> Result<()> {
        self.server
            .validate()
            .and_then(|_| self.storage.validate())
            .and_then(|_| self.monitoring.validate())
            .and_then(|_| self.logging.validate())
            .map_err(MonitorError::Config)
    }
}
