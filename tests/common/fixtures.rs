//! Test fixtures and factories

use async_trait::async_trait;
use storefront_monitor::MonitoringConfig;
use storefront_monitor::monitoring::health::ConnectivityProbe;
use storefront_monitor::utils::error::{MonitorError, Result};

/// Factory for monitoring configurations
pub struct ConfigFactory;

impl ConfigFactory {
    /// Defaults with a long check interval so only the first tick runs
    pub fn quiet() -> MonitoringConfig {
        MonitoringConfig {
            service_name: "storefront-test".to_string(),
            check_interval_secs: 3600,
            ..MonitoringConfig::default()
        }
    }
}

/// Probe that always succeeds with a fixed message
pub struct StaticProbe(pub &'static str);

#[async_trait]
impl ConnectivityProbe for StaticProbe {
    async fn check(&self) -> Result<String> {
        Ok(self.0.to_string())
    }
}

/// Probe that always fails with a fixed message
pub struct FailingProbe(pub &'static str);

#[async_trait]
impl ConnectivityProbe for FailingProbe {
    async fn check(&self) -> Result<String> {
        Err(MonitorError::monitoring(self.0))
    }
}
