//! Connectivity probes for the database and cache

use crate::storage::database::Database;
use crate::storage::redis::RedisPool;
use crate::utils::error::{MonitorError, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Liveness check against an external dependency
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectivityProbe: Send + Sync {
    /// Returns a short status message on success
    async fn check(&self) -> Result<String>;
}

#[async_trait]
impl ConnectivityProbe for Database {
    async fn check(&self) -> Result<String> {
        self.ping().await?;
        Ok(format!("{:?} connection healthy", self.backend_type()))
    }
}

#[async_trait]
impl ConnectivityProbe for RedisPool {
    async fn check(&self) -> Result<String> {
        self.health_check().await?;
        Ok("Redis connection healthy".to_string())
    }
}

/// Run `probe` with an upper bound of `deadline`
pub async fn check_with_deadline(
    probe: &dyn ConnectivityProbe,
    name: &str,
    deadline: Duration,
) -> Result<String> {
    tokio::time::timeout(deadline, probe.check())
        .await
        .map_err(|_| {
            MonitorError::timeout(format!("{} ping timed out after {:?}", name, deadline))
        })?
}
