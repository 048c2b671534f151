//! Health check execution

use crate::monitoring::system::Monitor;
use crate::monitoring::types::{AlertLevel, AlertMetadata, HealthCheck, HealthStatus};
use serde_json::json;
use std::fmt::Display;
use std::future::Future;
use std::time::Instant;
use tracing::debug;

/// Invoke `probe` and classify its outcome.
///
/// The duration covers the probe call only. No timeout is applied here.
pub async fn execute_probe<F, Fut, E>(name: &str, probe: F) -> HealthCheck
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = std::result::Result<String, E>>,
    E: Display,
{
    let start = Instant::now();
    let outcome = probe().await;
    let duration = start.elapsed();

    match outcome {
        Ok(message) => HealthCheck::new(name, HealthStatus::Healthy, message, duration),
        Err(e) => HealthCheck::new(name, HealthStatus::Unhealthy, e.to_string(), duration),
    }
}

impl Monitor {
    /// Run a named health check and record the result.
    ///
    /// A failing probe raises a critical alert. The returned check is
    /// always populated; probe errors never propagate.
    pub async fn run_health_check<F, Fut, E>(&self, name: &str, probe: F) -> HealthCheck
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<String, E>>,
        E: Display,
    {
        let check = execute_probe(name, probe).await;

        if check.is_healthy() {
            debug!(check = name, duration = ?check.duration, "Health check passed");
        } else {
            let mut metadata = AlertMetadata::new();
            metadata.insert("check".into(), json!(name));
            metadata.insert(
                "duration_ms".into(),
                json!(check.duration.as_secs_f64() * 1000.0),
            );
            self.create_alert(
                AlertLevel::Critical,
                format!("{} Health Check Failed", name),
                check.message.clone(),
                Some(metadata),
            );
        }

        self.metrics.record_health_check(check.clone());
        check
    }
}
