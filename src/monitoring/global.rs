//! Process-wide monitor instance
//!
//! The binary installs one [`Monitor`] at startup. Library code that cannot
//! be handed a monitor explicitly reaches it through [`monitor`].

use super::system::Monitor;
use super::types::{Alert, AlertLevel, AlertMetadata, HealthCheck, SystemMetrics};
use crate::utils::error::{MonitorError, Result};
use once_cell::sync::OnceCell;
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::{debug, info};

static MONITOR: OnceCell<Monitor> = OnceCell::new();

/// Install `monitor` as the process-wide instance.
///
/// The first call wins. Later calls drop their argument and return the
/// instance already installed.
pub fn install(monitor: Monitor) -> &'static Monitor {
    let mut installed = false;
    let global = MONITOR.get_or_init(|| {
        installed = true;
        monitor
    });
    if installed {
        info!(service = %global.service_name(), "Monitor installed");
    } else {
        debug!("Monitor already installed, keeping existing instance");
    }
    global
}

/// Install `monitor` and start its background loop.
///
/// Repeated calls return the same instance and never start a second loop.
pub fn initialize(monitor: Monitor, shutdown_rx: broadcast::Receiver<()>) -> &'static Monitor {
    let global = install(monitor);
    global.start_background_tasks(shutdown_rx);
    global
}

/// The installed monitor, if any
pub fn try_monitor() -> Option<&'static Monitor> {
    MONITOR.get()
}

/// The installed monitor
pub fn monitor() -> Result<&'static Monitor> {
    MONITOR
        .get()
        .ok_or_else(|| MonitorError::monitoring("monitor has not been installed"))
}

pub fn create_alert(
    level: AlertLevel,
    title: impl Into<String>,
    message: impl Into<String>,
    metadata: Option<AlertMetadata>,
) -> Result<Alert> {
    Ok(monitor()?.create_alert(level, title, message, metadata))
}

pub fn resolve_alert(id: &str) -> Result<Alert> {
    monitor()?.resolve_alert(id)
}

pub fn get_alerts() -> Result<Vec<Alert>> {
    Ok(monitor()?.get_alerts())
}

pub fn get_all_alerts() -> Result<Vec<Alert>> {
    Ok(monitor()?.get_all_alerts())
}

pub fn update_metrics(
    request_count: u64,
    error_count: u64,
    avg_response_time: Duration,
    active_users: u64,
) -> Result<SystemMetrics> {
    Ok(monitor()?.update_metrics(request_count, error_count, avg_response_time, active_users))
}

pub fn get_metrics() -> Result<SystemMetrics> {
    Ok(monitor()?.get_metrics())
}

pub async fn run_health_check<F, Fut, E>(name: &str, probe: F) -> Result<HealthCheck>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = std::result::Result<String, E>>,
    E: Display,
{
    Ok(monitor()?.run_health_check(name, probe).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MonitoringConfig;

    // Single test: the instance is shared by the whole test binary
    #[tokio::test]
    async fn test_global_monitor_lifecycle() {
        let config = MonitoringConfig {
            check_interval_secs: 3600,
            ..MonitoringConfig::default()
        };
        let (shutdown_tx, _) = broadcast::channel(1);

        let first = initialize(Monitor::new(config.clone()), shutdown_tx.subscribe());
        let second = initialize(Monitor::new(config.clone()), shutdown_tx.subscribe());
        let third = install(Monitor::new(config));

        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(first, third));
        assert!(std::ptr::eq(first, monitor().unwrap()));
        assert!(first.is_background_running());
        assert!(first.start_background_tasks(shutdown_tx.subscribe()).is_none());

        let alert = create_alert(AlertLevel::Info, "Deploy", "v2 rolled out", None).unwrap();
        assert!(get_alerts().unwrap().iter().any(|a| a.id == alert.id));

        let resolved = resolve_alert(&alert.id).unwrap();
        assert!(resolved.resolved);
        assert!(get_all_alerts().unwrap().iter().any(|a| a.id == alert.id));
        assert!(resolve_alert("missing").unwrap_err().is_not_found());

        update_metrics(10, 0, Duration::from_millis(5), 1).unwrap();
        assert_eq!(get_metrics().unwrap().request_count, 10);

        let check = run_health_check("svc", || async { Ok::<_, MonitorError>("ok".to_string()) })
            .await
            .unwrap();
        assert!(check.is_healthy());

        let _ = shutdown_tx.send(());
    }
}
