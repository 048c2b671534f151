//! Background monitor loop

use super::health::{ConnectivityProbe, DATABASE_CHECK, REDIS_CHECK, check_with_deadline};
use super::system::Monitor;
use super::types::HEALTH_NOT_CONFIGURED;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

impl Monitor {
    /// Spawn the periodic health check loop.
    ///
    /// Only one loop runs across all clones of this monitor; calls made while
    /// it is running return `None`, and so do calls made outside a Tokio
    /// runtime. The loop runs until `shutdown_rx` fires.
    pub fn start_background_tasks(
        &self,
        mut shutdown_rx: broadcast::Receiver<()>,
    ) -> Option<JoinHandle<()>> {
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(_) => {
                warn!("No async runtime available, background monitor loop not started");
                return None;
            }
        };
        if self.background_started.swap(true, Ordering::AcqRel) {
            debug!("Background monitor loop already running");
            return None;
        }

        let monitor = self.clone();
        let period = self.config.check_interval();
        info!("Starting background monitor loop every {:?}", period);

        Some(runtime.spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = interval.tick() => monitor.run_scheduled_checks().await,
                    _ = shutdown_rx.recv() => {
                        info!("Background monitor loop shutting down");
                        break;
                    }
                }
            }
            monitor.background_started.store(false, Ordering::Release);
        }))
    }

    /// Whether the background loop is running for this monitor
    pub fn is_background_running(&self) -> bool {
        self.background_started.load(Ordering::Acquire)
    }

    /// One loop tick: database check, redis check, status mirror, cleanup
    pub async fn run_scheduled_checks(&self) {
        debug!("Running scheduled health checks");

        let database = self
            .check_dependency(
                DATABASE_CHECK,
                self.database_probe.as_ref(),
                self.config.database_timeout(),
            )
            .await;
        let redis = self
            .check_dependency(
                REDIS_CHECK,
                self.cache_probe.as_ref(),
                self.config.cache_timeout(),
            )
            .await;

        self.metrics.set_dependency_health(database, redis);
        self.cleanup_old_alerts();
    }

    async fn check_dependency(
        &self,
        name: &str,
        probe: Option<&Arc<dyn ConnectivityProbe>>,
        deadline: Duration,
    ) -> String {
        let Some(probe) = probe else {
            return HEALTH_NOT_CONFIGURED.to_string();
        };
        let probe = Arc::clone(probe);
        self.run_health_check(name, || async move {
            check_with_deadline(probe.as_ref(), name, deadline).await
        })
        .await
        .status
        .to_string()
    }
}
