//! Service wiring and the `run_server` entry point

use crate::config::Config;
use crate::monitoring::metrics::{ErrorTracker, RequestRecorder};
use crate::monitoring::{Monitor, global};
use crate::server::server::HttpServer;
use crate::server::state::AppState;
use crate::storage::StorageLayer;
use crate::utils::error::Result;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{info, warn};

/// Connect storage, install the monitor, and serve until `shutdown` fires.
///
/// The background loop, the metrics flush task, and the HTTP server all
/// stop on the same signal.
pub async fn run_server(config: Config, shutdown: broadcast::Sender<()>) -> Result<()> {
    info!("Starting storefront monitor");

    let storage = StorageLayer::new(&config.storage).await?;
    let errors = Arc::new(ErrorTracker::new());
    let recorder = Arc::new(RequestRecorder::new());

    let monitor = Monitor::builder(config.monitoring.clone())
        .with_storage(&storage)
        .with_error_source(errors.clone())
        .build();
    let monitor = global::initialize(monitor, shutdown.subscribe()).clone();

    let flush_task = recorder.start_flush_task(
        monitor.clone(),
        config.monitoring.metrics_flush_interval(),
        shutdown.subscribe(),
    );

    info!("Admin endpoints:");
    info!("   GET  /health");
    info!("   GET  /health/detailed");
    info!("   POST /admin/health/run");
    info!("   GET  /admin/alerts?all=true|false");
    info!("   POST /admin/alerts");
    info!("   POST /admin/alerts/{{id}}/resolve");
    info!("   GET  /admin/metrics");

    let state = AppState::new(config, monitor, recorder, errors);
    let result = HttpServer::new(state).start(shutdown.subscribe()).await;

    // The server also exits on bind errors
    let _ = shutdown.send(());
    if let Err(e) = flush_task.await {
        warn!("Metrics flush task ended abnormally: {}", e);
    }

    result
}
