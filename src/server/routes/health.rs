//! Health check endpoints

use crate::monitoring::health::{
    ConnectivityProbe, DATABASE_CHECK, REDIS_CHECK, check_with_deadline,
};
use crate::monitoring::{HealthCheck, HealthStatus};
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Configure public health routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/health")
            .route("", web::get().to(health_check))
            .route("/detailed", web::get().to(detailed_health_check)),
    );
}

/// Configure operator-triggered checks under `/admin`
pub fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health/run", web::post().to(run_health_checks));
}

/// Liveness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Liveness {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

/// Detailed health response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealth {
    /// "healthy" when no recorded check is failing, else "degraded"
    pub status: String,
    pub service: String,
    pub version: String,
    pub git_hash: String,
    pub build_time: String,
    pub database: String,
    pub redis: String,
    pub checks: HashMap<String, HealthCheck>,
    pub timestamp: DateTime<Utc>,
}

/// Basic health check endpoint
pub async fn health_check(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    Ok(HttpResponse::Ok().json(ApiResponse::success(Liveness {
        status: "healthy".to_string(),
        service: state.monitor.service_name().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })))
}

/// Latest recorded health checks and dependency statuses
async fn detailed_health_check(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    debug!("Detailed health check requested");

    let metrics = state.monitor.get_metrics();
    let degraded = metrics
        .health_checks
        .values()
        .any(|check| check.status == HealthStatus::Unhealthy);

    let detailed = DetailedHealth {
        status: if degraded { "degraded" } else { "healthy" }.to_string(),
        service: state.monitor.service_name().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        git_hash: env!("MONITOR_GIT_HASH").to_string(),
        build_time: env!("MONITOR_BUILD_TIME").to_string(),
        database: metrics.database_health,
        redis: metrics.redis_health,
        checks: metrics.health_checks,
        timestamp: Utc::now(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(detailed)))
}

/// Run the database and redis checks now and return their results
async fn run_health_checks(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    info!("Operator-triggered health checks");

    let monitor = &state.monitor;
    let config = monitor.config();
    let mut results = Vec::new();

    let probes = [
        (DATABASE_CHECK, monitor.database_probe(), config.database_timeout()),
        (REDIS_CHECK, monitor.cache_probe(), config.cache_timeout()),
    ];
    for (name, probe, deadline) in probes {
        let Some(probe) = probe else {
            continue;
        };
        let check = monitor
            .run_health_check(name, || run_probe(probe, name, deadline))
            .await;
        results.push(check);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(results)))
}

async fn run_probe(
    probe: Arc<dyn ConnectivityProbe>,
    name: &str,
    deadline: std::time::Duration,
) -> crate::utils::error::Result<String> {
    check_with_deadline(probe.as_ref(), name, deadline).await
}
