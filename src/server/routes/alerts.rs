//! Alert endpoints

use crate::monitoring::{Alert, AlertLevel, AlertMetadata};
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::MonitorError;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Deserialize;
use tracing::{debug, info};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/alerts")
            .route("", web::get().to(list_alerts))
            .route("", web::post().to(create_alert))
            .route("/{id}/resolve", web::post().to(resolve_alert)),
    );
}

#[derive(Debug, Default, Deserialize)]
pub struct ListAlertsQuery {
    /// Include resolved alerts
    #[serde(default)]
    pub all: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreateAlertRequest {
    pub level: AlertLevel,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub metadata: Option<AlertMetadata>,
}

async fn list_alerts(
    state: web::Data<AppState>,
    query: web::Query<ListAlertsQuery>,
) -> ActixResult<HttpResponse> {
    let mut alerts: Vec<Alert> = if query.all {
        state.monitor.get_all_alerts()
    } else {
        state.monitor.get_alerts()
    };
    alerts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    debug!("Listing {} alerts (all: {})", alerts.len(), query.all);

    Ok(HttpResponse::Ok().json(ApiResponse::success(alerts)))
}

async fn create_alert(
    state: web::Data<AppState>,
    body: web::Json<CreateAlertRequest>,
) -> Result<HttpResponse, MonitorError> {
    let request = body.into_inner();
    if request.title.trim().is_empty() {
        return Err(MonitorError::validation("alert title must not be empty"));
    }

    let alert = state.monitor.create_alert(
        request.level,
        request.title,
        request.message,
        request.metadata,
    );
    info!(alert_id = %alert.id, "Manual alert created");

    Ok(HttpResponse::Created().json(ApiResponse::success(alert)))
}

async fn resolve_alert(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, MonitorError> {
    let alert = state.monitor.resolve_alert(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(alert)))
}
