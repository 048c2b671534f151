//! HTTP response handling for errors

use super::types::MonitorError;
use crate::server::routes::ApiResponse;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl ResponseError for MonitorError {
    fn status_code(&self) -> StatusCode {
        match self {
            MonitorError::NotFound(_) => StatusCode::NOT_FOUND,
            MonitorError::Validation(_) => StatusCode::BAD_REQUEST,
            MonitorError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            MonitorError::Monitoring(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            MonitorError::Database(_) => "Database operation failed".to_string(),
            MonitorError::Redis(_) => "Cache operation failed".to_string(),
            MonitorError::Serialization(_) | MonitorError::Io(_) | MonitorError::Internal(_) => {
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        };

        HttpResponse::build(self.status_code()).json(ApiResponse::<()>::error(message))
    }
}
