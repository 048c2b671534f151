//! HTTP server core implementation

use crate::config::ServerConfig;
use crate::server::middleware::MetricsMiddleware;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{MonitorError, Result};
use actix_web::{App, HttpServer as ActixHttpServer, middleware::DefaultHeaders, web};
use tokio::sync::broadcast;
use tracing::info;
use tracing_actix_web::TracingLogger;

/// Admin HTTP server over the monitor
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    pub fn new(state: AppState) -> Self {
        Self {
            config: state.config.server.clone(),
            state,
        }
    }

    /// Build the application with every route and middleware installed
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(state)
            .wrap(MetricsMiddleware)
            .wrap(TracingLogger::default())
            .wrap(DefaultHeaders::new().add(("Server", "storefront-monitor")))
            .configure(routes::configure_routes)
    }

    /// Serve until a shutdown signal arrives
    pub async fn start(self, mut shutdown_rx: broadcast::Receiver<()>) -> Result<()> {
        let bind_addr = self.config.bind_address();
        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);
        let mut server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .disable_signals();
        if let Some(workers) = self.config.workers {
            server = server.workers(workers);
        }

        let server = server
            .bind(&bind_addr)
            .map_err(|e| MonitorError::config(format!("Failed to bind {}: {}", bind_addr, e)))?
            .run();
        let handle = server.handle();

        tokio::spawn(async move {
            let _ = shutdown_rx.recv().await;
            info!("Stopping HTTP server");
            handle.stop(true).await;
        });

        info!("HTTP server listening on {}", bind_addr);
        server.await?;

        info!("HTTP server stopped");
        Ok(())
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}
