//! Application startup and lifecycle management.

use crate::config::DelayConfig;
use crate::handlers;
use crate::models::CarrierRegistry;
use crate::services::{DelayModel, DelayPredictor};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics_middleware, request_id_middleware, security_headers_middleware,
};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state. Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn DelayPredictor>,
    pub carriers: Arc<CarrierRegistry>,
}

impl AppState {
    pub fn new(model: Arc<dyn DelayPredictor>) -> Self {
        Self {
            model,
            carriers: Arc::new(CarrierRegistry::default()),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route("/predict", post(handlers::predict))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the model described by `config`.
    pub async fn build(config: DelayConfig) -> Result<Self, AppError> {
        let model = DelayModel::from_config(&config.model).map_err(|e| {
            tracing::error!("Failed to load delay model: {}", e);
            AppError::ConfigError(anyhow::Error::new(e))
        })?;

        Self::build_with_model(config, Arc::new(model)).await
    }

    /// Build the application around an already constructed model.
    pub async fn build_with_model(
        config: DelayConfig,
        model: Arc<dyn DelayPredictor>,
    ) -> Result<Self, AppError> {
        // Port 0 binds a random port (used by tests)
        let addr = config.bind_address();
        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Delay service listening on {}:{}", config.host, port);

        let router = build_router(AppState::new(model));

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router).await
    }

    /// Run until `shutdown` resolves, then drain in-flight requests.
    pub async fn run_with_shutdown<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
    }
}
