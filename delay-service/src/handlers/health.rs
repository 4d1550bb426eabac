use crate::dtos::HealthResponse;
use crate::services::get_metrics;
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use service_core::error::AppError;

/// Liveness check. Always `{"status": "OK"}`.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Readiness check: the model must be able to serve.
pub async fn readiness_check(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.model.health_check().map_err(|e| {
        tracing::warn!(error = %e, "Delay model not ready");
        AppError::ServiceUnavailable
    })?;
    Ok(StatusCode::OK)
}

pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
