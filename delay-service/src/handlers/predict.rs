use crate::dtos::{PredictRequest, PredictResponse};
use crate::models::FlightFrame;
use crate::services::{record_prediction, ModelError};
use crate::startup::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use service_core::error::AppError;

/// Score a flight for delay.
///
/// Only the first entry of `flights` is validated and scored; any further
/// entries are accepted but ignored.
#[tracing::instrument(skip(state, payload))]
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected prediction body");
        AppError::bad_request(rejection.body_text())
    })?;

    let (first, ignored) = request.into_first()?;
    if ignored > 0 {
        tracing::debug!(ignored, "Scoring first flight only");
    }

    let record = first.into_record(&state.carriers)?;
    tracing::debug!(
        carrier = %record.carrier,
        flight_type = record.flight_type.code(),
        month = record.month.get(),
        "Flight validated"
    );
    let frame = FlightFrame::single(record);

    let features = state.model.preprocess(&frame).map_err(model_failure)?;
    let labels = state.model.predict(&features).map_err(model_failure)?;

    for label in &labels {
        record_prediction(*label);
    }
    tracing::info!(?labels, "Prediction served");

    Ok(Json(PredictResponse { predict: labels }))
}

fn model_failure(err: ModelError) -> AppError {
    AppError::InternalError(anyhow::Error::new(err).context("delay model failed"))
}
