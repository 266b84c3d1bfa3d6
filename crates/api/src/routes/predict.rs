//! Standalone irrigation prediction.
//!
//! POST /predict/irrigation

use axum::{extract::State, Json};
use domain::models::irrigation::{IrrigationDecision, PredictIrrigationRequest};
use domain::services::PredictionError;

use crate::app::AppState;
use crate::error::{missing_fields, ApiError};
use crate::extractors::JsonBody;

/// Run the irrigation model on explicit inputs.
///
/// Unlike the ingest path, an unavailable model is an error here.
pub async fn predict_irrigation(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<PredictIrrigationRequest>,
) -> Result<Json<IrrigationDecision>, ApiError> {
    let input = request
        .into_input()
        .map_err(|missing| missing_fields(&missing))?;

    let decision = state
        .policy
        .decide(state.predictor.as_ref(), &input)
        .map_err(|e| match e {
            PredictionError::ModelUnavailable => ApiError::ModelUnavailable(e.to_string()),
            PredictionError::Inference(_) => ApiError::Internal(e.to_string()),
        })?;

    Ok(Json(decision))
}
