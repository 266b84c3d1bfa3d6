//! Plant image recognition.
//!
//! POST /recognition (multipart `image`)

use axum::{
    extract::{Multipart, State},
    Json,
};
use domain::models::recognition::RecognitionResponse;
use domain::services::recognition::summarize;
use domain::services::ClassifierError;

use crate::app::AppState;
use crate::error::ApiError;
use crate::routes::pots::read_upload;

fn processing_error(e: ClassifierError) -> ApiError {
    match e {
        ClassifierError::Unavailable(msg) => ApiError::ModelUnavailable(msg),
        ClassifierError::Inference(msg) => {
            ApiError::Upstream(format!("Error processing image: {}", msg))
        }
    }
}

/// Classify an uploaded plant photo.
pub async fn recognize(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<RecognitionResponse>, ApiError> {
    let classifier = state
        .classifier
        .clone()
        .ok_or_else(|| ApiError::ModelUnavailable("Recognition model not loaded".to_string()))?;

    let mut image = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() == Some("image") {
            image = Some(read_upload(field).await?);
            break;
        }
    }
    let image = image.ok_or_else(|| ApiError::Validation("No image file provided".to_string()))?;

    let probabilities = classifier
        .classify(image.bytes)
        .await
        .map_err(processing_error)?;
    let response = summarize(&probabilities).map_err(processing_error)?;

    tracing::info!(
        plant_type = %response.plant_type,
        confidence = response.confidence,
        "Image classified"
    );

    Ok(Json(response))
}
