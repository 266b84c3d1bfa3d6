//! Sensor ingest endpoint.
//!
//! POST /iot/sensor-data (alias POST /sensor-data)

use axum::{extract::State, http::StatusCode, Json};
use domain::models::reading::{SensorDataRequest, SensorDataResponse};
use domain::services::IngestService;
use persistence::repositories::{PotRepository, ReadingRepository};

use crate::app::AppState;
use crate::error::{missing_fields, ApiError};
use crate::extractors::{IotApiKey, JsonBody};
use crate::middleware::metrics::record_sensor_reading;

/// Record a reading reported by a sensor board and decide on watering.
///
/// The device key is checked before the body is read. An unknown device
/// label is rejected without writing anything; a missing or failing model
/// only degrades the irrigation block of the response.
pub async fn ingest_sensor_data(
    State(state): State<AppState>,
    _device: IotApiKey,
    JsonBody(request): JsonBody<SensorDataRequest>,
) -> Result<(StatusCode, Json<SensorDataResponse>), ApiError> {
    let (label, reading) = request
        .into_parts()
        .map_err(|missing| missing_fields(&missing))?;

    let registry = PotRepository::new(state.pool.clone());
    let store = ReadingRepository::new(state.pool.clone());
    let service = IngestService::new(&registry, &store, state.predictor.as_ref(), state.policy);

    let outcome = service.ingest(&label, reading).await.map_err(|e| {
        tracing::info!(device_label = %label, error = %e, "Sensor data rejected");
        ApiError::from(e)
    })?;

    record_sensor_reading(&outcome.decision);
    tracing::info!(
        device_label = %label,
        plant_id = outcome.plant_id,
        condition_id = outcome.condition_id,
        needs_watering = outcome.decision.needs_watering,
        "Sensor data recorded"
    );

    Ok((StatusCode::CREATED, Json(outcome.into())))
}
