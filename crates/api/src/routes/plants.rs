//! Plant routes for the authenticated owner.

use axum::{extract::State, http::StatusCode, Json};
use domain::models::plant::{
    PlantDetailQuery, PlantDetailResponse, PlantSummary, UpdatePlantRequest,
};
use domain::models::reading::{LastConditions, ReadingsQuery};
use domain::models::watering::{ManualWateringRequest, WateringHistoryEntry};
use domain::models::{EnvironmentalReading, Plant, WateringEvent};
use persistence::repositories::{PlantRepository, ReadingRepository, WateringRepository};
use shared::pagination::{PageInfo, PageRequest};
use sqlx::PgPool;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{JsonBody, PathParam, QueryParams};
use crate::middleware::CurrentUser;

const PLANT_NOT_FOUND: &str = "Plant not found or not owned by user";

async fn owned_plant(pool: &PgPool, plant_id: i64, user_id: i64) -> Result<Plant, ApiError> {
    PlantRepository::new(pool.clone())
        .find_owned(plant_id, user_id)
        .await?
        .map(Into::into)
        .ok_or_else(|| ApiError::NotFound(PLANT_NOT_FOUND.to_string()))
}

/// List the caller's plants with their latest conditions.
///
/// GET /plants
pub async fn list_plants(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<PlantSummary>>, ApiError> {
    let plants = PlantRepository::new(state.pool.clone())
        .list_with_last_reading(user.user_id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(plants))
}

/// Plant detail with one page of watering history.
///
/// GET /plants/:plant_id?page&per_page
pub async fn get_plant(
    State(state): State<AppState>,
    user: CurrentUser,
    PathParam(plant_id): PathParam<i64>,
    QueryParams(query): QueryParams<PlantDetailQuery>,
) -> Result<Json<PlantDetailResponse>, ApiError> {
    let page = PageRequest::new(query.page, query.per_page)?;
    let plant = owned_plant(&state.pool, plant_id, user.user_id).await?;

    let latest: Option<EnvironmentalReading> = ReadingRepository::new(state.pool.clone())
        .latest(plant.id)
        .await?
        .map(Into::into);

    let waterings = WateringRepository::new(state.pool.clone());
    let total = waterings.count_for_plant(plant.id).await?;
    let watering_history: Vec<WateringHistoryEntry> = waterings
        .history(plant.id, page)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(PlantDetailResponse {
        plant: PlantSummary::new(plant, LastConditions::from(latest)),
        watering_history,
        pagination: PageInfo::new(page, total),
    }))
}

/// Rename a plant or edit its notes and planting date.
///
/// PUT /plants/:plant_id
pub async fn update_plant(
    State(state): State<AppState>,
    user: CurrentUser,
    PathParam(plant_id): PathParam<i64>,
    JsonBody(request): JsonBody<UpdatePlantRequest>,
) -> Result<Json<Plant>, ApiError> {
    let changes = request
        .changes()
        .map_err(|msg| ApiError::Validation(msg.to_string()))?;

    let plant: Plant = PlantRepository::new(state.pool.clone())
        .update(plant_id, user.user_id, &changes)
        .await?
        .map(Into::into)
        .ok_or_else(|| ApiError::NotFound(PLANT_NOT_FOUND.to_string()))?;

    tracing::info!(user_id = user.user_id, plant_id = plant.id, "Plant updated");
    Ok(Json(plant))
}

/// Recent readings of an owned plant, newest first.
///
/// GET /plants/:plant_id/conditions?limit
pub async fn list_conditions(
    State(state): State<AppState>,
    user: CurrentUser,
    PathParam(plant_id): PathParam<i64>,
    QueryParams(query): QueryParams<ReadingsQuery>,
) -> Result<Json<Vec<EnvironmentalReading>>, ApiError> {
    let plant = owned_plant(&state.pool, plant_id, user.user_id).await?;

    let readings = ReadingRepository::new(state.pool.clone())
        .list(plant.id, query.effective_limit())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(readings))
}

/// Record a manual watering against one of the plant's readings.
///
/// POST /plants/:plant_id/waterings
pub async fn record_watering(
    State(state): State<AppState>,
    user: CurrentUser,
    PathParam(plant_id): PathParam<i64>,
    JsonBody(request): JsonBody<ManualWateringRequest>,
) -> Result<(StatusCode, Json<WateringEvent>), ApiError> {
    request
        .validate_amount()
        .map_err(|msg| ApiError::Validation(msg.to_string()))?;

    let plant = owned_plant(&state.pool, plant_id, user.user_id).await?;

    ReadingRepository::new(state.pool.clone())
        .find_for_plant(request.condition_id, plant.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Condition not found for this plant".to_string()))?;

    let event: WateringEvent = WateringRepository::new(state.pool.clone())
        .create(request.condition_id, request.amount_ml)
        .await?
        .into();

    tracing::info!(
        plant_id = plant.id,
        condition_id = request.condition_id,
        amount_ml = request.amount_ml,
        "Manual watering recorded"
    );

    Ok((StatusCode::CREATED, Json(event)))
}
