//! Species reference data.

use axum::{extract::State, Json};
use domain::models::species::{normalize_name, SpeciesSearchQuery};
use domain::models::Species;
use persistence::repositories::SpeciesRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{PathParam, QueryParams};

/// GET /species
pub async fn list_species(State(state): State<AppState>) -> Result<Json<Vec<Species>>, ApiError> {
    let species = SpeciesRepository::new(state.pool.clone())
        .list()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(species))
}

/// Species whose common or scientific name contains `q`, ignoring case,
/// accents and spaces. An empty `q` lists everything.
///
/// GET /species/search?q
pub async fn search_species(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<SpeciesSearchQuery>,
) -> Result<Json<Vec<Species>>, ApiError> {
    let needle = normalize_name(&query.q);

    let species = SpeciesRepository::new(state.pool.clone())
        .list()
        .await?
        .into_iter()
        .map(Species::from)
        .filter(|s| s.matches(&needle))
        .collect();

    Ok(Json(species))
}

/// GET /species/:species_id
pub async fn get_species(
    State(state): State<AppState>,
    PathParam(species_id): PathParam<i64>,
) -> Result<Json<Species>, ApiError> {
    SpeciesRepository::new(state.pool.clone())
        .find_by_id(species_id)
        .await?
        .map(|s| Json(s.into()))
        .ok_or_else(|| ApiError::NotFound("Species not found".to_string()))
}
