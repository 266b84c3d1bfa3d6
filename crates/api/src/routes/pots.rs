//! Pots of the authenticated owner and registration of a plant with its photo.

use axum::{
    extract::{multipart::Field, Multipart, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use domain::models::plant::{
    CreatePotPlantData, CreatePotPlantForm, CreatePotPlantResponse, NewPlant,
};
use domain::models::Pot;
use persistence::entities::{PlantEntity, PotEntity};
use persistence::repositories::{PlantRepository, PotRepository, SpeciesRepository};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::PathParam;
use crate::middleware::CurrentUser;
use crate::services::media;

/// An uploaded file part.
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

fn multipart_error(e: impl std::fmt::Display) -> ApiError {
    ApiError::Validation(format!("Invalid multipart body: {}", e))
}

/// Reads a file part, rejecting parts without a file name.
pub async fn read_upload(field: Field<'_>) -> Result<Upload, ApiError> {
    let file_name = field.file_name().unwrap_or_default().to_string();
    if file_name.trim().is_empty() {
        return Err(ApiError::Validation("No selected file".to_string()));
    }
    let bytes = field.bytes().await.map_err(multipart_error)?;
    Ok(Upload {
        file_name,
        bytes: bytes.to_vec(),
    })
}

async fn insert_pot_plant(
    state: &AppState,
    user_id: i64,
    pot_label: &str,
    species_id: i64,
    name: &str,
    image_url: &str,
) -> Result<(PotEntity, bool, PlantEntity), ApiError> {
    let (pot, pot_created) = PotRepository::new(state.pool.clone())
        .get_or_create(user_id, pot_label)
        .await?;

    let plant = PlantRepository::new(state.pool.clone())
        .create(&NewPlant {
            user_id,
            pot_id: pot.id,
            species_id: Some(species_id),
            name: name.to_string(),
            image_url: Some(image_url.to_string()),
        })
        .await?;

    Ok((pot, pot_created, plant))
}

/// List the caller's pots, newest first.
///
/// GET /pots
pub async fn list_pots(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<Pot>>, ApiError> {
    let pots = PotRepository::new(state.pool.clone())
        .list_for_user(user.user_id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(pots))
}

/// GET /pots/:pot_id
pub async fn get_pot(
    State(state): State<AppState>,
    user: CurrentUser,
    PathParam(pot_id): PathParam<i64>,
) -> Result<Json<Pot>, ApiError> {
    PotRepository::new(state.pool.clone())
        .find_owned(pot_id, user.user_id)
        .await?
        .map(|pot| Json(pot.into()))
        .ok_or_else(|| ApiError::NotFound("Pot not found".to_string()))
}

/// Register a plant in a pot, creating the pot on first use.
///
/// POST /pots/create (multipart)
///
/// The species must already be known. The image is only written once the
/// species has been resolved and is removed again if the inserts fail, so
/// rejected requests leave no files behind.
pub async fn create_pot(
    State(state): State<AppState>,
    user: CurrentUser,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<CreatePotPlantResponse>), ApiError> {
    let mut form = CreatePotPlantForm::default();
    let mut image = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let part = field.name().unwrap_or_default().to_string();
        match part.as_str() {
            "image" => image = Some(read_upload(field).await?),
            "name" => form.name = Some(field.text().await.map_err(multipart_error)?),
            "species_name" => {
                form.species_name = Some(field.text().await.map_err(multipart_error)?)
            }
            "pot_label" => form.pot_label = Some(field.text().await.map_err(multipart_error)?),
            _ => {}
        }
    }

    let image = image.ok_or_else(|| ApiError::Validation("No image file provided".to_string()))?;
    let (name, species_name, pot_label) = form.required().ok_or_else(|| {
        ApiError::Validation("Missing required fields: name, species_name, pot_label".to_string())
    })?;

    let species = SpeciesRepository::new(state.pool.clone())
        .find_by_name(species_name)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "Species \"{}\" not found in database. Please check the species name",
                species_name
            ))
        })?;

    let image_dir = &state.config.media.image_dir;
    let stored = media::save_image(
        image_dir,
        Utc::now().timestamp(),
        &image.file_name,
        &image.bytes,
    )
    .await
    .map_err(|e| ApiError::Internal(format!("Failed to store image: {}", e)))?;
    let image_url = media::image_url(&stored);

    let created =
        insert_pot_plant(&state, user.user_id, pot_label, species.id, name, &image_url).await;
    let (pot, pot_created, plant) = match created {
        Ok(rows) => rows,
        Err(e) => {
            if let Err(io) = media::remove_image(image_dir, &stored).await {
                tracing::warn!(image = %stored, "Failed to remove orphaned image: {}", io);
            }
            return Err(e);
        }
    };

    tracing::info!(
        user_id = user.user_id,
        pot_id = pot.id,
        pot_created,
        plant_id = plant.id,
        "Plant registered"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatePotPlantResponse {
            success: true,
            message: "Plant created successfully".to_string(),
            data: CreatePotPlantData {
                pot_id: pot.id,
                pot_created,
                pot_label: pot_label.to_string(),
                plant_id: plant.id,
                plant_name: name.to_string(),
                species_name: species_name.to_string(),
                image_url,
            },
        }),
    ))
}
