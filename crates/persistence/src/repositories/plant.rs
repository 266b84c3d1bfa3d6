//! Plant repository for database operations.

use domain::models::plant::{NewPlant, PlantChanges};
use sqlx::PgPool;

use crate::entities::{PlantEntity, PlantWithLastReadingEntity};

/// Repository for plants. Every read is scoped to the owning user.
#[derive(Clone)]
pub struct PlantRepository {
    pool: PgPool,
}

impl PlantRepository {
    /// Creates a new PlantRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a plant.
    pub async fn create(&self, plant: &NewPlant) -> Result<PlantEntity, sqlx::Error> {
        sqlx::query_as::<_, PlantEntity>(
            r#"
            INSERT INTO plants (user_id, pot_id, species_id, name, image_url, planted_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING id, user_id, pot_id, species_id, name, image_url, notes, planted_at, created_at
            "#,
        )
        .bind(plant.user_id)
        .bind(plant.pot_id)
        .bind(plant.species_id)
        .bind(&plant.name)
        .bind(&plant.image_url)
        .fetch_one(&self.pool)
        .await
    }

    /// List a user's plants with their most recent reading.
    pub async fn list_with_last_reading(
        &self,
        user_id: i64,
    ) -> Result<Vec<PlantWithLastReadingEntity>, sqlx::Error> {
        sqlx::query_as::<_, PlantWithLastReadingEntity>(
            r#"
            SELECT p.id, p.user_id, p.pot_id, p.species_id, p.name, p.image_url,
                   p.notes, p.planted_at, p.created_at,
                   ac.temperature_celsius, ac.humidity_percent, ac.moisture_percent,
                   ac.light_lux, ac.recorded_at
            FROM plants p
            LEFT JOIN LATERAL (
                SELECT temperature_celsius, humidity_percent, moisture_percent,
                       light_lux, recorded_at
                FROM ambiental_conditions
                WHERE plant_id = p.id
                ORDER BY recorded_at DESC, id DESC
                LIMIT 1
            ) ac ON TRUE
            WHERE p.user_id = $1
            ORDER BY p.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Find a plant by id, only if it belongs to `user_id`.
    pub async fn find_owned(
        &self,
        plant_id: i64,
        user_id: i64,
    ) -> Result<Option<PlantEntity>, sqlx::Error> {
        sqlx::query_as::<_, PlantEntity>(
            r#"
            SELECT id, user_id, pot_id, species_id, name, image_url, notes, planted_at, created_at
            FROM plants
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(plant_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Apply `changes` to an owned plant. Absent fields keep their value.
    ///
    /// Returns `None` if the plant does not exist or belongs to someone else.
    pub async fn update(
        &self,
        plant_id: i64,
        user_id: i64,
        changes: &PlantChanges,
    ) -> Result<Option<PlantEntity>, sqlx::Error> {
        sqlx::query_as::<_, PlantEntity>(
            r#"
            UPDATE plants
            SET name = COALESCE($3, name),
                notes = COALESCE($4, notes),
                planted_at = COALESCE($5, planted_at)
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, pot_id, species_id, name, image_url, notes, planted_at, created_at
            "#,
        )
        .bind(plant_id)
        .bind(user_id)
        .bind(&changes.name)
        .bind(&changes.notes)
        .bind(changes.planted_at)
        .fetch_optional(&self.pool)
        .await
    }
}
