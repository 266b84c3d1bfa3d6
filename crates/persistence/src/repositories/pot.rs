//! Pot repository: device registry backed by the pots table.

use async_trait::async_trait;
use domain::models::DevicePlant;
use domain::services::{PlantRegistry, StoreError};
use sqlx::PgPool;

use crate::entities::{DevicePlantEntity, PotEntity};
use crate::metrics::QueryTimer;

/// Repository for pots and device label resolution.
#[derive(Clone)]
pub struct PotRepository {
    pool: PgPool,
}

impl PotRepository {
    /// Creates a new PotRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns the pot `(user_id, label)`, creating it if needed.
    ///
    /// The boolean is true when the pot was created by this call. Concurrent
    /// callers are serialized by the `(user_id, label)` unique constraint.
    pub async fn get_or_create(
        &self,
        user_id: i64,
        label: &str,
    ) -> Result<(PotEntity, bool), sqlx::Error> {
        let inserted = sqlx::query_as::<_, PotEntity>(
            r#"
            INSERT INTO pots (user_id, label)
            VALUES ($1, $2)
            ON CONFLICT (user_id, label) DO NOTHING
            RETURNING id, user_id, label, created_at
            "#,
        )
        .bind(user_id)
        .bind(label)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(pot) = inserted {
            return Ok((pot, true));
        }

        let existing = sqlx::query_as::<_, PotEntity>(
            r#"
            SELECT id, user_id, label, created_at
            FROM pots
            WHERE user_id = $1 AND label = $2
            "#,
        )
        .bind(user_id)
        .bind(label)
        .fetch_one(&self.pool)
        .await?;

        Ok((existing, false))
    }

    /// List a user's pots, newest first.
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<PotEntity>, sqlx::Error> {
        sqlx::query_as::<_, PotEntity>(
            r#"
            SELECT id, user_id, label, created_at
            FROM pots
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Find a pot by id, only if it belongs to `user_id`.
    pub async fn find_owned(
        &self,
        pot_id: i64,
        user_id: i64,
    ) -> Result<Option<PotEntity>, sqlx::Error> {
        sqlx::query_as::<_, PotEntity>(
            r#"
            SELECT id, user_id, label, created_at
            FROM pots
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(pot_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Resolve a device label to the plant in that pot.
    ///
    /// Labels are unique per user only; the lowest plant id wins.
    pub async fn find_plant_by_label(
        &self,
        label: &str,
    ) -> Result<Option<DevicePlantEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_plant_by_device_label");
        let result = sqlx::query_as::<_, DevicePlantEntity>(
            r#"
            SELECT p.id AS plant_id, p.user_id, p.species_id, s.common_name AS species_name
            FROM pots pt
            JOIN plants p ON p.pot_id = pt.id
            LEFT JOIN species s ON s.id = p.species_id
            WHERE pt.label = $1
            ORDER BY p.id
            LIMIT 1
            "#,
        )
        .bind(label)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}

#[async_trait]
impl PlantRegistry for PotRepository {
    async fn find_plant_by_device_label(
        &self,
        label: &str,
    ) -> Result<Option<DevicePlant>, StoreError> {
        self.find_plant_by_label(label)
            .await
            .map(|row| row.map(Into::into))
            .map_err(|e| StoreError::Database(e.to_string()))
    }
}
