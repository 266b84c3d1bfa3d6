//! Environmental reading repository for database operations.

use async_trait::async_trait;
use domain::models::NewReading;
use domain::services::{ReadingStore, StoreError};
use sqlx::PgPool;

use crate::entities::ReadingEntity;
use crate::metrics::QueryTimer;
use crate::repositories::WateringRepository;

/// Append-only store for sensor readings.
#[derive(Clone)]
pub struct ReadingRepository {
    pool: PgPool,
}

impl ReadingRepository {
    /// Creates a new ReadingRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append a reading exactly as reported.
    pub async fn insert(
        &self,
        plant_id: i64,
        reading: &NewReading,
    ) -> Result<ReadingEntity, sqlx::Error> {
        let timer = QueryTimer::new("insert_reading");
        let result = sqlx::query_as::<_, ReadingEntity>(
            r#"
            INSERT INTO ambiental_conditions
                (plant_id, temperature_celsius, humidity_percent, moisture_percent, light_lux)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, plant_id, temperature_celsius, humidity_percent, moisture_percent,
                      light_lux, recorded_at
            "#,
        )
        .bind(plant_id)
        .bind(reading.temperature)
        .bind(reading.humidity)
        .bind(reading.moisture)
        .bind(reading.light)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Most recent reading of a plant.
    pub async fn latest(&self, plant_id: i64) -> Result<Option<ReadingEntity>, sqlx::Error> {
        sqlx::query_as::<_, ReadingEntity>(
            r#"
            SELECT id, plant_id, temperature_celsius, humidity_percent, moisture_percent,
                   light_lux, recorded_at
            FROM ambiental_conditions
            WHERE plant_id = $1
            ORDER BY recorded_at DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(plant_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Recent readings of a plant, newest first.
    pub async fn list(&self, plant_id: i64, limit: i64) -> Result<Vec<ReadingEntity>, sqlx::Error> {
        sqlx::query_as::<_, ReadingEntity>(
            r#"
            SELECT id, plant_id, temperature_celsius, humidity_percent, moisture_percent,
                   light_lux, recorded_at
            FROM ambiental_conditions
            WHERE plant_id = $1
            ORDER BY recorded_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(plant_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }

    /// Find a reading by id, only if it belongs to `plant_id`.
    pub async fn find_for_plant(
        &self,
        reading_id: i64,
        plant_id: i64,
    ) -> Result<Option<ReadingEntity>, sqlx::Error> {
        sqlx::query_as::<_, ReadingEntity>(
            r#"
            SELECT id, plant_id, temperature_celsius, humidity_percent, moisture_percent,
                   light_lux, recorded_at
            FROM ambiental_conditions
            WHERE id = $1 AND plant_id = $2
            "#,
        )
        .bind(reading_id)
        .bind(plant_id)
        .fetch_optional(&self.pool)
        .await
    }
}

#[async_trait]
impl ReadingStore for ReadingRepository {
    async fn record_reading(
        &self,
        plant_id: i64,
        reading: &NewReading,
    ) -> Result<i64, StoreError> {
        self.insert(plant_id, reading)
            .await
            .map(|row| row.id)
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    async fn record_watering(&self, reading_id: i64, amount_ml: f64) -> Result<i64, StoreError> {
        WateringRepository::new(self.pool.clone())
            .create(reading_id, amount_ml)
            .await
            .map(|row| row.id)
            .map_err(|e| StoreError::Database(e.to_string()))
    }
}
