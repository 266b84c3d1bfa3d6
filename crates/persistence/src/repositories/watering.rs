//! Watering log repository for database operations.

use shared::pagination::PageRequest;
use sqlx::PgPool;

use crate::entities::{WateringEntity, WateringHistoryEntity};

/// Repository for watering events.
#[derive(Clone)]
pub struct WateringRepository {
    pool: PgPool,
}

impl WateringRepository {
    /// Creates a new WateringRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a watering event against a reading.
    pub async fn create(
        &self,
        reading_id: i64,
        amount_ml: f64,
    ) -> Result<WateringEntity, sqlx::Error> {
        sqlx::query_as::<_, WateringEntity>(
            r#"
            INSERT INTO watering_logs (ambiental_conditions_id, amount_ml)
            VALUES ($1, $2)
            RETURNING id, ambiental_conditions_id, amount_ml, watered_at
            "#,
        )
        .bind(reading_id)
        .bind(amount_ml)
        .fetch_one(&self.pool)
        .await
    }

    /// One page of a plant's watering history, newest first.
    pub async fn history(
        &self,
        plant_id: i64,
        page: PageRequest,
    ) -> Result<Vec<WateringHistoryEntity>, sqlx::Error> {
        sqlx::query_as::<_, WateringHistoryEntity>(
            r#"
            SELECT wl.id, wl.watered_at, wl.amount_ml,
                   ac.temperature_celsius, ac.humidity_percent, ac.moisture_percent, ac.light_lux
            FROM watering_logs wl
            JOIN ambiental_conditions ac ON ac.id = wl.ambiental_conditions_id
            WHERE ac.plant_id = $1
            ORDER BY wl.watered_at DESC, wl.id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(plant_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
    }

    /// Total number of watering events of a plant.
    pub async fn count_for_plant(&self, plant_id: i64) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM watering_logs wl
            JOIN ambiental_conditions ac ON ac.id = wl.ambiental_conditions_id
            WHERE ac.plant_id = $1
            "#,
        )
        .bind(plant_id)
        .fetch_one(&self.pool)
        .await
    }
}
