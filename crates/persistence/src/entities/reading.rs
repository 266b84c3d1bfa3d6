//! Environmental reading entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the ambiental_conditions table.
#[derive(Debug, Clone, FromRow)]
pub struct ReadingEntity {
    pub id: i64,
    pub plant_id: i64,
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
    pub moisture_percent: f64,
    pub light_lux: f64,
    pub recorded_at: DateTime<Utc>,
}

impl From<ReadingEntity> for domain::models::EnvironmentalReading {
    fn from(entity: ReadingEntity) -> Self {
        Self {
            id: entity.id,
            plant_id: entity.plant_id,
            temperature_celsius: entity.temperature_celsius,
            humidity_percent: entity.humidity_percent,
            moisture_percent: entity.moisture_percent,
            light_lux: entity.light_lux,
            recorded_at: entity.recorded_at,
        }
    }
}
