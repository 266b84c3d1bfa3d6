//! Watering entities (database row mappings).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the watering_logs table.
#[derive(Debug, Clone, FromRow)]
pub struct WateringEntity {
    pub id: i64,
    pub ambiental_conditions_id: i64,
    pub amount_ml: f64,
    pub watered_at: DateTime<Utc>,
}

impl From<WateringEntity> for domain::models::WateringEvent {
    fn from(entity: WateringEntity) -> Self {
        Self {
            id: entity.id,
            ambiental_conditions_id: entity.ambiental_conditions_id,
            amount_ml: entity.amount_ml,
            watered_at: entity.watered_at,
        }
    }
}

/// Watering log joined with the reading it belongs to.
#[derive(Debug, Clone, FromRow)]
pub struct WateringHistoryEntity {
    pub id: i64,
    pub watered_at: DateTime<Utc>,
    pub amount_ml: f64,
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
    pub moisture_percent: f64,
    pub light_lux: f64,
}

impl From<WateringHistoryEntity> for domain::models::watering::WateringHistoryEntry {
    fn from(entity: WateringHistoryEntity) -> Self {
        Self {
            id: entity.id,
            watered_at: entity.watered_at,
            amount_ml: entity.amount_ml,
            temperature_celsius: entity.temperature_celsius,
            humidity_percent: entity.humidity_percent,
            moisture_percent: entity.moisture_percent,
            light_lux: entity.light_lux,
        }
    }
}
