//! Plant entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the plants table.
#[derive(Debug, Clone, FromRow)]
pub struct PlantEntity {
    pub id: i64,
    pub user_id: i64,
    pub pot_id: i64,
    pub species_id: Option<i64>,
    pub name: String,
    pub image_url: Option<String>,
    pub notes: Option<String>,
    pub planted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<PlantEntity> for domain::models::Plant {
    fn from(entity: PlantEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            pot_id: entity.pot_id,
            species_id: entity.species_id,
            name: entity.name,
            image_url: entity.image_url,
            notes: entity.notes,
            planted_at: entity.planted_at,
            created_at: entity.created_at,
        }
    }
}

/// Plant row joined with its most recent reading, if any.
#[derive(Debug, Clone, FromRow)]
pub struct PlantWithLastReadingEntity {
    pub id: i64,
    pub user_id: i64,
    pub pot_id: i64,
    pub species_id: Option<i64>,
    pub name: String,
    pub image_url: Option<String>,
    pub notes: Option<String>,
    pub planted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub temperature_celsius: Option<f64>,
    pub humidity_percent: Option<f64>,
    pub moisture_percent: Option<f64>,
    pub light_lux: Option<f64>,
    pub recorded_at: Option<DateTime<Utc>>,
}

impl From<PlantWithLastReadingEntity> for domain::models::plant::PlantSummary {
    fn from(entity: PlantWithLastReadingEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            species_id: entity.species_id,
            pot_id: entity.pot_id,
            image_url: entity.image_url,
            notes: entity.notes,
            planted_at: entity.planted_at,
            last_conditions: domain::models::reading::LastConditions {
                temperature_celsius: entity.temperature_celsius,
                humidity_percent: entity.humidity_percent,
                moisture_percent: entity.moisture_percent,
                light_lux: entity.light_lux,
                recorded_at: entity.recorded_at,
            },
        }
    }
}
