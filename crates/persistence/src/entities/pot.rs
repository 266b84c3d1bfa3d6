//! Pot entities (database row mappings).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the pots table.
#[derive(Debug, Clone, FromRow)]
pub struct PotEntity {
    pub id: i64,
    pub user_id: i64,
    pub label: String,
    pub created_at: DateTime<Utc>,
}

impl From<PotEntity> for domain::models::Pot {
    fn from(entity: PotEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            label: entity.label,
            created_at: entity.created_at,
        }
    }
}

/// Row of the pot -> plant -> species lookup by device label.
#[derive(Debug, Clone, FromRow)]
pub struct DevicePlantEntity {
    pub plant_id: i64,
    pub user_id: i64,
    pub species_id: Option<i64>,
    pub species_name: Option<String>,
}

impl From<DevicePlantEntity> for domain::models::DevicePlant {
    fn from(entity: DevicePlantEntity) -> Self {
        Self {
            plant_id: entity.plant_id,
            user_id: entity.user_id,
            species_id: entity.species_id,
            species_name: entity.species_name,
        }
    }
}
