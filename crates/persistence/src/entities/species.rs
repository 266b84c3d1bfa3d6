//! Species entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the species table.
#[derive(Debug, Clone, FromRow)]
pub struct SpeciesEntity {
    pub id: i64,
    pub common_name: String,
    pub scientific_name: Option<String>,
    pub water_requirements: Option<String>,
    pub light_requirements: Option<String>,
    pub humidity_requirements: Option<String>,
}

impl From<SpeciesEntity> for domain::models::Species {
    fn from(entity: SpeciesEntity) -> Self {
        Self {
            id: entity.id,
            common_name: entity.common_name,
            scientific_name: entity.scientific_name,
            water_requirements: entity.water_requirements,
            light_requirements: entity.light_requirements,
            humidity_requirements: entity.humidity_requirements,
        }
    }
}
