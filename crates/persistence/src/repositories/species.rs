//! Species repository for database operations.

use sqlx::PgPool;

use crate::entities::SpeciesEntity;

/// Read-only access to species reference data.
#[derive(Clone)]
pub struct SpeciesRepository {
    pool: PgPool,
}

impl SpeciesRepository {
    /// Creates a new SpeciesRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all species ordered by id.
    pub async fn list(&self) -> Result<Vec<SpeciesEntity>, sqlx::Error> {
        sqlx::query_as::<_, SpeciesEntity>(
            r#"
            SELECT id, common_name, scientific_name, water_requirements,
                   light_requirements, humidity_requirements
            FROM species
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Find a species by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<SpeciesEntity>, sqlx::Error> {
        sqlx::query_as::<_, SpeciesEntity>(
            r#"
            SELECT id, common_name, scientific_name, water_requirements,
                   light_requirements, humidity_requirements
            FROM species
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Find a species by common or scientific name, case-insensitively.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<SpeciesEntity>, sqlx::Error> {
        sqlx::query_as::<_, SpeciesEntity>(
            r#"
            SELECT id, common_name, scientific_name, water_requirements,
                   light_requirements, humidity_requirements
            FROM species
            WHERE LOWER(common_name) = LOWER($1) OR LOWER(scientific_name) = LOWER($1)
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(name.trim())
        .fetch_optional(&self.pool)
        .await
    }
}
