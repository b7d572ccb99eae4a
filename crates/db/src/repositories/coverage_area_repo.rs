//! Repository for the `coverage_areas` table.

use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::coverage_area::CoverageArea;

/// Column list for `coverage_areas` queries.
const COLUMNS: &str = "\
    id, name, zip_codes, has_fiber, has_radio, status, created_at, updated_at";

/// Provides data access for coverage areas.
pub struct CoverageAreaRepo;

impl CoverageAreaRepo {
    /// List all coverage areas regardless of status.
    pub async fn list(pool: &PgPool) -> Result<Vec<CoverageArea>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM coverage_areas ORDER BY created_at, id");
        sqlx::query_as::<_, CoverageArea>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a coverage area by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: &str,
    ) -> Result<Option<CoverageArea>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM coverage_areas WHERE id = $1");
        sqlx::query_as::<_, CoverageArea>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert an area unless one with the same ID exists.
    pub async fn insert_if_absent(pool: &PgPool, area: &CoverageArea) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO coverage_areas \
                 (id, name, zip_codes, has_fiber, has_radio, status, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(&area.id)
        .bind(&area.name)
        .bind(Json(&area.zip_codes))
        .bind(area.has_fiber)
        .bind(area.has_radio)
        .bind(area.status.as_str())
        .bind(area.created_at)
        .bind(area.updated_at)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
