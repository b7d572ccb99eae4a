//! Repository for the `site_settings` table.

use sqlx::PgPool;

use crate::models::site_setting::SiteSetting;

/// Column list for `site_settings` queries.
const COLUMNS: &str = "id, key, value, created_at, updated_at";

/// Provides data access for site-wide key-value settings.
pub struct SiteSettingRepo;

impl SiteSettingRepo {
    /// List all settings ordered by key.
    pub async fn list(pool: &PgPool) -> Result<Vec<SiteSetting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_settings ORDER BY key");
        sqlx::query_as::<_, SiteSetting>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a setting by its unique key.
    pub async fn find_by_key(pool: &PgPool, key: &str) -> Result<Option<SiteSetting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_settings WHERE key = $1");
        sqlx::query_as::<_, SiteSetting>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// Insert a setting unless its ID or key is already taken.
    pub async fn insert_if_absent(pool: &PgPool, s: &SiteSetting) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO site_settings (id, key, value, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT DO NOTHING",
        )
        .bind(&s.id)
        .bind(&s.key)
        .bind(&s.value)
        .bind(s.created_at)
        .bind(s.updated_at)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
