//! Repository for the `internet_plans` table.

use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::plan::Plan;

/// Column list for `internet_plans` queries.
const COLUMNS: &str = "\
    id, name, type, speed, price, features, is_popular, is_active, \
    banner_image, banner_order, created_at, updated_at";

/// Provides data access for connectivity plans.
pub struct PlanRepo;

impl PlanRepo {
    /// List all plans, active or not, in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Plan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM internet_plans ORDER BY created_at, id");
        sqlx::query_as::<_, Plan>(&query).fetch_all(pool).await
    }

    /// Find a plan by its ID.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Plan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM internet_plans WHERE id = $1");
        sqlx::query_as::<_, Plan>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a plan unless one with the same ID exists.
    ///
    /// Returns the number of rows inserted (0 or 1).
    pub async fn insert_if_absent(pool: &PgPool, plan: &Plan) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO internet_plans \
                 (id, name, type, speed, price, features, is_popular, is_active, \
                  banner_image, banner_order, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(&plan.id)
        .bind(&plan.name)
        .bind(plan.plan_type.as_str())
        .bind(plan.speed)
        .bind(plan.price)
        .bind(Json(&plan.features))
        .bind(plan.is_popular)
        .bind(plan.is_active)
        .bind(&plan.banner_image)
        .bind(plan.banner_order)
        .bind(plan.created_at)
        .bind(plan.updated_at)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete a plan by ID. Leads pointing at it keep existing with
    /// `plan_id` cleared (`ON DELETE SET NULL`).
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM internet_plans WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
