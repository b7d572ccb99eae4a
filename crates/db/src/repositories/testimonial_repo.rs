//! Repository for the `testimonials` table.

use sqlx::PgPool;

use crate::models::testimonial::Testimonial;

/// Column list for `testimonials` queries.
const COLUMNS: &str = "\
    id, name, location, comment, rating, is_active, image_url, created_at, updated_at";

/// Provides data access for customer testimonials.
pub struct TestimonialRepo;

impl TestimonialRepo {
    /// List active testimonials in insertion order.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM testimonials WHERE is_active = true ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a testimonial by its ID, active or not.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials WHERE id = $1");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a testimonial unless one with the same ID exists.
    pub async fn insert_if_absent(pool: &PgPool, t: &Testimonial) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO testimonials \
                 (id, name, location, comment, rating, is_active, image_url, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(&t.id)
        .bind(&t.name)
        .bind(&t.location)
        .bind(&t.comment)
        .bind(t.rating)
        .bind(t.is_active)
        .bind(&t.image_url)
        .bind(t.created_at)
        .bind(t.updated_at)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
