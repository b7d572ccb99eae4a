//! Repository for the `faqs` table.

use sqlx::PgPool;

use crate::models::faq::Faq;

/// Column list for `faqs` queries. `order` is a reserved word.
const COLUMNS: &str = "\
    id, question, answer, category, \"order\", is_active, created_at, updated_at";

/// Provides data access for FAQ entries.
pub struct FaqRepo;

impl FaqRepo {
    /// List active FAQs by ascending `order`; ties fall back to insertion order.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Faq>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM faqs WHERE is_active = true \
             ORDER BY \"order\", created_at, id"
        );
        sqlx::query_as::<_, Faq>(&query).fetch_all(pool).await
    }

    /// Find an FAQ entry by its ID, active or not.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Faq>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faqs WHERE id = $1");
        sqlx::query_as::<_, Faq>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert an FAQ entry unless one with the same ID exists.
    pub async fn insert_if_absent(pool: &PgPool, faq: &Faq) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO faqs \
                 (id, question, answer, category, \"order\", is_active, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(&faq.id)
        .bind(&faq.question)
        .bind(&faq.answer)
        .bind(&faq.category)
        .bind(faq.order)
        .bind(faq.is_active)
        .bind(faq.created_at)
        .bind(faq.updated_at)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
