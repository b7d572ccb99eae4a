//! Repository for the `leads` table.

use sqlx::PgPool;

use crate::models::lead::Lead;

/// Column list for `leads` queries.
const COLUMNS: &str = "\
    id, name, phone, plan_id, source, contacted, whatsapp_sent, \
    converted_at, notes, created_at, updated_at";

/// Provides data access for captured leads.
pub struct LeadRepo;

impl LeadRepo {
    /// List all leads, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Lead>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM leads ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Lead>(&query).fetch_all(pool).await
    }

    /// Find a lead by its ID.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM leads WHERE id = $1");
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a fully resolved lead and return the stored row.
    pub async fn create(pool: &PgPool, lead: &Lead) -> Result<Lead, sqlx::Error> {
        let query = format!(
            "INSERT INTO leads \
                 (id, name, phone, plan_id, source, contacted, whatsapp_sent, \
                  converted_at, notes, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(&lead.id)
            .bind(&lead.name)
            .bind(&lead.phone)
            .bind(&lead.plan_id)
            .bind(&lead.source)
            .bind(lead.contacted)
            .bind(lead.whatsapp_sent)
            .bind(lead.converted_at)
            .bind(&lead.notes)
            .bind(lead.created_at)
            .bind(lead.updated_at)
            .fetch_one(pool)
            .await
    }
}
