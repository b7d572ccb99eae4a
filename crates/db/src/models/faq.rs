use agronet_core::types::{EntityId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `faqs` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub id: EntityId,
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
    /// Display position, ascending.
    pub order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
