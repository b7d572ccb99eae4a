use agronet_core::types::{EntityId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `testimonials` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: EntityId,
    pub name: String,
    pub location: String,
    pub comment: String,
    /// 0 to 5 in half-star steps.
    pub rating: f64,
    pub is_active: bool,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
