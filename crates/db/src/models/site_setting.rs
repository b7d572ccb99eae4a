use agronet_core::types::{EntityId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `site_settings` key-value table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSetting {
    pub id: EntityId,
    pub key: String,
    pub value: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
