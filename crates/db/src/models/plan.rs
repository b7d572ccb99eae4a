//! Connectivity plan models.

use agronet_core::banner::BannerSlot;
use agronet_core::types::{EntityId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Stored value was not one of the known enum labels.
#[derive(Debug, thiserror::Error)]
#[error("Unknown {kind} value: '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Connection technology of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanType {
    #[serde(rename = "FIBRA")]
    Fiber,
    #[serde(rename = "RÁDIO")]
    Radio,
}

impl PlanType {
    /// Label stored in the `type` column.
    pub fn as_str(self) -> &'static str {
        match self {
            PlanType::Fiber => "FIBRA",
            PlanType::Radio => "RÁDIO",
        }
    }
}

impl TryFrom<String> for PlanType {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "FIBRA" => Ok(PlanType::Fiber),
            "RÁDIO" => Ok(PlanType::Radio),
            _ => Err(UnknownVariant {
                kind: "plan type",
                value,
            }),
        }
    }
}

/// A row from the `internet_plans` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: EntityId,
    pub name: String,
    #[sqlx(rename = "type", try_from = "String")]
    #[serde(rename = "type")]
    pub plan_type: PlanType,
    /// Download speed in Mbps.
    pub speed: i32,
    pub price: Decimal,
    #[sqlx(json)]
    pub features: Vec<String>,
    pub is_popular: bool,
    pub is_active: bool,
    pub banner_image: Option<String>,
    pub banner_order: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl BannerSlot for Plan {
    fn banner_order(&self) -> Option<i32> {
        self.banner_order
    }
}
