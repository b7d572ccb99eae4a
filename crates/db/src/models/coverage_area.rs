//! Coverage area models.

use agronet_core::coverage::CoverageSource;
use agronet_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::plan::UnknownVariant;

/// Service status of a coverage area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CoverageStatus {
    Active,
    Planned,
    Unavailable,
}

impl CoverageStatus {
    /// Label stored in the `status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            CoverageStatus::Active => "ACTIVE",
            CoverageStatus::Planned => "PLANNED",
            CoverageStatus::Unavailable => "UNAVAILABLE",
        }
    }
}

impl TryFrom<String> for CoverageStatus {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "ACTIVE" => Ok(CoverageStatus::Active),
            "PLANNED" => Ok(CoverageStatus::Planned),
            "UNAVAILABLE" => Ok(CoverageStatus::Unavailable),
            _ => Err(UnknownVariant {
                kind: "coverage status",
                value,
            }),
        }
    }
}

/// A row from the `coverage_areas` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageArea {
    pub id: EntityId,
    pub name: String,
    #[sqlx(json)]
    pub zip_codes: Vec<String>,
    pub has_fiber: bool,
    pub has_radio: bool,
    #[sqlx(try_from = "String")]
    pub status: CoverageStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CoverageSource for CoverageArea {
    fn area_name(&self) -> &str {
        &self.name
    }

    fn zip_codes(&self) -> &[String] {
        &self.zip_codes
    }

    fn has_fiber(&self) -> bool {
        self.has_fiber
    }

    fn has_radio(&self) -> bool {
        self.has_radio
    }

    fn is_serving(&self) -> bool {
        self.status == CoverageStatus::Active
    }
}
