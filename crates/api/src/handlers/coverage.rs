//! Handlers for coverage areas and the postal-code checker.

use agronet_core::coverage::check_coverage;
use agronet_core::error::CoreError;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /api/coverage-areas/check`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageQuery {
    pub zip_code: Option<String>,
}

/// GET /api/coverage-areas
///
/// All coverage areas, whatever their status.
pub async fn list_coverage_areas(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let areas = state
        .store
        .list_coverage_areas()
        .await
        .map_err(AppError::store("Error fetching coverage areas"))?;

    Ok(Json(areas))
}

/// GET /api/coverage-areas/check?zipCode=65800-000
///
/// Report whether a postal code falls in a serving area and which
/// connection types are available there.
pub async fn check_zip_code(
    State(state): State<AppState>,
    Query(params): Query<CoverageQuery>,
) -> AppResult<impl IntoResponse> {
    let raw = params
        .zip_code
        .ok_or_else(|| CoreError::Validation("zipCode is required".to_string()))?;

    let areas = state
        .store
        .list_coverage_areas()
        .await
        .map_err(AppError::store("Error fetching coverage areas"))?;

    let check = check_coverage(&raw, &areas)?;

    tracing::debug!(
        zip_code = %check.zip_code,
        covered = check.covered,
        "Coverage checked",
    );

    Ok(Json(check))
}
