//! Handlers for connectivity plans.

use agronet_core::banner::banner_lineup;
use agronet_core::error::CoreError;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/plans
///
/// Every plan, unfiltered.
pub async fn list_plans(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let plans = state
        .store
        .list_plans()
        .await
        .map_err(AppError::store("Error fetching plans"))?;

    Ok(Json(plans))
}

/// GET /api/plans/banners
///
/// Plans shown in the promotional carousel, in carousel order.
pub async fn list_banner_plans(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let plans = state
        .store
        .list_plans()
        .await
        .map_err(AppError::store("Error fetching plans"))?;

    Ok(Json(banner_lineup(plans)))
}

/// GET /api/plans/{id}
pub async fn get_plan(
    State(state): State<AppState>,
    Path(plan_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let plan = state
        .store
        .get_plan(&plan_id)
        .await
        .map_err(AppError::store("Error fetching plan"))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Plan",
            id: plan_id,
        }))?;

    Ok(Json(plan))
}
