use agronet_core::error::CoreError;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/settings/{key}
///
/// Look up a single site setting by its key.
pub async fn get_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<impl IntoResponse> {
    let setting = state
        .store
        .get_site_setting(&key)
        .await
        .map_err(AppError::store("Error fetching setting"))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SiteSetting",
            id: key,
        }))?;

    Ok(Json(setting))
}
