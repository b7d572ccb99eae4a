use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/testimonials
///
/// Active testimonials only.
pub async fn list_testimonials(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let testimonials = state
        .store
        .list_testimonials()
        .await
        .map_err(AppError::store("Error fetching testimonials"))?;

    Ok(Json(testimonials))
}
