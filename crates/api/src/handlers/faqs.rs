use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/faqs
///
/// Active FAQs in display order.
pub async fn list_faqs(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let faqs = state
        .store
        .list_faqs()
        .await
        .map_err(AppError::store("Error fetching FAQs"))?;

    Ok(Json(faqs))
}
