use axum::routing::get;
use axum::Router;

use crate::handlers::coverage;
use crate::state::AppState;

/// Coverage routes mounted at `/coverage-areas`.
///
/// ```text
/// GET /         -> list_coverage_areas
/// GET /check    -> check_zip_code
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(coverage::list_coverage_areas))
        .route("/check", get(coverage::check_zip_code))
}
