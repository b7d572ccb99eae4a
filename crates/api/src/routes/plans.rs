use axum::routing::get;
use axum::Router;

use crate::handlers::plans;
use crate::state::AppState;

/// Plan routes mounted at `/plans`.
///
/// ```text
/// GET /           -> list_plans
/// GET /banners    -> list_banner_plans
/// GET /{id}       -> get_plan
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(plans::list_plans))
        .route("/banners", get(plans::list_banner_plans))
        .route("/{id}", get(plans::get_plan))
}
