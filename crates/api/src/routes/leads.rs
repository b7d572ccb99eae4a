use axum::routing::post;
use axum::Router;

use crate::handlers::leads;
use crate::state::AppState;

/// Lead routes mounted at `/leads`.
///
/// ```text
/// POST /    -> create_lead
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(leads::create_lead))
}
