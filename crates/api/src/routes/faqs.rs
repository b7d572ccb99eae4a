use axum::routing::get;
use axum::Router;

use crate::handlers::faqs;
use crate::state::AppState;

/// FAQ routes mounted at `/faqs`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(faqs::list_faqs))
}
