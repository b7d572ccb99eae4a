use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Site setting routes mounted at `/settings`.
///
/// ```text
/// GET /{key}    -> get_setting
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{key}", get(settings::get_setting))
}
