use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when storage is unreachable.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Which store backs the API (`memory` or `postgres`).
    pub storage: &'static str,
    pub storage_healthy: bool,
}

/// GET /health -- service and storage health.
///
/// Always 200: a degraded store still serves fallback content.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let storage_healthy = state.store.health_check().await.is_ok();

    let status = if storage_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        storage: state.store.backend(),
        storage_healthy,
    })
}

/// Mount health check routes (root level, not under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
