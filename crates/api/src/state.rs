use std::sync::Arc;

use agronet_db::SiteStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Storage backend picked at startup.
    pub store: Arc<dyn SiteStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
