use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agronet_api::config::{LogFormat, ServerConfig, StorageBackend};
use agronet_api::router::build_app_router;
use agronet_api::state::AppState;
use agronet_db::{MemoryStore, PgStore, SiteStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Configuration ---
    let config = ServerConfig::from_env();

    // --- Tracing ---
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "agronet_api=debug,agronet_db=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Storage ---
    let store = build_store(&config).await;
    tracing::info!(backend = store.backend(), "Storage ready");

    // --- App state ---
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Pick and prepare the storage backend.
///
/// The Postgres path connects, checks, migrates and optionally seeds before
/// the server binds; any failure stops the process.
async fn build_store(config: &ServerConfig) -> Arc<dyn SiteStore> {
    match config.storage.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; leads will not survive a restart");
            Arc::new(MemoryStore::with_fixtures())
        }
        StorageBackend::Postgres => {
            let database_url = config
                .storage
                .database_url
                .as_deref()
                .expect("DATABASE_URL must be set when STORAGE_BACKEND=postgres");

            let pool = agronet_db::create_pool(database_url)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            agronet_db::health_check(&pool)
                .await
                .expect("Database health check failed");

            agronet_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            if config.storage.seed_fixtures {
                agronet_db::seed_fixtures(&pool)
                    .await
                    .expect("Failed to seed fixture data");
            }

            Arc::new(PgStore::new(pool, config.storage.fallback_on_read_error))
        }
    }
}

/// Wait for SIGINT or SIGTERM to initiate graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
