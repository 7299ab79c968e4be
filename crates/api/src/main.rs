use std::net::SocketAddr;
use std::sync::Arc;

use birdwatch_core::bird::Bird;
use birdwatch_core::store::{MemoryBirdStore, SharedBirdStore};
use birdwatch_db::PgBirdStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use birdwatch_api::config::{ServerConfig, StoreBackend};
use birdwatch_api::router::build_app_router;
use birdwatch_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "birdwatch_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        store = config.store_backend.as_str(),
        assets_dir = %config.assets_dir.display(),
        "Loaded server configuration",
    );

    // --- Store ---
    let (store, pool) = match config.store_backend {
        StoreBackend::Memory => {
            let store = if config.seed_demo_bird {
                tracing::info!("Seeding in-memory store with demo bird");
                MemoryBirdStore::with_birds(vec![Bird::new("Chimni", "Found in India")])
            } else {
                MemoryBirdStore::new()
            };
            let store: SharedBirdStore = Arc::new(store);
            (store, None)
        }
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .expect("DATABASE_URL must be set for the postgres store");

            let pool = birdwatch_db::create_pool(database_url)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            birdwatch_db::health_check(&pool)
                .await
                .expect("Database health check failed");
            tracing::info!("Database health check passed");

            birdwatch_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            let store: SharedBirdStore = Arc::new(PgBirdStore::new(pool.clone()));
            (store, Some(pool))
        }
    };

    // --- App state ---
    let state = AppState {
        store,
        pool,
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

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
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
