use std::sync::Arc;

use birdwatch_core::store::SharedBirdStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Bird record store selected at startup.
    pub store: SharedBirdStore,
    /// Database connection pool, present only for the postgres backend.
    pub pool: Option<birdwatch_db::DbPool>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
