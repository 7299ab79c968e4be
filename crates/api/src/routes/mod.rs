pub mod bird;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the root-level route tree.
///
/// ```text
/// /hello                                           greeting (GET)
/// /bird                                            list (GET), record (POST)
/// ```
///
/// `/health` and `/assets/*` are mounted separately by the app router.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(handlers::hello::hello))
        .merge(bird::router())
}
