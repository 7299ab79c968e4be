//! Route definitions for bird records.

use axum::routing::get;
use axum::Router;

use crate::handlers::bird;
use crate::state::AppState;

/// Bird record routes.
///
/// ```text
/// GET  /bird  -> list_birds
/// POST /bird  -> create_bird
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/bird", get(bird::list_birds).post(bird::create_bird))
}
