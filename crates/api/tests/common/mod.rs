#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use birdwatch_core::store::{MemoryBirdStore, SharedBirdStore};
use http_body_util::BodyExt;
use tower::ServiceExt;

use birdwatch_api::config::{ServerConfig, StoreBackend};
use birdwatch_api::router::build_app_router;
use birdwatch_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults, serving assets from
/// `assets_dir`.
pub fn test_config(assets_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:8080".to_string()],
        request_timeout_secs: 30,
        assets_dir: assets_dir.to_path_buf(),
        store_backend: StoreBackend::Memory,
        database_url: None,
        seed_demo_bird: false,
    }
}

/// Build the full application router over the given store.
///
/// Uses the same [`build_app_router`] as `main.rs`, so tests exercise the
/// production middleware stack. Assets resolve to a directory that does not
/// exist, so `/assets/*` answers 404.
pub fn build_test_app(store: SharedBirdStore) -> Router {
    build_test_app_with_assets(store, Path::new("./does-not-exist"))
}

/// Like [`build_test_app`], serving static files from `assets_dir`.
pub fn build_test_app_with_assets(store: SharedBirdStore, assets_dir: &Path) -> Router {
    let config = test_config(assets_dir);
    let state = AppState {
        store,
        pool: None,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A fresh, empty in-memory store plus a handle for inspecting it.
pub fn memory_store() -> (SharedBirdStore, MemoryBirdStore) {
    let store = MemoryBirdStore::new();
    (Arc::new(store.clone()), store)
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a raw body with an `application/x-www-form-urlencoded` content type.
pub async fn post_form(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
