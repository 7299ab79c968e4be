//! Integration tests for static file serving under `/assets/`.

mod common;

use axum::http::StatusCode;
use common::{body_text, build_test_app_with_assets, get, memory_store};

const INDEX: &str = "<html><body>birds</body></html>";

fn assets_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
    std::fs::write(dir.path().join("style.css"), "body { color: black; }").unwrap();
    dir
}

#[tokio::test]
async fn serves_file_with_prefix_stripped() {
    let dir = assets_dir();
    let (store, _) = memory_store();
    let app = build_test_app_with_assets(store, dir.path());

    let response = get(app, "/assets/style.css").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "body { color: black; }");
}

#[tokio::test]
async fn landing_path_serves_index() {
    let dir = assets_dir();
    let (store, _) = memory_store();
    let app = build_test_app_with_assets(store, dir.path());

    let response = get(app, "/assets/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, INDEX);
}

#[tokio::test]
async fn missing_file_returns_404() {
    let dir = assets_dir();
    let (store, _) = memory_store();
    let app = build_test_app_with_assets(store, dir.path());

    let response = get(app, "/assets/missing.js").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn path_traversal_is_not_served() {
    let outer = tempfile::tempdir().unwrap();
    let assets = outer.path().join("assets");
    std::fs::create_dir(&assets).unwrap();
    std::fs::write(outer.path().join("secret.txt"), "hidden").unwrap();
    let (store, _) = memory_store();
    let app = build_test_app_with_assets(store, &assets);

    let response = get(app, "/assets/../secret.txt").await;

    assert_ne!(response.status(), StatusCode::OK);
    assert!(!body_text(response).await.contains("hidden"));
}
