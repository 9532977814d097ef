mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use clone_registry::api::handlers::clones_handler;
use serde_json::json;
use tempfile::TempDir;

#[tokio::test]
async fn test_clones_lists_original_first() {
    let (state, dir) = common::create_test_state();
    common::write_approved(dir.path(), &["https://clone-a.test", "https://clone-b.test"]);
    common::write_counters(
        dir.path(),
        &[("https://clone-b.test", 9), (common::ORIGINAL, 3)],
    );

    let app = Router::new()
        .route("/api/clones", get(clones_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/clones").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({
            "clones": [
                { "url": common::ORIGINAL, "requests": 3, "is_original": true },
                { "url": "https://clone-a.test", "requests": 0, "is_original": false },
                { "url": "https://clone-b.test", "requests": 9, "is_original": false }
            ]
        })
    );
}

#[tokio::test]
async fn test_clones_skips_approved_copy_of_original() {
    let (state, dir) = common::create_test_state();
    common::write_approved(dir.path(), &[common::ORIGINAL, "https://clone-a.test"]);

    let app = Router::new()
        .route("/api/clones", get(clones_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let json = server.get("/api/clones").await.json::<serde_json::Value>();
    let clones = json["clones"].as_array().unwrap();

    assert_eq!(clones.len(), 2);
    assert_eq!(clones[0]["url"], common::ORIGINAL);
    assert_eq!(clones[1]["url"], "https://clone-a.test");
}

#[tokio::test]
async fn test_clones_empty_without_original() {
    let dir = TempDir::new().unwrap();
    let state = common::create_state_in(dir.path(), None);

    let app = Router::new()
        .route("/api/clones", get(clones_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/clones").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!({ "clones": [] }));
}
