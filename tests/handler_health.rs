mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use clone_registry::api::handlers::health_handler;
use tempfile::TempDir;

#[tokio::test]
async fn test_health_check_healthy() {
    let (state, _dir) = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();
    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_health_check_before_first_write() {
    let dir = TempDir::new().unwrap();
    let state = common::create_state_in(&dir.path().join("not-created-yet"), None);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    server.get("/health").await.assert_status_ok();
}

#[tokio::test]
async fn test_health_check_degraded_when_data_dir_is_a_file() {
    let dir = TempDir::new().unwrap();
    let bogus = dir.path().join("data");
    std::fs::write(&bogus, b"not a directory").unwrap();

    let state = common::create_state_in(&bogus, None);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();
    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["store"]["status"], "error");
}
