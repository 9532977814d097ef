mod common;

use axum::{Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use clone_registry::api::handlers::register_handler;
use serde_json::json;

fn server(state: clone_registry::AppState) -> TestServer {
    let app = Router::new()
        .route("/api/register", post(register_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_register_unknown_clone_is_queued() {
    let (state, dir) = common::create_test_state();
    let server = server(state);

    let response = server
        .post("/api/register")
        .add_header("X-Forwarded-For", "203.0.113.5, 10.0.0.1")
        .json(&json!({ "name": "https://clone-a.test" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!({ "status": "queued" }));

    let queue = common::read_json(dir.path(), "queue.json");
    let entries = queue.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["url"], "https://clone-a.test");
    assert_eq!(entries[0]["discovered_by_ip"], "203.0.113.5");
    assert!(entries[0]["first_seen"].is_string());
}

#[tokio::test]
async fn test_register_twice_is_pending() {
    let (state, dir) = common::create_test_state();
    let server = server(state);

    server
        .post("/api/register")
        .json(&json!({ "name": "https://clone-a.test" }))
        .await
        .assert_status_ok();

    let response = server
        .post("/api/register")
        .add_header("X-Real-IP", "198.51.100.7")
        .json(&json!({ "name": "https://clone-a.test" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!({ "status": "pending" }));

    let queue = common::read_json(dir.path(), "queue.json");
    let entries = queue.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["discovered_by_ip"], "unknown");
}

#[tokio::test]
async fn test_register_approved_clone_counts_requests() {
    let (state, dir) = common::create_test_state();
    common::write_approved(dir.path(), &["https://clone-a.test"]);
    common::write_counters(dir.path(), &[("https://clone-a.test", 41)]);
    let server = server(state);

    let response = server
        .post("/api/register")
        .json(&json!({ "name": "https://clone-a.test" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "status": "approved", "requests": 42 })
    );
    assert_eq!(
        common::read_json(dir.path(), "requests.json")["https://clone-a.test"],
        42
    );
}

#[tokio::test]
async fn test_register_original_is_counted_without_approval() {
    let (state, dir) = common::create_test_state();
    let server = server(state);

    let response = server
        .post("/api/register")
        .json(&json!({ "name": common::ORIGINAL }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "status": "approved", "requests": 1 })
    );
    assert!(!dir.path().join("queue.json").exists());
}

#[tokio::test]
async fn test_register_urls_are_case_sensitive() {
    let (state, dir) = common::create_test_state();
    common::write_approved(dir.path(), &["https://clone-a.test"]);
    let server = server(state);

    let response = server
        .post("/api/register")
        .json(&json!({ "name": "https://CLONE-A.test" }))
        .await;

    assert_eq!(response.json::<serde_json::Value>(), json!({ "status": "queued" }));
}

#[tokio::test]
async fn test_register_missing_name() {
    let (state, dir) = common::create_test_state();
    let server = server(state);

    let response = server.post("/api/register").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(!dir.path().join("queue.json").exists());
}

#[tokio::test]
async fn test_register_empty_name() {
    let (state, _dir) = common::create_test_state();
    let server = server(state);

    let response = server
        .post("/api/register")
        .json(&json!({ "name": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_name_too_long() {
    let (state, _dir) = common::create_test_state();
    let server = server(state);

    let response = server
        .post("/api/register")
        .json(&json!({ "name": format!("https://{}.test", "a".repeat(2048)) }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_malformed_body() {
    let (state, _dir) = common::create_test_state();
    let server = server(state);

    let response = server
        .post("/api/register")
        .text("{not json")
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["message"],
        "Missing name field"
    );
}

#[tokio::test]
async fn test_register_corrupt_store_is_server_error() {
    let (state, dir) = common::create_test_state();
    std::fs::write(dir.path().join("approved_clones.json"), b"[oops").unwrap();
    let server = server(state);

    let response = server
        .post("/api/register")
        .json(&json!({ "name": "https://clone-a.test" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        std::fs::read(dir.path().join("approved_clones.json")).unwrap(),
        b"[oops"
    );
}
