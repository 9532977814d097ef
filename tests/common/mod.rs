#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

use clone_registry::application::services::{AuthService, RegistryService};
use clone_registry::infrastructure::persistence::JsonCloneRepository;
use clone_registry::state::AppState;

pub const TEST_PASSWORD: &str = "test-password";
pub const ORIGINAL: &str = "https://original.test";

/// Builds state over a fresh data directory. Keep the `TempDir` alive for
/// the duration of the test.
pub fn create_test_state() -> (AppState, TempDir) {
    let dir = TempDir::new().unwrap();
    let state = create_state_in(dir.path(), Some(ORIGINAL));
    (state, dir)
}

pub fn create_state_in(data_dir: &Path, original: Option<&str>) -> AppState {
    let repository = Arc::new(JsonCloneRepository::new(data_dir));
    let registry = Arc::new(RegistryService::new(
        repository,
        original.map(str::to_string),
    ));
    let auth_service = Arc::new(AuthService::new(TEST_PASSWORD, 3600));

    AppState::new(registry, auth_service)
}

pub fn write_approved(dir: &Path, urls: &[&str]) {
    std::fs::write(
        dir.join("approved_clones.json"),
        serde_json::to_vec(&urls).unwrap(),
    )
    .unwrap();
}

pub fn write_counters(dir: &Path, counters: &[(&str, u64)]) {
    let map: serde_json::Map<String, serde_json::Value> = counters
        .iter()
        .map(|(url, n)| (url.to_string(), json!(n)))
        .collect();
    std::fs::write(dir.join("requests.json"), serde_json::to_vec(&map).unwrap()).unwrap();
}

pub fn write_queue(dir: &Path, entries: &[(&str, DateTime<Utc>, &str)]) {
    let queue: Vec<serde_json::Value> = entries
        .iter()
        .map(|(url, ts, ip)| {
            json!({"url": url, "first_seen": ts.to_rfc3339(), "discovered_by_ip": ip})
        })
        .collect();
    std::fs::write(dir.join("queue.json"), serde_json::to_vec(&queue).unwrap()).unwrap();
}

pub fn read_json(dir: &Path, file: &str) -> serde_json::Value {
    serde_json::from_slice(&std::fs::read(dir.join(file)).unwrap()).unwrap()
}
