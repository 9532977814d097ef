//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `POST /api/register`  - Clone self-registration (public, CORS)
//! - `GET  /api/clones`    - Approved clone list (public, CORS)
//! - `GET  /health`        - Store health check (public)
//! - `/admin/*`            - Dashboard (password or session cookie)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin on `/api/*`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routed application without path normalization.
///
/// Integration tests drive this directly.
pub fn build_router(state: AppState) -> Router {
    let api_router = api::routes::public_routes().layer(cors::layer());

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .nest("/admin", web::routes::admin_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/admin/` and `/admin`
/// reach the same handler.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
