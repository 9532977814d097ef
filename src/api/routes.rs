//! Public API route configuration.

use crate::api::handlers::{clones_handler, register_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public API routes, called by clone sites.
///
/// # Endpoints
///
/// - `POST /register` - Clone self-registration
/// - `GET  /clones`   - Approved clones with request counts
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_handler))
        .route("/clones", get(clones_handler))
}
