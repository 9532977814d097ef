//! Admin dashboard route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    admin_login_handler, admin_page_handler, approve_handler, kick_handler, logout_handler,
    reject_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Dashboard routes. Each handler authenticates on its own: the password
/// form field or the session cookie is checked per request.
///
/// # Endpoints
///
/// - `GET  /`        - Dashboard (session) or login page
/// - `POST /`        - Login with password, then dashboard
/// - `POST /approve` - Approve a queued clone
/// - `POST /reject`  - Reject a queued clone
/// - `POST /kick`    - Remove an approved clone
/// - `POST /logout`  - Clear the session cookie
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(admin_page_handler).post(admin_login_handler))
        .route("/approve", post(approve_handler))
        .route("/reject", post(reject_handler))
        .route("/kick", post(kick_handler))
        .route("/logout", post(logout_handler))
}
