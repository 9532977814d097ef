//! Admin dashboard: login and overview.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::{info, warn};

use super::login::LoginTemplate;
use crate::domain::entities::{AdminView, ListedClone};
use crate::state::AppState;
use crate::web::error::PlainError;
use crate::web::extract::SessionToken;

/// A queue entry formatted for display.
pub struct QueueRow {
    pub url: String,
    pub first_seen: String,
    pub ip: String,
}

/// Template for the dashboard.
///
/// Renders `templates/admin.html` with the review queue and the approved
/// clones ranked by request count.
#[derive(Template, WebTemplate)]
#[template(path = "admin.html")]
pub struct DashboardTemplate {
    pub queue: Vec<QueueRow>,
    pub approved: Vec<ListedClone>,
}

impl From<AdminView> for DashboardTemplate {
    fn from(view: AdminView) -> Self {
        let approved = view.ranked_approved();
        let queue = view
            .queue
            .into_iter()
            .map(|entry| QueueRow {
                url: entry.url,
                first_seen: entry.first_seen.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
                ip: entry.discovered_by_ip,
            })
            .collect();

        Self { queue, approved }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub password: String,
}

/// Shows the dashboard for a valid session, otherwise the login page.
///
/// # Endpoint
///
/// `GET /admin`
pub async fn admin_page_handler(
    State(state): State<AppState>,
    SessionToken(session): SessionToken,
) -> Result<Response, PlainError> {
    let authenticated = session
        .as_deref()
        .is_some_and(|token| state.auth_service.verify_session(token, Utc::now()));

    if !authenticated {
        return Ok(LoginTemplate { failed: false }.into_response());
    }

    let view = state.registry.admin_view().await?;
    Ok(DashboardTemplate::from(view).into_response())
}

/// Logs in with the admin password.
///
/// # Endpoint
///
/// `POST /admin` (form field `password`)
///
/// A correct password renders the dashboard and sets the session cookie.
/// A wrong password renders the login page with a notice. With no password
/// but a valid session cookie the dashboard is rendered.
pub async fn admin_login_handler(
    State(state): State<AppState>,
    SessionToken(session): SessionToken,
    Form(form): Form<LoginForm>,
) -> Result<Response, PlainError> {
    let now = Utc::now();
    let auth = &state.auth_service;

    if auth.authenticate(&form.password) {
        let token = auth.issue_session(now)?;
        let view = state.registry.admin_view().await?;
        info!("admin logged in");

        return Ok((
            [(SET_COOKIE, auth.session_cookie(&token))],
            DashboardTemplate::from(view),
        )
            .into_response());
    }

    if form.password.is_empty() {
        if session
            .as_deref()
            .is_some_and(|token| auth.verify_session(token, now))
        {
            let view = state.registry.admin_view().await?;
            return Ok(DashboardTemplate::from(view).into_response());
        }

        return Ok(LoginTemplate { failed: false }.into_response());
    }

    warn!("admin login rejected");
    Ok(LoginTemplate { failed: true }.into_response())
}

/// Clears the session cookie.
///
/// # Endpoint
///
/// `POST /admin/logout`
pub async fn logout_handler(State(state): State<AppState>) -> Response {
    (
        [(SET_COOKIE, state.auth_service.clear_session_cookie())],
        LoginTemplate { failed: false },
    )
        .into_response()
}
