//! Admin actions on queued and approved clones.

use axum::{Form, extract::State};
use chrono::Utc;
use serde::Deserialize;

use super::dashboard::DashboardTemplate;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::error::PlainError;
use crate::web::extract::SessionToken;

/// Form posted by every admin action button.
///
/// `password` may be omitted when the request carries a valid session
/// cookie.
#[derive(Debug, Deserialize)]
pub struct ActionForm {
    #[serde(default)]
    pub url: String,
    pub password: Option<String>,
}

fn authorize(state: &AppState, form: &ActionForm, session: Option<&str>) -> Result<(), AppError> {
    state
        .auth_service
        .authorize(form.password.as_deref(), session, Utc::now())
}

/// Approves a queued clone.
///
/// # Endpoint
///
/// `POST /admin/approve`
///
/// # Errors
///
/// - 401 if neither password nor session is valid
/// - 400 if `url` is missing
pub async fn approve_handler(
    State(state): State<AppState>,
    SessionToken(session): SessionToken,
    Form(form): Form<ActionForm>,
) -> Result<DashboardTemplate, PlainError> {
    authorize(&state, &form, session.as_deref())?;

    let view = state.registry.approve(&form.url).await?;
    Ok(view.into())
}

/// Rejects a queued clone.
///
/// # Endpoint
///
/// `POST /admin/reject`
///
/// # Errors
///
/// - 401 if neither password nor session is valid
/// - 400 if `url` is missing
pub async fn reject_handler(
    State(state): State<AppState>,
    SessionToken(session): SessionToken,
    Form(form): Form<ActionForm>,
) -> Result<DashboardTemplate, PlainError> {
    authorize(&state, &form, session.as_deref())?;

    let view = state.registry.reject(&form.url).await?;
    Ok(view.into())
}

/// Removes an approved clone from the public list.
///
/// # Endpoint
///
/// `POST /admin/kick`
///
/// # Errors
///
/// - 401 if neither password nor session is valid
/// - 400 if `url` is missing or is the original site
pub async fn kick_handler(
    State(state): State<AppState>,
    SessionToken(session): SessionToken,
    Form(form): Form<ActionForm>,
) -> Result<DashboardTemplate, PlainError> {
    authorize(&state, &form, session.as_deref())?;

    let view = state.registry.kick(&form.url).await?;
    Ok(view.into())
}
