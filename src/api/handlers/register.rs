//! Handler for clone self-registration.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::register::{RegisterRequest, RegisterResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::VisitorIp;

/// Records a clone reporting itself.
///
/// # Endpoint
///
/// `POST /api/register`
///
/// # Request Body
///
/// ```json
/// { "name": "https://clone.example.org" }
/// ```
///
/// # Response
///
/// - `{"status": "approved", "requests": N}` - approved clone, counter incremented
/// - `{"status": "pending"}` - already waiting for review
/// - `{"status": "queued"}` - first sighting, added to the review queue
///
/// The visitor address (from proxy headers or the socket peer) is stored
/// with new queue entries.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON or `name` is missing,
/// empty or too long. Returns 500 if the store fails.
pub async fn register_handler(
    State(state): State<AppState>,
    VisitorIp(visitor_ip): VisitorIp,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<RegisterResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Missing name field",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    payload.validate()?;

    let name = payload
        .name
        .ok_or_else(|| AppError::bad_request("Missing name field", json!({ "field": "name" })))?;

    let outcome = state.registry.register(&name, &visitor_ip).await?;

    Ok(Json(outcome.into()))
}
