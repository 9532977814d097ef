//! Handler for the public approved-clone list.

use axum::{Json, extract::State};

use crate::api::dto::clones::{CloneItem, ClonesResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists approved clones with their request counts.
///
/// # Endpoint
///
/// `GET /api/clones`
///
/// # Response
///
/// ```json
/// {
///   "clones": [
///     { "url": "https://original.example.com", "requests": 120, "is_original": true },
///     { "url": "https://clone.example.org", "requests": 7, "is_original": false }
///   ]
/// }
/// ```
///
/// The original site (when configured) is always first; the rest follow
/// approval order.
pub async fn clones_handler(
    State(state): State<AppState>,
) -> Result<Json<ClonesResponse>, AppError> {
    let clones = state
        .registry
        .list_approved()
        .await?
        .into_iter()
        .map(CloneItem::from)
        .collect();

    Ok(Json(ClonesResponse { clones }))
}
