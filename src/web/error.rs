//! Error rendering for HTML form endpoints.

use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Wraps [`AppError`] so dashboard endpoints answer with a plain-text body
/// (`Unauthorized`, `Cannot kick original site`, ...) instead of JSON.
#[derive(Debug)]
pub struct PlainError(pub AppError);

impl From<AppError> for PlainError {
    fn from(e: AppError) -> Self {
        Self(e)
    }
}

impl IntoResponse for PlainError {
    fn into_response(self) -> Response {
        self.0.into_plain_response()
    }
}
