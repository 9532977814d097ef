//! Application error type and its HTTP mapping.
//!
//! Every fallible operation in the service layer returns [`AppError`].
//! JSON endpoints render it through [`IntoResponse`]; the admin dashboard
//! renders it as plain text via [`AppError::into_plain_response`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use validator::ValidationErrors;

use crate::infrastructure::persistence::StoreError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned by JSON endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// A required field is missing or malformed.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Admin credentials are missing or wrong.
    #[error("{message}")]
    Unauthorized { message: String, details: Value },

    /// The operation is never allowed, e.g. kicking the original site.
    #[error("{message}")]
    Forbidden { message: String, details: Value },

    /// Storage or runtime failure.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }

    pub fn forbidden(message: impl Into<String>, details: Value) -> Self {
        Self::Forbidden {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status for this error.
    ///
    /// `Forbidden` maps to `400 Bad Request`: the admin UI treats a refused
    /// operation as a bad request rather than an authorization failure.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::Forbidden { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::Unauthorized { .. } => "unauthorized",
            Self::Forbidden { .. } => "forbidden_operation",
            Self::Internal { .. } => "internal_error",
        }
    }

    /// Converts the error into its JSON payload, consuming it.
    pub fn to_error_info(self) -> ErrorInfo {
        let code = self.code();
        let (message, details) = match self {
            Self::Validation { message, details }
            | Self::Unauthorized { message, details }
            | Self::Forbidden { message, details }
            | Self::Internal { message, details } => (message, details),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }

    /// Renders the error as a `text/plain` response for HTML form endpoints.
    pub fn into_plain_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let fields: Vec<&str> = field_errors.keys().map(|k| k.as_ref()).collect();

        AppError::bad_request("Validation failed", json!({ "fields": fields }))
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        tracing::error!(error = %e, "store operation failed");

        AppError::internal("Storage error", json!({ "collection": e.collection() }))
    }
}
