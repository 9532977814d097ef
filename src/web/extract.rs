//! Request extractors for the dashboard.

use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;

use crate::application::services::auth_service::SESSION_COOKIE;
use crate::utils::cookies::find_cookie;

/// The raw admin session token from the `admin_session` cookie, if any.
///
/// Extraction never fails; validation happens in
/// [`crate::application::services::AuthService`].
#[derive(Debug, Clone, Default)]
pub struct SessionToken(pub Option<String>);

impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(SessionToken(find_cookie(&parts.headers, SESSION_COOKIE)))
    }
}
