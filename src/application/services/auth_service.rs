//! Admin authentication: shared-secret check and signed session tokens.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Name of the cookie carrying the admin session token.
pub const SESSION_COOKIE: &str = "admin_session";

const PASSWORD_TAG_KEY: &[u8] = b"clone-registry/admin-password";
const SESSION_KEY_KEY: &[u8] = b"clone-registry/session-key";

/// Random bytes in front of the expiry inside a session payload.
const NONCE_LEN: usize = 16;
const PAYLOAD_LEN: usize = NONCE_LEN + 8;

/// Service guarding the admin dashboard.
///
/// The configured password is never compared directly. Both sides are
/// reduced to HMAC-SHA256 tags and checked with [`Mac::verify_slice`], which
/// runs in constant time regardless of input length or content.
///
/// A successful login yields a session token:
///
/// ```text
/// base64url(nonce[16] || expires_at_unix_be[8]) "." base64url(hmac)
/// ```
///
/// The token key is derived from the password, so changing the password
/// invalidates every outstanding session. Nothing is stored server side.
pub struct AuthService {
    enabled: bool,
    password_tag: Vec<u8>,
    session_key: Vec<u8>,
    session_ttl_seconds: i64,
}

impl AuthService {
    /// Creates the service for `admin_password`.
    ///
    /// An empty password disables every login. Startup rejects an empty
    /// password before this is reached (see [`crate::config::Config::validate`]).
    pub fn new(admin_password: &str, session_ttl_seconds: u64) -> Self {
        Self {
            enabled: !admin_password.is_empty(),
            password_tag: mac(PASSWORD_TAG_KEY, admin_password.as_bytes()),
            session_key: mac(SESSION_KEY_KEY, admin_password.as_bytes()),
            session_ttl_seconds: i64::try_from(session_ttl_seconds).unwrap_or(i64::MAX),
        }
    }

    /// Checks a supplied password against the configured one.
    pub fn authenticate(&self, supplied: &str) -> bool {
        if !self.enabled {
            return false;
        }

        let mut mac = HmacSha256::new_from_slice(PASSWORD_TAG_KEY)
            .expect("HMAC accepts any key length");
        mac.update(supplied.as_bytes());
        mac.verify_slice(&self.password_tag).is_ok()
    }

    /// Issues a session token valid for the configured TTL from `now`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the OS random source fails.
    pub fn issue_session(&self, now: DateTime<Utc>) -> Result<String, AppError> {
        let mut payload = [0u8; PAYLOAD_LEN];
        getrandom::fill(&mut payload[..NONCE_LEN]).map_err(|e| {
            AppError::internal("Failed to generate session", json!({"reason": e.to_string()}))
        })?;

        let expires_at = now.timestamp().saturating_add(self.session_ttl_seconds);
        payload[NONCE_LEN..].copy_from_slice(&expires_at.to_be_bytes());

        let signature = mac(&self.session_key, &payload);

        Ok(format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(payload),
            URL_SAFE_NO_PAD.encode(signature)
        ))
    }

    /// Returns true if `token` was issued by this service and has not expired.
    pub fn verify_session(&self, token: &str, now: DateTime<Utc>) -> bool {
        if !self.enabled {
            return false;
        }

        let Some((payload, signature)) = token.split_once('.') else {
            return false;
        };
        let (Ok(payload), Ok(signature)) = (
            URL_SAFE_NO_PAD.decode(payload),
            URL_SAFE_NO_PAD.decode(signature),
        ) else {
            return false;
        };
        if payload.len() != PAYLOAD_LEN {
            return false;
        }

        let mut mac = HmacSha256::new_from_slice(&self.session_key)
            .expect("HMAC accepts any key length");
        mac.update(&payload);
        if mac.verify_slice(&signature).is_err() {
            return false;
        }

        let mut expiry = [0u8; 8];
        expiry.copy_from_slice(&payload[NONCE_LEN..]);

        now.timestamp() < i64::from_be_bytes(expiry)
    }

    /// Authorizes an admin request from a form password or a session token.
    ///
    /// Either credential is sufficient on its own.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if neither credential is valid.
    pub fn authorize(
        &self,
        password: Option<&str>,
        session: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let by_password = password.is_some_and(|p| self.authenticate(p));
        let by_session = session.is_some_and(|t| self.verify_session(t, now));

        if by_password || by_session {
            Ok(())
        } else {
            Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Invalid password or session"}),
            ))
        }
    }

    /// `Set-Cookie` value carrying a freshly issued token.
    pub fn session_cookie(&self, token: &str) -> String {
        format!(
            "{SESSION_COOKIE}={token}; Path=/admin; Max-Age={}; HttpOnly; SameSite=Strict",
            self.session_ttl_seconds
        )
    }

    /// `Set-Cookie` value that removes the session cookie.
    pub fn clear_session_cookie(&self) -> String {
        format!("{SESSION_COOKIE}=; Path=/admin; Max-Age=0; HttpOnly; SameSite=Strict")
    }
}

fn mac(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts any key length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}
