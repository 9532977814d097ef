//! Login page.

use askama::Template;
use askama_web::WebTemplate;

/// Template for the login page.
///
/// `failed` shows the "incorrect password" notice after a rejected attempt.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub failed: bool,
}
