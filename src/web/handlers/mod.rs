//! HTML handlers for the admin dashboard.

mod actions;
mod dashboard;
mod login;

pub use actions::{ActionForm, approve_handler, kick_handler, reject_handler};
pub use dashboard::{
    DashboardTemplate, LoginForm, QueueRow, admin_login_handler, admin_page_handler,
    logout_handler,
};
pub use login::LoginTemplate;
