//! HTTP request handlers for API endpoints.

pub mod clones;
pub mod health;
pub mod register;

pub use clones::clones_handler;
pub use health::health_handler;
pub use register::register_handler;
