//! Web dashboard layer for browser-based administration.
//!
//! Renders the review queue and approved clones with Askama templates and
//! accepts approve/reject/kick form posts.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering and form handlers
//! - [`extract`] - Session cookie extractor
//! - [`error`] - Plain-text error responses
//! - [`routes`] - Dashboard route configuration

pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
