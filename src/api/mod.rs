//! JSON API layer used by clone sites.
//!
//! # Modules
//!
//! - [`dto`] - Request/response schemas
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - CORS and request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
