//! Application layer services implementing business logic.
//!
//! Services consume repository traits and expose the operations called by
//! HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::registry_service::RegistryService`] - Clone lifecycle and counters
//! - [`services::auth_service::AuthService`] - Admin password and session checks

pub mod services;
