//! # Clone Registry
//!
//! Tracks copies ("clones") of a website that announce themselves, queues
//! unknown ones for human review, and publishes the approved list with
//! per-clone request counts.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Clone entities and the repository trait
//! - **Application Layer** ([`application`]) - Registry rules and admin authentication
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON document store
//! - **API Layer** ([`api`]) - JSON endpoints used by clone sites
//! - **Web Layer** ([`web`]) - HTML dashboard for review and moderation
//!
//! ## Quick Start
//!
//! ```bash
//! export ADMIN_PASSWORD="a-long-random-secret"
//! export ORIGINAL_SITE_URL="https://original.example.com"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, RegistryService};
    pub use crate::domain::entities::{AdminView, ListedClone, QueueEntry, Registration};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::JsonCloneRepository;
    pub use crate::state::AppState;
}
