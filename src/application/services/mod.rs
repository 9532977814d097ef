//! Business logic services for the application layer.

pub mod auth_service;
pub mod registry_service;

pub use auth_service::AuthService;
pub use registry_service::RegistryService;
