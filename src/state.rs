//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, RegistryService};
use crate::config::Config;
use crate::infrastructure::persistence::JsonCloneRepository;

/// Registry service backed by the JSON file store.
pub type Registry = RegistryService<JsonCloneRepository>;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(registry: Arc<Registry>, auth_service: Arc<AuthService>) -> Self {
        Self {
            registry,
            auth_service,
        }
    }

    /// Wires the store, registry and auth service from configuration.
    pub fn from_config(config: &Config) -> Self {
        let repository = Arc::new(JsonCloneRepository::new(&config.data_dir));
        let registry = Arc::new(RegistryService::new(
            repository,
            config.original_site_url.clone(),
        ));
        let auth_service = Arc::new(AuthService::new(
            &config.admin_password,
            config.session_ttl_seconds,
        ));

        Self::new(registry, auth_service)
    }
}
