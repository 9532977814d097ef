//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. A `.env` file is honoured when present (loaded in `main.rs`).
//!
//! ```bash
//! export ADMIN_PASSWORD="a-long-random-secret"
//! export ORIGINAL_SITE_URL="https://original.example.com"
//! export DATA_DIR="/var/lib/clone-registry"
//! ```
//!
//! ## Required Variables
//!
//! - `ADMIN_PASSWORD` - Shared secret for the admin dashboard (must not be empty)
//!
//! ## Optional Variables
//!
//! - `ORIGINAL_SITE_URL` - Canonical site, always listed first and never kickable
//! - `DATA_DIR` - Directory holding the JSON documents (default: `data`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:5000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SESSION_TTL_SECONDS` - Admin session lifetime (default: 3600)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

const MIN_SESSION_TTL: u64 = 60;
const MAX_SESSION_TTL: u64 = 7 * 24 * 3600;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub data_dir: PathBuf,
    /// Admin dashboard secret. Never logged.
    pub admin_password: String,
    /// Canonical site URL; `None` when unset or empty.
    pub original_site_url: Option<String>,
    pub log_level: String,
    pub log_format: String,
    pub session_ttl_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `ADMIN_PASSWORD` is not set or
    /// `SESSION_TTL_SECONDS` is not a number.
    pub fn from_env() -> Result<Self> {
        let admin_password =
            env::var("ADMIN_PASSWORD").context("ADMIN_PASSWORD must be set")?;

        let RegistrySettings {
            data_dir,
            original_site_url,
        } = RegistrySettings::from_env();

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let session_ttl_seconds = match env::var("SESSION_TTL_SECONDS") {
            Ok(v) => v.trim().parse().with_context(|| {
                format!("SESSION_TTL_SECONDS must be a number of seconds, got '{v}'")
            })?,
            Err(_) => 3600,
        };

        Ok(Self {
            listen_addr,
            data_dir,
            admin_password,
            original_site_url,
            log_level,
            log_format,
            session_ttl_seconds,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `admin_password` is empty
    /// - `original_site_url` is not an absolute URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `session_ttl_seconds` is outside 60..=604800
    pub fn validate(&self) -> Result<()> {
        if self.admin_password.is_empty() {
            anyhow::bail!("ADMIN_PASSWORD must not be empty");
        }

        if let Some(ref original) = self.original_site_url {
            url::Url::parse(original).with_context(|| {
                format!("ORIGINAL_SITE_URL must be an absolute URL, got '{original}'")
            })?;
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !(MIN_SESSION_TTL..=MAX_SESSION_TTL).contains(&self.session_ttl_seconds) {
            anyhow::bail!(
                "SESSION_TTL_SECONDS must be between {} and {}, got {}",
                MIN_SESSION_TTL,
                MAX_SESSION_TTL,
                self.session_ttl_seconds
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Data directory: {}", self.data_dir.display());

        match self.original_site_url {
            Some(ref url) => tracing::info!("  Original site: {}", url),
            None => tracing::warn!("  Original site: not set (ORIGINAL_SITE_URL)"),
        }

        tracing::info!("  Admin password: set");
        tracing::info!("  Session TTL: {}s", self.session_ttl_seconds);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Store location and original site, shared by the server and the
/// `registry-admin` CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySettings {
    pub data_dir: PathBuf,
    /// `None` when `ORIGINAL_SITE_URL` is unset or blank.
    pub original_site_url: Option<String>,
}

impl RegistrySettings {
    /// Reads `DATA_DIR` (default `data`) and `ORIGINAL_SITE_URL`.
    pub fn from_env() -> Self {
        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        let original_site_url = env::var("ORIGINAL_SITE_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        Self {
            data_dir,
            original_site_url,
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
/// An empty admin password is fatal: the process must not start.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
