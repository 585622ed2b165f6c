//! Server configuration
//!
//! Read once from the environment at startup. Defaults live in
//! utils/constants.rs.

use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

use crate::models::errors::{AppError, AppResult};
use crate::utils::constants::{
    DEFAULT_HOST, DEFAULT_PORT, DEFAULT_STATIC_DIR, DEFAULT_TEMPLATES_DIR, DEFAULT_TITLE,
    ENV_HOST, ENV_PORT, ENV_STATIC_DIR, ENV_SURVEY_PORT, ENV_TEMPLATES_DIR, ENV_TITLE,
};

/// Runtime configuration for the API server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Served under `/static`
    pub static_dir: PathBuf,
    /// Holds the landing page template
    pub templates_dir: PathBuf,
    /// Substituted into the landing page
    pub title: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            templates_dir: PathBuf::from(DEFAULT_TEMPLATES_DIR),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl ServerConfig {
    /// Load from the process environment
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup. Unset variables fall back to defaults;
    /// a port that is set but unparsable is an error.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup(ENV_PORT).or_else(|| lookup(ENV_SURVEY_PORT)) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                AppError::invalid_config(format!("Invalid port '{}': {}", raw, e))
            })?,
            None => defaults.port,
        };

        let config = Self {
            host: lookup(ENV_HOST).unwrap_or(defaults.host),
            port,
            static_dir: lookup(ENV_STATIC_DIR)
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            templates_dir: lookup(ENV_TEMPLATES_DIR)
                .map(PathBuf::from)
                .unwrap_or(defaults.templates_dir),
            title: lookup(ENV_TITLE).unwrap_or(defaults.title),
        };

        info!(
            host = %config.host,
            port = config.port,
            static_dir = %config.static_dir.display(),
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Address to bind the listener to
    pub fn socket_addr(&self) -> AppResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::invalid_config(format!("Invalid listen address: {}", e)))
    }
}
