//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `STYLEFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STYLEFRONT_PORT` - Listen port (default: 5000)
//! - `CATALOG_URL` - Upstream product catalog base URL
//!   (default: <https://fakestoreapi.com>)
//! - `CATALOG_TIMEOUT_SECS` - Upstream request timeout (default: 10)
//! - `CORS_ALLOWED_ORIGINS` - Comma-separated allowed origins
//!   (default: the local dev frontend ports 3000-3002)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Stylefront server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Base URL of the upstream product catalog
    pub catalog_url: String,
    /// Timeout for upstream catalog requests
    pub catalog_timeout: Duration,
    /// Origins allowed by the CORS layer
    pub cors_allowed_origins: Vec<String>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STYLEFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("STYLEFRONT_HOST".to_owned(), e.to_string()))?;
        let port = get_env_or_default("STYLEFRONT_PORT", "5000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("STYLEFRONT_PORT".to_owned(), e.to_string()))?;
        let catalog_url = get_env_or_default("CATALOG_URL", "https://fakestoreapi.com");
        let timeout_secs = get_env_or_default("CATALOG_TIMEOUT_SECS", "10")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("CATALOG_TIMEOUT_SECS".to_owned(), e.to_string())
            })?;
        let cors_allowed_origins = get_optional_env("CORS_ALLOWED_ORIGINS").map_or_else(
            default_cors_origins,
            |v| {
                v.split(',')
                    .map(|s| s.trim().to_owned())
                    .filter(|s| !s.is_empty())
                    .collect()
            },
        );

        Ok(Self {
            host,
            port,
            catalog_url,
            catalog_timeout: Duration::from_secs(timeout_secs),
            cors_allowed_origins,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 5000,
            catalog_url: "https://fakestoreapi.com".to_owned(),
            catalog_timeout: Duration::from_secs(10),
            cors_allowed_origins: default_cors_origins(),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

/// The local dev frontend origins the original deployment served.
fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_owned(),
        "http://localhost:3001".to_owned(),
        "http://localhost:3002".to_owned(),
    ]
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
