//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `TIENDA_API_URL` - Base URL of the storefront REST API
//!   (e.g. `https://api.tienda.example.com/api/v1/`)
//!
//! ## Optional
//! - `TIENDA_HTTP_TIMEOUT` - Request timeout in seconds (default: 30)
//! - `TIENDA_SESSION_FILE` - Path where the credential token and cached
//!   identity are persisted (default: `.tienda/session.json`)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SESSION_FILE: &str = ".tienda/session.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the remote REST API.
    pub api_url: Url,
    /// Timeout applied to every request.
    pub timeout: Duration,
    /// Where the session (token + identity projection) is persisted.
    pub session_file: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = get_required_env("TIENDA_API_URL")?;
        let api_url = Url::parse(&api_url)
            .map_err(|e| ConfigError::InvalidEnvVar("TIENDA_API_URL".to_owned(), e.to_string()))?;

        let timeout_secs = get_env_or_default("TIENDA_HTTP_TIMEOUT", "30")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("TIENDA_HTTP_TIMEOUT".to_owned(), e.to_string())
            })?;

        let session_file =
            PathBuf::from(get_env_or_default("TIENDA_SESSION_FILE", DEFAULT_SESSION_FILE));

        Ok(Self {
            api_url,
            timeout: Duration::from_secs(timeout_secs),
            session_file,
        })
    }

    /// Build a configuration directly, applying the default timeout.
    ///
    /// Useful for tests and embedders that do not read the environment.
    #[must_use]
    pub fn new(api_url: Url, session_file: PathBuf) -> Self {
        Self {
            api_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            session_file,
        }
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_owned()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
