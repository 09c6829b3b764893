//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Storage (at least one required)
//! - `QUORUM_DATA_DIR` - Directory for local JSON document storage
//! - `QUORUM_OBJECT_STORE_URL` - Base URL of an HTTP object store
//!
//! When both are set, the object store is the primary backend and the local
//! directory serves as the per-request fallback. Setting neither is a fatal
//! startup condition.
//!
//! ## Optional
//! - `QUORUM_HOST` - Bind address (default: 127.0.0.1)
//! - `QUORUM_PORT` - Listen port (default: 8080)
//! - `QUORUM_STATIC_ROOT` - Directory of prebuilt front-end assets

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("No storage target configured: set QUORUM_DATA_DIR or QUORUM_OBJECT_STORE_URL")]
    NoStorageTarget,
}

/// Where documents are persisted.
///
/// The variant is chosen once at startup from the environment; request
/// handlers never consult ambient state to decide where a document lives.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// Local filesystem only.
    Local {
        /// Directory holding one `<key>.json` file per collection.
        data_dir: PathBuf,
    },
    /// Remote HTTP object store only.
    Object {
        /// Base URL; documents live at `<base_url>/<key>.json`.
        base_url: String,
    },
    /// Remote object store with per-request filesystem fallback.
    Fallback {
        /// Primary object store base URL.
        base_url: String,
        /// Secondary local directory used when the primary fails.
        data_dir: PathBuf,
    },
}

impl StorageConfig {
    /// Short mode name surfaced by the health endpoint.
    #[must_use]
    pub const fn mode_name(&self) -> &'static str {
        match self {
            Self::Local { .. } => "local",
            Self::Object { .. } => "object",
            Self::Fallback { .. } => "fallback",
        }
    }
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Document storage backend selection
    pub storage: StorageConfig,
    /// Root directory of the prebuilt web front-end, if served
    pub static_root: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the host or port cannot be parsed, or if no
    /// storage target is configured.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("QUORUM_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("QUORUM_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("QUORUM_PORT", "8080")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("QUORUM_PORT".to_string(), e.to_string()))?;

        let storage = storage_from_env()?;
        let static_root = get_optional_env("QUORUM_STATIC_ROOT").map(PathBuf::from);

        Ok(Self {
            host,
            port,
            storage,
            static_root,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Derive the storage backend selection from the environment.
fn storage_from_env() -> Result<StorageConfig, ConfigError> {
    let data_dir = get_optional_env("QUORUM_DATA_DIR").map(PathBuf::from);
    let base_url = get_optional_env("QUORUM_OBJECT_STORE_URL");

    match (base_url, data_dir) {
        (Some(base_url), Some(data_dir)) => Ok(StorageConfig::Fallback { base_url, data_dir }),
        (Some(base_url), None) => Ok(StorageConfig::Object { base_url }),
        (None, Some(data_dir)) => Ok(StorageConfig::Local { data_dir }),
        (None, None) => Err(ConfigError::NoStorageTarget),
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
