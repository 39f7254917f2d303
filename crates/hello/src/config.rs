//! Hello server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `HELLO_HOST` - Bind address (default: 127.0.0.1)
//! - `HELLO_PORT` - Listen port (default: 1323)
//! - `HELLO_PUBLIC_DIR` - Static directory (default: public)
//! - `HELLO_INDEX_FILE` - Fallback document (default: `<public dir>/index.html`)

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Hello server configuration.
#[derive(Debug, Clone)]
pub struct HelloConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Served under `/public`; its `assets` subdirectory under `/assets`
    pub public_dir: PathBuf,
    /// Served for every other path
    pub index_file: PathBuf,
}

impl HelloConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the host or port cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("HELLO_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("HELLO_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("HELLO_PORT", "1323")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("HELLO_PORT".to_string(), e.to_string()))?;

        let public_dir = PathBuf::from(get_env_or_default("HELLO_PUBLIC_DIR", "public"));
        let index_file = resolve_index_file(&public_dir, std::env::var("HELLO_INDEX_FILE").ok());

        Ok(Self {
            host,
            port,
            public_dir,
            index_file,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// An explicit index path wins; otherwise the index sits in the public dir.
fn resolve_index_file(public_dir: &Path, explicit: Option<String>) -> PathBuf {
    explicit.map_or_else(|| public_dir.join("index.html"), PathBuf::from)
}
