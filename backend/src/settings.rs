//! Service settings loaded via OrthoConfig.
//!
//! Values come from CLI flags and `TRAILERS_*` environment variables. Unset
//! values fall back to the defaults below.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Errors raised while resolving settings into runtime values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {address}: {message}")]
    BindAddress { address: String, message: String },
}

/// Runtime configuration for the trailer service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TRAILERS")]
pub struct ServiceSettings {
    /// Interface the HTTP listener binds to.
    pub bind_host: Option<String>,
    /// TCP port for the HTTP listener.
    pub port: Option<u16>,
    /// PostgreSQL URL; the in-memory repository is used when absent.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Apply embedded migrations before serving.
    #[ortho_config(default = false)]
    pub run_migrations: bool,
}

impl ServiceSettings {
    pub fn bind_host(&self) -> &str {
        self.bind_host
            .as_deref()
            .filter(|host| !host.trim().is_empty())
            .unwrap_or(DEFAULT_BIND_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }

    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// Socket address assembled from host and port.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BindAddress`] when the host is not an IP
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let address = format!("{}:{}", self.bind_host(), self.port());
        address
            .parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::BindAddress {
                message: err.to_string(),
                address,
            })
    }
}
