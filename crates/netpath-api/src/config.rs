//! # Service Configuration
//!
//! Environment-driven settings for the query service.
//!
//! | Variable          | Default                  |
//! |-------------------|--------------------------|
//! | `NETPATH_HOST`    | `0.0.0.0`                |
//! | `NETPATH_PORT`    | `5000`                   |
//! | `NETPATH_DATA`    | `Updated_DSADataset.csv` |
//! | `NETPATH_GATEWAY` | `1.99.185.142`           |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use netpath_core::NodeId;
use thiserror::Error;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default edge-feed path, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "Updated_DSADataset.csv";

/// Default gateway node every path query is routed to.
pub const DEFAULT_GATEWAY: &str = "1.99.185.142";

/// Errors building configuration from the environment.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("NETPATH_HOST is not a valid IP address: {0:?}")]
    InvalidHost(String),

    #[error("NETPATH_PORT is not a valid port: {0:?}")]
    InvalidPort(String),

    #[error("NETPATH_GATEWAY must not be empty")]
    EmptyGateway,
}

/// Query service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address to bind the HTTP server to.
    pub host: IpAddr,
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Path of the edge feed loaded at startup.
    pub data_path: PathBuf,
    /// Fixed destination of every path query.
    pub gateway: NodeId,
}

impl AppConfig {
    /// Build configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Unset and blank variables fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = match var("NETPATH_HOST") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost(raw))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match var("NETPATH_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let data_path = var("NETPATH_DATA")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let gateway = match lookup("NETPATH_GATEWAY") {
            Some(raw) => {
                let id = NodeId::new(raw);
                if id.is_empty() {
                    return Err(ConfigError::EmptyGateway);
                }
                id
            }
            None => NodeId::new(DEFAULT_GATEWAY),
        };

        Ok(Self {
            host,
            port,
            data_path,
            gateway,
        })
    }

    /// Socket address the server binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            gateway: NodeId::new(DEFAULT_GATEWAY),
        }
    }
}
