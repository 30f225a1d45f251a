//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::cache::CacheConfig;
use crate::planner::PlannerConfig;

/// Listen address when `NAVIGATOR_ADDR` is unset.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Network directory when `NAVIGATOR_NETWORK_DIR` is unset.
pub const DEFAULT_NETWORK_DIR: &str = "networks";

/// Errors reading the server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid NAVIGATOR_ADDR '{value}': {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("invalid {key} '{value}': expected true or false")]
    InvalidFlag { key: &'static str, value: String },
}

/// Everything the server needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Directory of `<name>.txt` network descriptions.
    pub network_dir: PathBuf,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,

    /// Parsed-network cache settings.
    pub cache: CacheConfig,

    /// Route planning settings.
    pub planner: PlannerConfig,
}

impl ServerConfig {
    /// Read configuration from environment variables.
    ///
    /// - `NAVIGATOR_ADDR` (default `127.0.0.1:3000`)
    /// - `NAVIGATOR_NETWORK_DIR` (default `networks`)
    /// - `NAVIGATOR_STATIC_DIR` (default `static`)
    /// - `NAVIGATOR_REQUIRE_REACHABLE` (default `false`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr_value = lookup("NAVIGATOR_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr_value
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                value: addr_value.clone(),
                source,
            })?;

        let network_dir = lookup("NAVIGATOR_NETWORK_DIR")
            .unwrap_or_else(|| DEFAULT_NETWORK_DIR.to_string())
            .into();
        let static_dir = lookup("NAVIGATOR_STATIC_DIR")
            .unwrap_or_else(|| "static".to_string())
            .into();

        let require_reachable = match lookup("NAVIGATOR_REQUIRE_REACHABLE").as_deref() {
            None | Some("false") | Some("0") => false,
            Some("true") | Some("1") => true,
            Some(other) => {
                return Err(ConfigError::InvalidFlag {
                    key: "NAVIGATOR_REQUIRE_REACHABLE",
                    value: other.to_string(),
                });
            }
        };

        Ok(Self {
            addr,
            network_dir,
            static_dir,
            cache: CacheConfig::default(),
            planner: PlannerConfig::new(false, require_reachable),
        })
    }
}
