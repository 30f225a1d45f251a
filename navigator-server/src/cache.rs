//! Caching store for network descriptions.
//!
//! Networks live as `<name>.txt` files in one directory. Parsed networks
//! are cached so repeated route queries skip the disk and the parser. A
//! TTL bounds how long an edited file can be served stale.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::{Network, NetworkName};
use crate::loader::{LoadError, parse_network};

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 100,
        }
    }
}

/// Errors from the network store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No description file for this name
    #[error("network '{0}' not found")]
    NotFound(NetworkName),

    /// The description file exists but could not be loaded
    #[error("network '{name}': {source}")]
    Load {
        name: NetworkName,
        #[source]
        source: LoadError,
    },

    /// The network directory could not be listed
    #[error("cannot list networks in {}: {source}", dir.display())]
    List {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Network descriptions on disk, with a cache of parsed networks.
pub struct NetworkStore {
    dir: PathBuf,
    networks: MokaCache<NetworkName, Arc<Network>>,
}

impl NetworkStore {
    /// Create a store over `dir` with the given cache configuration.
    pub fn new(dir: impl Into<PathBuf>, config: &CacheConfig) -> Self {
        let networks = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            dir: dir.into(),
            networks,
        }
    }

    /// The directory holding the description files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get a network by name, loading it on a cache miss.
    pub async fn get(&self, name: &NetworkName) -> Result<Arc<Network>, StoreError> {
        // Try cache first
        if let Some(cached) = self.networks.get(name).await {
            return Ok(cached);
        }

        let path = self.dir.join(name.file_name());
        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(name.clone()));
            }
            Err(source) => {
                return Err(StoreError::Load {
                    name: name.clone(),
                    source: LoadError::Io { path, source },
                });
            }
        };

        let network = parse_network(&text).map_err(|source| StoreError::Load {
            name: name.clone(),
            source,
        })?;
        let entry = Arc::new(network);

        debug!(network = %name, "loaded network into cache");
        self.networks.insert(name.clone(), entry.clone()).await;

        Ok(entry)
    }

    /// Names of every description file in the directory, sorted.
    ///
    /// Files whose stem is not a valid network name are ignored.
    pub async fn names(&self) -> Result<Vec<NetworkName>, StoreError> {
        let list_error = |source: std::io::Error| StoreError::List {
            dir: self.dir.clone(),
            source,
        };

        let mut entries = tokio::fs::read_dir(&self.dir).await.map_err(list_error)?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(list_error)? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("txt") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if let Ok(name) = NetworkName::parse(stem) {
                names.push(name);
            }
        }

        names.sort();
        Ok(names)
    }

    /// Number of cached networks (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.networks.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.networks.invalidate_all();
    }
}
