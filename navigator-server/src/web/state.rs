//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::NetworkStore;
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Stored network descriptions, parsed on demand
    pub networks: Arc<NetworkStore>,

    /// Route planner configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(networks: NetworkStore, config: PlannerConfig) -> Self {
        Self {
            networks: Arc::new(networks),
            config: Arc::new(config),
        }
    }
}
