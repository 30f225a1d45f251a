//! Planner configuration.

/// Configuration parameters for route planning.
#[derive(Debug, Clone, Default)]
pub struct PlannerConfig {
    /// Stop the shortest-path search once the destination is settled.
    /// The resulting itinerary is the same either way.
    pub stop_at_destination: bool,

    /// Fail with an error instead of returning an empty itinerary when the
    /// destination cannot be reached.
    pub require_reachable: bool,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(stop_at_destination: bool, require_reachable: bool) -> Self {
        Self {
            stop_at_destination,
            require_reachable,
        }
    }

    /// Early exit on, unreachable destinations reported as errors.
    pub fn strict() -> Self {
        Self::new(true, true)
    }
}
