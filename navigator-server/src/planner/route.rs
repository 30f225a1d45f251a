//! Route planning over a campus network.
//!
//! Runs the whole query: build the routing graph, run shortest paths from
//! the start, reconstruct the path to the destination and turn it into an
//! itinerary.

use tracing::debug;

use crate::domain::{Network, StationId};

use super::config::PlannerConfig;
use super::dijkstra::{ShortestPaths, shortest_paths};
use super::graph::RoutingGraph;
use super::itinerary::{Itinerary, build_itinerary, reconstruct_path};

/// Error from route planning.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// The destination has no path from the start
    #[error("destination {destination} is unreachable from {start}")]
    Unreachable {
        start: String,
        destination: String,
    },

    /// A reconstructed hop has no travel time
    #[error("no travel time between stations {from} and {to}")]
    MissingEdge { from: StationId, to: StationId },
}

/// Result of planning a route.
#[derive(Debug, Clone)]
pub struct RouteResult {
    /// The fastest itinerary; empty when start and destination coincide or
    /// the destination is unreachable.
    pub itinerary: Itinerary,

    /// Shortest travel time to the destination as found by the search.
    /// Infinite when unreachable.
    pub distance_minutes: f64,
}

/// Route planner.
///
/// Holds no state between queries; every call to [`Planner::plan`] builds
/// its own graph and search maps.
pub struct Planner<'a> {
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(config: &'a PlannerConfig) -> Self {
        Self { config }
    }

    /// Find the fastest route from the network's start to its destination.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Unreachable`] only when
    /// [`PlannerConfig::require_reachable`] is set. Otherwise an unreachable
    /// destination gives an empty itinerary.
    pub fn plan(&self, network: &Network) -> Result<RouteResult, PlanError> {
        let graph = RoutingGraph::build(network);
        let target = self
            .config
            .stop_at_destination
            .then_some(network.destination());
        let paths = shortest_paths(
            &graph.stations,
            &graph.weights,
            network.start(),
            target,
        );

        self.route_from(network, &graph, &paths)
    }

    /// Turns finished search results into a route, applying the
    /// unreachable-destination policy.
    pub(super) fn route_from(
        &self,
        network: &Network,
        graph: &RoutingGraph,
        paths: &ShortestPaths,
    ) -> Result<RouteResult, PlanError> {
        let start = network.start();
        let destination = network.destination();

        let distance_minutes = paths.distance_to(destination);
        if !paths.is_reachable(destination) {
            debug!(
                start = network.label(start),
                destination = network.label(destination),
                "destination unreachable"
            );
            if self.config.require_reachable {
                return Err(PlanError::Unreachable {
                    start: network.label(start).to_string(),
                    destination: network.label(destination).to_string(),
                });
            }
        }

        let path = reconstruct_path(paths, destination);
        let itinerary = build_itinerary(network, graph, &path)?;

        debug!(
            hops = itinerary.len(),
            cart_hops = itinerary.cart_hops(),
            minutes = itinerary.total_minutes(),
            "route planned"
        );

        Ok(RouteResult {
            itinerary,
            distance_minutes,
        })
    }
}
