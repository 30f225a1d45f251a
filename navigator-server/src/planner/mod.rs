//! Fastest-route planner.
//!
//! This module implements the routing engine that answers:
//! "What is the quickest way from the start to the destination, walking
//! and riding carts?"
//!
//! Walking joins every pair of stations; cart lines join consecutive stops
//! and replace the walking time for those pairs. Dijkstra's algorithm finds
//! the fastest path, which is then split into walking and cart hops.

mod config;
mod dijkstra;
mod directions;
mod graph;
mod itinerary;
mod route;

#[cfg(test)]
mod planner_tests;

pub use config::PlannerConfig;
pub use dijkstra::{ShortestPaths, shortest_paths};
pub use directions::{Directions, format_minutes};
pub use graph::{EdgeWeightTable, PairKey, RoutingGraph, TransitPairs};
pub use itinerary::{Itinerary, RouteSegment, TravelMode, build_itinerary, reconstruct_path};
pub use route::{PlanError, Planner, RouteResult};
