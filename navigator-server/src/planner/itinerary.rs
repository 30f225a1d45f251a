//! Itinerary types and path reconstruction.
//!
//! An [`Itinerary`] is the ordered list of hops from the start station to the
//! destination, each either a walk or a cart ride.

use std::fmt;

use super::dijkstra::ShortestPaths;
use super::graph::RoutingGraph;
use super::route::PlanError;
use crate::domain::{Network, StationId};

/// How a hop is travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TravelMode {
    /// On foot, straight line
    Walk,
    /// Riding a cart between consecutive stops of a line
    Cart,
}

impl TravelMode {
    /// Lowercase name, as used in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Walk => "walk",
            TravelMode::Cart => "cart",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One hop of an itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSegment {
    pub from: StationId,
    pub to: StationId,
    pub from_label: String,
    pub to_label: String,
    /// Travel time for this hop, in minutes
    pub duration_minutes: f64,
    pub mode: TravelMode,
    /// The line ridden, for cart hops
    pub line: Option<String>,
}

impl RouteSegment {
    /// Returns true if this hop is a cart ride.
    pub fn is_transit(&self) -> bool {
        self.mode == TravelMode::Cart
    }
}

/// The fastest route, as an ordered list of hops.
///
/// An empty itinerary means either that start and destination are the same
/// station, or that the destination could not be reached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Itinerary {
    segments: Vec<RouteSegment>,
}

impl Itinerary {
    /// Wraps segments that are already in travel order.
    pub fn new(segments: Vec<RouteSegment>) -> Self {
        Self { segments }
    }

    /// All hops in order.
    pub fn segments(&self) -> &[RouteSegment] {
        &self.segments
    }

    /// Returns true if there are no hops.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of hops.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Sum of hop durations, in minutes.
    pub fn total_minutes(&self) -> f64 {
        self.segments.iter().map(|s| s.duration_minutes).sum()
    }

    /// Total duration rounded to the nearest minute, halves rounding up.
    pub fn rounded_minutes(&self) -> i64 {
        (self.total_minutes() + 0.5).floor() as i64
    }

    /// Number of cart hops.
    pub fn cart_hops(&self) -> usize {
        self.segments.iter().filter(|s| s.is_transit()).count()
    }
}

/// Follows predecessors back from `destination`.
///
/// The returned path starts at the first station without a predecessor.
/// For an unreachable destination that is the destination itself, giving a
/// one-station path.
pub fn reconstruct_path(paths: &ShortestPaths, destination: StationId) -> Vec<StationId> {
    let mut path = vec![destination];
    let mut current = destination;
    while let Some(previous) = paths.predecessor(current) {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}

/// Turns a station path into hops.
///
/// # Errors
///
/// Returns [`PlanError::MissingEdge`] if two consecutive stations have no
/// travel time in the graph, which means `path` did not come from it.
pub fn build_itinerary(
    network: &Network,
    graph: &RoutingGraph,
    path: &[StationId],
) -> Result<Itinerary, PlanError> {
    let segments = path
        .windows(2)
        .map(|pair| -> Result<RouteSegment, PlanError> {
            let (from, to) = (pair[0], pair[1]);
            let duration_minutes = graph
                .weights
                .get(from, to)
                .ok_or(PlanError::MissingEdge { from, to })?;
            let line = graph.transit.line_between(from, to);
            let mode = if line.is_some() {
                TravelMode::Cart
            } else {
                TravelMode::Walk
            };

            Ok(RouteSegment {
                from,
                to,
                from_label: network.label(from).to_string(),
                to_label: network.label(to).to_string(),
                duration_minutes,
                mode,
                line: line.map(str::to_string),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Itinerary::new(segments))
}
