//! Single-source shortest paths.
//!
//! Dijkstra's algorithm over an [`EdgeWeightTable`]. The binary heap has no
//! decrease-key, so an improved station is pushed again and stale entries
//! are skipped when popped.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::trace;

use super::graph::EdgeWeightTable;
use crate::domain::StationId;

/// Queue entry ordered so the max-heap pops the smallest distance first.
///
/// Equal distances pop the smaller station id first.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    minutes: f64,
    station: StationId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .minutes
            .total_cmp(&self.minutes)
            .then_with(|| other.station.cmp(&self.station))
    }
}

/// Distances and predecessors from one source station.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: StationId,
    distances: HashMap<StationId, f64>,
    predecessors: HashMap<StationId, StationId>,
}

impl ShortestPaths {
    /// The station distances are measured from.
    pub fn source(&self) -> StationId {
        self.source
    }

    /// Shortest travel time to `station`, or infinity if unreachable.
    pub fn distance_to(&self, station: StationId) -> f64 {
        self.distances
            .get(&station)
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    /// The station visited just before `station` on its shortest path.
    ///
    /// `None` for the source and for unreachable stations.
    pub fn predecessor(&self, station: StationId) -> Option<StationId> {
        self.predecessors.get(&station).copied()
    }

    /// Returns true if a finite path to `station` was found.
    pub fn is_reachable(&self, station: StationId) -> bool {
        self.distance_to(station).is_finite()
    }
}

/// Runs Dijkstra from `source` over `stations`.
///
/// Neighbours are every station the table connects to the popped one.
/// When `target` is given the search stops once it is settled; its
/// distance and predecessor chain are final at that point.
pub fn shortest_paths(
    stations: &[StationId],
    weights: &EdgeWeightTable,
    source: StationId,
    target: Option<StationId>,
) -> ShortestPaths {
    let mut distances: HashMap<StationId, f64> =
        stations.iter().map(|&s| (s, f64::INFINITY)).collect();
    let mut predecessors = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(source, 0.0);
    queue.push(QueueEntry {
        minutes: 0.0,
        station: source,
    });

    let mut settled = 0usize;
    while let Some(QueueEntry { minutes, station }) = queue.pop() {
        let best = distances.get(&station).copied().unwrap_or(f64::INFINITY);
        if minutes > best {
            continue;
        }
        settled += 1;

        if target == Some(station) {
            break;
        }

        for neighbour in weights.neighbours(station) {
            let Some(edge) = weights.get(station, neighbour) else {
                continue;
            };
            let candidate = minutes + edge;
            let current = distances.get(&neighbour).copied().unwrap_or(f64::INFINITY);
            if candidate < current {
                distances.insert(neighbour, candidate);
                predecessors.insert(neighbour, station);
                queue.push(QueueEntry {
                    minutes: candidate,
                    station: neighbour,
                });
            }
        }
    }

    trace!(source = %source, settled, "shortest paths complete");

    ShortestPaths {
        source,
        distances,
        predecessors,
    }
}
