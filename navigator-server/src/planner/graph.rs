//! Routing graph construction.
//!
//! Every pair of route stations is joined by a walking edge. Each pair of
//! consecutive cart-line stops then has its edge overwritten with the cart
//! time. The overwrite is unconditional: a cart hop that is slower than
//! walking still replaces the walking time.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::{debug, trace};

use crate::domain::{Network, StationId};

/// Order-independent key for a pair of stations.
///
/// The smaller id is always stored first, so `PairKey::new(a, b)` and
/// `PairKey::new(b, a)` are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey(StationId, StationId);

impl PairKey {
    /// Creates the normalised key for `a` and `b`.
    pub fn new(a: StationId, b: StationId) -> Self {
        if a <= b { PairKey(a, b) } else { PairKey(b, a) }
    }

    /// The two stations, smaller id first.
    pub fn stations(&self) -> (StationId, StationId) {
        (self.0, self.1)
    }
}

/// Travel time in minutes for each connected pair of stations.
///
/// Holds a single value per unordered pair. Inserting a pair that already
/// has a value replaces it.
#[derive(Debug, Clone, Default)]
pub struct EdgeWeightTable {
    minutes: HashMap<PairKey, f64>,
    adjacency: BTreeMap<StationId, BTreeSet<StationId>>,
}

impl EdgeWeightTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the travel time between `a` and `b`, returning the previous value.
    pub fn insert(&mut self, a: StationId, b: StationId, minutes: f64) -> Option<f64> {
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
        self.minutes.insert(PairKey::new(a, b), minutes)
    }

    /// Travel time between two stations, in either order.
    pub fn get(&self, a: StationId, b: StationId) -> Option<f64> {
        self.minutes.get(&PairKey::new(a, b)).copied()
    }

    /// Stations directly connected to `station`, in id order.
    pub fn neighbours(&self, station: StationId) -> impl Iterator<Item = StationId> + '_ {
        self.adjacency
            .get(&station)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Number of connected pairs.
    pub fn len(&self) -> usize {
        self.minutes.len()
    }

    /// Returns true if no pair is connected.
    pub fn is_empty(&self) -> bool {
        self.minutes.is_empty()
    }
}

/// Directional record of which hops are cart rides.
///
/// Each cart hop is stored in both directions. When two lines join the same
/// pair, the line added last wins.
#[derive(Debug, Clone, Default)]
pub struct TransitPairs {
    lines: HashMap<(StationId, StationId), String>,
}

impl TransitPairs {
    /// Creates an empty lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `a` and `b` are consecutive stops of `line`.
    pub fn record(&mut self, a: StationId, b: StationId, line: &str) {
        self.lines.insert((a, b), line.to_string());
        self.lines.insert((b, a), line.to_string());
    }

    /// The line riding directly from `from` to `to`, if any.
    pub fn line_between(&self, from: StationId, to: StationId) -> Option<&str> {
        self.lines.get(&(from, to)).map(String::as_str)
    }

    /// Returns true if the hop from `from` to `to` is a cart ride.
    pub fn is_transit(&self, from: StationId, to: StationId) -> bool {
        self.lines.contains_key(&(from, to))
    }

    /// Number of directed cart hops.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if there are no cart hops.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// The graph a single routing query runs over.
#[derive(Debug, Clone)]
pub struct RoutingGraph {
    /// Every station a route may visit.
    pub stations: Vec<StationId>,
    /// Travel time per connected pair.
    pub weights: EdgeWeightTable,
    /// Which hops are cart rides.
    pub transit: TransitPairs,
}

impl RoutingGraph {
    /// Derives the routing graph of a network.
    pub fn build(network: &Network) -> Self {
        let stations = network.route_stations();
        let mut weights = EdgeWeightTable::new();
        let mut transit = TransitPairs::new();

        let walking = network.walking_speed();
        for (i, &a) in stations.iter().enumerate() {
            for &b in &stations[i + 1..] {
                let metres = network.distance(a, b).unwrap_or_default();
                weights.insert(a, b, walking.minutes_for(metres));
            }
        }

        let cart = network.cart_speed();
        for line in network.lines() {
            for (a, b) in line.hops() {
                if a == b {
                    continue;
                }
                let metres = network.distance(a, b).unwrap_or_default();
                let minutes = cart.minutes_for(metres);
                if let Some(walk) = weights.insert(a, b, minutes) {
                    if walk < minutes {
                        trace!(
                            line = %line.name,
                            from = network.label(a),
                            to = network.label(b),
                            walk,
                            cart = minutes,
                            "cart hop slower than walking"
                        );
                    }
                }
                transit.record(a, b, &line.name);
            }
        }

        debug!(
            stations = stations.len(),
            edges = weights.len(),
            cart_hops = transit.len() / 2,
            "built routing graph"
        );

        RoutingGraph {
            stations,
            weights,
            transit,
        }
    }
}
