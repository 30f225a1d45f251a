//! Cart lines.

use super::StationId;

/// A fixed cart route visiting its stops in order.
///
/// Only consecutive stops are connected by the cart; riding from the first
/// stop to the third means passing through the second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    /// Line name, e.g. "North Loop".
    pub name: String,
    /// Stops in travel order.
    pub stops: Vec<StationId>,
}

impl CartLine {
    /// Creates a line from its name and stops.
    pub fn new(name: impl Into<String>, stops: Vec<StationId>) -> Self {
        Self {
            name: name.into(),
            stops,
        }
    }

    /// Consecutive stop pairs, in line order.
    ///
    /// A line with fewer than two stops has no hops.
    pub fn hops(&self) -> impl Iterator<Item = (StationId, StationId)> + '_ {
        self.stops.windows(2).map(|w| (w[0], w[1]))
    }
}
