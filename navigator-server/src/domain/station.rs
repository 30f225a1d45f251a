//! Station types.

use std::fmt;

use super::Point;

/// Label given to the station a route starts from.
pub const START_LABEL: &str = "Starting Point";

/// Label given to the station a route ends at.
pub const DESTINATION_LABEL: &str = "Final Destination";

/// Identity of a station within a [`Network`](super::Network).
///
/// Two stations at the same coordinates are still different stations;
/// identity is this index, never the location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(pub usize);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named location in the network.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Where the station is.
    pub location: Point,
    /// Human-readable name, used in directions.
    pub label: String,
}

impl Station {
    /// Creates a station with an arbitrary label.
    pub fn new(location: Point, label: impl Into<String>) -> Self {
        Self {
            location,
            label: label.into(),
        }
    }

    /// The conventional start station.
    pub fn start(location: Point) -> Self {
        Self::new(location, START_LABEL)
    }

    /// The conventional destination station.
    pub fn destination(location: Point) -> Self {
        Self::new(location, DESTINATION_LABEL)
    }

    /// A stop on a cart line, labelled `<line> Station <n>` with `n` counted from 1.
    pub fn line_stop(line_name: &str, position: usize, location: Point) -> Self {
        Self::new(location, format!("{line_name} Station {position}"))
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
