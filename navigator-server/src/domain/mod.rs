//! Domain types for the campus navigator.
//!
//! This module contains the network model the planner routes over. All
//! types enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod error;
mod geometry;
mod line;
mod network;
mod network_name;
mod speed;
mod station;

pub use error::NetworkError;
pub use geometry::Point;
pub use line::CartLine;
pub use network::{Network, NetworkBuilder};
pub use network_name::{InvalidNetworkName, NetworkName};
pub use speed::{DEFAULT_WALKING_METRES_PER_MINUTE, Speed};
pub use station::{DESTINATION_LABEL, START_LABEL, Station, StationId};
