//! Domain error types.
//!
//! These errors represent networks that cannot be routed over. They are
//! raised when a [`Network`](super::Network) is built, so the planner can
//! trust every network it receives.

use super::StationId;

/// Validation failures when building a network.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetworkError {
    /// No start station was chosen
    #[error("network has no start station")]
    MissingStart,

    /// No destination station was chosen
    #[error("network has no destination station")]
    MissingDestination,

    /// A line or endpoint refers to a station that was never added
    #[error("station {0} does not belong to this network")]
    UnknownStation(StationId),

    /// A station lies at an infinite or NaN coordinate
    #[error("station {0} has a non-finite location")]
    NonFiniteLocation(StationId),

    /// A speed is zero, negative or not a number
    #[error("{mode} speed must be a positive number, got {value}")]
    InvalidSpeed { mode: &'static str, value: f64 },
}
