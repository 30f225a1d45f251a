//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Network, NetworkError, Point, Speed, Station};
use crate::planner::{Directions, Itinerary, RouteSegment};

/// A point in a request body.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PointDto {
    pub x: f64,
    pub y: f64,
}

impl From<PointDto> for Point {
    fn from(p: PointDto) -> Self {
        Point::new(p.x, p.y)
    }
}

/// A cart line in a request body.
#[derive(Debug, Deserialize)]
pub struct LineDto {
    /// Line name
    pub name: String,

    /// Stops in travel order
    pub stops: Vec<PointDto>,
}

/// Request to plan a route over a network given inline.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Where the route starts
    pub start: PointDto,

    /// Where the route ends
    pub destination: PointDto,

    /// Cart speed in km/h
    pub cart_speed_kmh: f64,

    /// Walking speed in km/h (defaults to 10)
    pub walking_speed_kmh: Option<f64>,

    /// Cart lines, in order
    #[serde(default)]
    pub lines: Vec<LineDto>,
}

impl RouteRequest {
    /// Build the network described by this request.
    ///
    /// Stations get the same labels as in a description file.
    pub fn into_network(self) -> Result<Network, NetworkError> {
        let mut builder = Network::builder();
        let start = builder.add_station(Station::start(self.start.into()));
        let destination = builder.add_station(Station::destination(self.destination.into()));
        builder
            .start(start)
            .destination(destination)
            .cart_speed(Speed::kilometres_per_hour(self.cart_speed_kmh));
        if let Some(kmh) = self.walking_speed_kmh {
            builder.walking_speed(Speed::kilometres_per_hour(kmh));
        }
        for line in self.lines {
            builder.add_line_stops(line.name, line.stops.into_iter().map(Point::from));
        }
        builder.build()
    }
}

/// A hop of a planned route.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    /// Origin station label
    pub from: String,

    /// Destination station label
    pub to: String,

    /// Travel time in minutes
    pub duration_minutes: f64,

    /// "walk" or "cart"
    pub mode: &'static str,

    /// Line ridden, for cart hops
    pub line: Option<String>,
}

/// Response for route planning.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Sum of hop durations in minutes
    pub total_minutes: f64,

    /// Total rounded to the nearest minute
    pub rounded_minutes: i64,

    /// Hops in travel order; empty when unreachable or already there
    pub segments: Vec<SegmentResult>,

    /// Plain-text directions
    pub directions: String,
}

/// Response listing stored networks.
#[derive(Debug, Serialize)]
pub struct NetworkListResponse {
    /// Network names, sorted
    pub networks: Vec<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl SegmentResult {
    /// Create from a planned hop.
    pub fn from_segment(segment: &RouteSegment) -> Self {
        Self {
            from: segment.from_label.clone(),
            to: segment.to_label.clone(),
            duration_minutes: segment.duration_minutes,
            mode: segment.mode.as_str(),
            line: segment.line.clone(),
        }
    }
}

impl RouteResponse {
    /// Create from a planned itinerary.
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            total_minutes: itinerary.total_minutes(),
            rounded_minutes: itinerary.rounded_minutes(),
            segments: itinerary
                .segments()
                .iter()
                .map(SegmentResult::from_segment)
                .collect(),
            directions: Directions(itinerary).to_string(),
        }
    }
}
