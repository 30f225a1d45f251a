//! Network description loader.
//!
//! Reads the plain-text campus description into a [`Network`]:
//!
//! ```text
//! num_cart_lines = 1
//! starting_point = (0, 0)
//! destination_point = (1000, 1200)
//! average_cart_speed = 30          # km/h
//! cart_line_name = "North Loop"
//! cart_line_stations = (0, 100) (400, 600)
//!                      (900, 1100)
//! ```
//!
//! Keys may appear in any order, except that `cart_line_stations` belongs
//! to the closest `cart_line_name` above it. A line holding only points
//! continues the previous station list. `average_walking_speed` (km/h) is
//! optional.

mod error;
mod parse;

use std::path::Path;

use tracing::{debug, warn};

use crate::domain::{Network, Point, Speed, Station};

pub use error::LoadError;

/// A line name with the stops listed under it so far.
struct DraftLine {
    name: String,
    stops: Vec<Point>,
}

/// Values collected while reading a description.
#[derive(Default)]
struct Draft {
    declared_lines: Option<usize>,
    start: Option<Point>,
    destination: Option<Point>,
    cart_kmh: Option<f64>,
    walking_kmh: Option<f64>,
    lines: Vec<DraftLine>,
}

/// What the previous line left open for continuation.
#[derive(PartialEq)]
enum Open {
    Nothing,
    Stations,
}

/// Parse a network description.
///
/// # Errors
///
/// Returns `Err` for malformed lines, unknown or duplicated keys, missing
/// required keys, and values that do not form a valid network (for
/// example a cart speed of zero).
pub fn parse_network(text: &str) -> Result<Network, LoadError> {
    let mut draft = Draft::default();
    let mut open = Open::Nothing;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = parse::strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }

        let syntax = |message: String| LoadError::Syntax {
            line: line_no,
            message,
        };

        let Some((key, value)) = line.split_once('=') else {
            if open == Open::Stations && line.starts_with('(') {
                let more = parse::points(line).map_err(syntax)?;
                if let Some(current) = draft.lines.last_mut() {
                    current.stops.extend(more);
                }
                continue;
            }
            return Err(syntax(format!("expected 'key = value', got '{line}'")));
        };

        let key = key.trim();
        open = Open::Nothing;
        match key {
            "num_cart_lines" => {
                let n = parse::count(value).map_err(syntax)?;
                set_once(&mut draft.declared_lines, n, key, line_no)?;
            }
            "starting_point" => {
                let p = parse::point(value).map_err(syntax)?;
                set_once(&mut draft.start, p, key, line_no)?;
            }
            "destination_point" => {
                let p = parse::point(value).map_err(syntax)?;
                set_once(&mut draft.destination, p, key, line_no)?;
            }
            "average_cart_speed" => {
                let v = parse::number(value).map_err(syntax)?;
                set_once(&mut draft.cart_kmh, v, key, line_no)?;
            }
            "average_walking_speed" => {
                let v = parse::number(value).map_err(syntax)?;
                set_once(&mut draft.walking_kmh, v, key, line_no)?;
            }
            "cart_line_name" => {
                let name = parse::quoted(value).map_err(syntax)?;
                draft.lines.push(DraftLine {
                    name,
                    stops: Vec::new(),
                });
            }
            "cart_line_stations" => {
                let stops = parse::points(value).map_err(syntax)?;
                let current = draft
                    .lines
                    .last_mut()
                    .ok_or(LoadError::OrphanStations { line: line_no })?;
                current.stops.extend(stops);
                open = Open::Stations;
            }
            _ => {
                return Err(LoadError::UnknownKey {
                    line: line_no,
                    key: key.to_string(),
                });
            }
        }
    }

    draft.into_network()
}

/// Read and parse a network description file.
pub fn load_network(path: impl AsRef<Path>) -> Result<Network, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read network description");
    parse_network(&text)
}

fn set_once<T>(slot: &mut Option<T>, value: T, key: &str, line: usize) -> Result<(), LoadError> {
    if slot.is_some() {
        return Err(LoadError::Syntax {
            line,
            message: format!("duplicate key '{key}'"),
        });
    }
    *slot = Some(value);
    Ok(())
}

impl Draft {
    fn into_network(self) -> Result<Network, LoadError> {
        let start = self.start.ok_or(LoadError::MissingKey("starting_point"))?;
        let destination = self
            .destination
            .ok_or(LoadError::MissingKey("destination_point"))?;
        let cart_kmh = self
            .cart_kmh
            .ok_or(LoadError::MissingKey("average_cart_speed"))?;

        let mut builder = Network::builder();
        let start = builder.add_station(Station::start(start));
        let destination = builder.add_station(Station::destination(destination));
        builder
            .start(start)
            .destination(destination)
            .cart_speed(Speed::kilometres_per_hour(cart_kmh));
        if let Some(kmh) = self.walking_kmh {
            builder.walking_speed(Speed::kilometres_per_hour(kmh));
        }

        let mut line_count = 0;
        for line in self.lines {
            if line.stops.is_empty() {
                warn!(line = %line.name, "cart line has no stations, skipping");
                continue;
            }
            builder.add_line_stops(line.name, line.stops);
            line_count += 1;
        }

        if let Some(declared) = self.declared_lines {
            if declared != line_count {
                warn!(declared, parsed = line_count, "num_cart_lines does not match lines found");
            }
        }

        let network = builder.build()?;
        debug!(
            lines = line_count,
            stations = network.station_count(),
            "parsed network description"
        );
        Ok(network)
    }
}
