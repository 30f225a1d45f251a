//! The campus network: stations, cart lines and speeds.

use super::{CartLine, NetworkError, Point, Speed, Station, StationId};

/// A validated campus network.
///
/// Owns every station. Lines and endpoints refer to stations by
/// [`StationId`]. Construction goes through [`NetworkBuilder`], which
/// guarantees:
///
/// - start and destination are set and refer to stations of this network
/// - every line stop refers to a station of this network
/// - every station has finite coordinates
/// - walking and cart speeds are finite and positive
#[derive(Debug, Clone)]
pub struct Network {
    stations: Vec<Station>,
    start: StationId,
    destination: StationId,
    lines: Vec<CartLine>,
    walking_speed: Speed,
    cart_speed: Speed,
}

impl Network {
    /// Returns a builder for a new network.
    pub fn builder() -> NetworkBuilder {
        NetworkBuilder::new()
    }

    /// The station a route starts from.
    pub fn start(&self) -> StationId {
        self.start
    }

    /// The station a route ends at.
    pub fn destination(&self) -> StationId {
        self.destination
    }

    /// Cart lines in the order they were added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Walking pace, shared by every walking hop.
    pub fn walking_speed(&self) -> Speed {
        self.walking_speed
    }

    /// Cart speed, shared by every line.
    pub fn cart_speed(&self) -> Speed {
        self.cart_speed
    }

    /// Looks up a station.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.0)
    }

    /// The label of a station, or an empty string for a foreign id.
    pub fn label(&self, id: StationId) -> &str {
        self.station(id).map(|s| s.label.as_str()).unwrap_or_default()
    }

    /// Total number of stations owned by the network.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// The stations a route may pass through.
    ///
    /// Start first, then every line stop in line order, then the
    /// destination. A station shared by several lines (the same id) appears
    /// once; stations at equal coordinates are kept apart.
    pub fn route_stations(&self) -> Vec<StationId> {
        let mut seen = vec![false; self.stations.len()];
        let mut ids = Vec::with_capacity(self.stations.len());

        let stops = self.lines.iter().flat_map(|l| l.stops.iter().copied());
        for id in std::iter::once(self.start)
            .chain(stops)
            .chain(std::iter::once(self.destination))
        {
            if !seen[id.0] {
                seen[id.0] = true;
                ids.push(id);
            }
        }

        ids
    }

    /// Straight-line distance between two stations, in metres.
    pub fn distance(&self, a: StationId, b: StationId) -> Option<f64> {
        let a = self.station(a)?;
        let b = self.station(b)?;
        Some(a.location.distance_to(&b.location))
    }
}

/// Incremental construction of a [`Network`].
///
/// # Examples
///
/// ```
/// use navigator_server::domain::{Network, Point, Speed, Station};
///
/// let mut builder = Network::builder();
/// let start = builder.add_station(Station::start(Point::new(0.0, 0.0)));
/// let dest = builder.add_station(Station::destination(Point::new(0.0, 900.0)));
/// builder.add_line_stops("Loop", [Point::new(0.0, 100.0), Point::new(0.0, 800.0)]);
///
/// let network = builder
///     .start(start)
///     .destination(dest)
///     .cart_speed(Speed::kilometres_per_hour(20.0))
///     .build()
///     .unwrap();
///
/// assert_eq!(network.route_stations().len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NetworkBuilder {
    stations: Vec<Station>,
    start: Option<StationId>,
    destination: Option<StationId>,
    lines: Vec<CartLine>,
    walking_speed: Speed,
    cart_speed: Option<Speed>,
}

impl NetworkBuilder {
    /// Creates an empty builder with the default walking pace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a station and returns its id.
    pub fn add_station(&mut self, station: Station) -> StationId {
        let id = StationId(self.stations.len());
        self.stations.push(station);
        id
    }

    /// Adds a line over already-added stations.
    ///
    /// Use this when lines share a stop.
    pub fn add_line(&mut self, name: impl Into<String>, stops: Vec<StationId>) -> &mut Self {
        self.lines.push(CartLine::new(name, stops));
        self
    }

    /// Adds a line whose stops are new stations at the given points.
    ///
    /// Stops are labelled `<name> Station <n>`, counting from 1.
    pub fn add_line_stops(
        &mut self,
        name: impl Into<String>,
        points: impl IntoIterator<Item = Point>,
    ) -> &mut Self {
        let name = name.into();
        let stops = points
            .into_iter()
            .enumerate()
            .map(|(i, p)| self.add_station(Station::line_stop(&name, i + 1, p)))
            .collect();
        self.lines.push(CartLine::new(name, stops));
        self
    }

    /// Chooses the start station.
    pub fn start(&mut self, id: StationId) -> &mut Self {
        self.start = Some(id);
        self
    }

    /// Chooses the destination station.
    pub fn destination(&mut self, id: StationId) -> &mut Self {
        self.destination = Some(id);
        self
    }

    /// Overrides the default walking pace.
    pub fn walking_speed(&mut self, speed: Speed) -> &mut Self {
        self.walking_speed = speed;
        self
    }

    /// Sets the cart speed.
    pub fn cart_speed(&mut self, speed: Speed) -> &mut Self {
        self.cart_speed = Some(speed);
        self
    }

    /// Validates and builds the network.
    ///
    /// # Errors
    ///
    /// Returns `Err` if an endpoint is missing, an id is foreign, a
    /// station has a non-finite coordinate, or a speed is not a finite
    /// positive number. A missing cart speed counts as zero.
    pub fn build(&self) -> Result<Network, NetworkError> {
        let start = self.start.ok_or(NetworkError::MissingStart)?;
        let destination = self.destination.ok_or(NetworkError::MissingDestination)?;

        let known = |id: StationId| {
            if id.0 < self.stations.len() {
                Ok(id)
            } else {
                Err(NetworkError::UnknownStation(id))
            }
        };
        known(start)?;
        known(destination)?;
        for line in &self.lines {
            for stop in &line.stops {
                known(*stop)?;
            }
        }

        if let Some(i) = self.stations.iter().position(|s| !s.location.is_finite()) {
            return Err(NetworkError::NonFiniteLocation(StationId(i)));
        }

        if !self.walking_speed.is_valid() {
            return Err(NetworkError::InvalidSpeed {
                mode: "walking",
                value: self.walking_speed.as_metres_per_minute(),
            });
        }
        let cart_speed = self.cart_speed.unwrap_or(Speed::metres_per_minute(0.0));
        if !cart_speed.is_valid() {
            return Err(NetworkError::InvalidSpeed {
                mode: "cart",
                value: cart_speed.as_metres_per_minute(),
            });
        }

        Ok(Network {
            stations: self.stations.clone(),
            start,
            destination,
            lines: self.lines.clone(),
            walking_speed: self.walking_speed,
            cart_speed,
        })
    }
}
