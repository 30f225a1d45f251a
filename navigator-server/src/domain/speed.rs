//! Travel speeds.

/// Metres covered by walking for one minute at the default pace (10 km/h).
pub const DEFAULT_WALKING_METRES_PER_MINUTE: f64 = 1000.0 / 6.0;

/// A travel speed, stored in metres per minute.
///
/// Speeds are not validated here; [`Network`](super::Network) construction
/// rejects speeds that are not finite and positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Speed(f64);

impl Speed {
    /// A speed already expressed in metres per minute.
    pub const fn metres_per_minute(value: f64) -> Self {
        Speed(value)
    }

    /// A speed given in kilometres per hour.
    pub fn kilometres_per_hour(value: f64) -> Self {
        Speed(value * 1000.0 / 60.0)
    }

    /// The default walking pace.
    pub const fn walking() -> Self {
        Speed(DEFAULT_WALKING_METRES_PER_MINUTE)
    }

    /// The speed in metres per minute.
    pub fn as_metres_per_minute(&self) -> f64 {
        self.0
    }

    /// Returns true if the speed can be used to divide distances.
    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    /// Minutes needed to cover `metres` at this speed.
    pub fn minutes_for(&self, metres: f64) -> f64 {
        metres / self.0
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self::walking()
    }
}
