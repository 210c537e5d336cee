//! Seams for the host application's own position types.

use crate::location::Location;

/// A raw position fix from a GPS receiver or simulator.
///
/// Implement this for the platform's location type to feed it straight into
/// `Route::snap_to_route`.
pub trait PositionFix {
    /// Latitude in degrees.
    fn latitude(&self) -> f64;

    /// Longitude in degrees.
    fn longitude(&self) -> f64;

    fn to_location(&self) -> Location {
        Location::new(self.latitude(), self.longitude())
    }
}

impl PositionFix for Location {
    fn latitude(&self) -> f64 {
        self.lat
    }

    fn longitude(&self) -> f64 {
        self.lng
    }

    fn to_location(&self) -> Location {
        *self
    }
}

/// (latitude, longitude) pair.
impl PositionFix for (f64, f64) {
    fn latitude(&self) -> f64 {
        self.0
    }

    fn longitude(&self) -> f64 {
        self.1
    }
}
