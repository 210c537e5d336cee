//! Coordinate value passed in and out of the route core.

use serde::{Deserialize, Serialize};

use crate::haversine;

/// A position in degrees, optionally carrying a heading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearing: Option<f64>,
}

impl Location {
    /// A location without a heading.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            bearing: None,
        }
    }

    /// Attach a heading in degrees.
    pub fn with_bearing(mut self, bearing: f64) -> Self {
        self.bearing = Some(bearing);
        self
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    /// Great-circle distance in meters.
    pub fn distance_to(&self, other: &Location) -> f64 {
        haversine::distance_m(self.coords(), other.coords())
    }

    /// Initial bearing towards `other` in degrees within [0, 360).
    pub fn bearing_to(&self, other: &Location) -> f64 {
        haversine::bearing_deg(self.coords(), other.coords())
    }

    /// True when both coordinates are bit-for-bit equal.
    pub fn same_position(&self, other: &Location) -> bool {
        self.lat.total_cmp(&other.lat).is_eq() && self.lng.total_cmp(&other.lng).is_eq()
    }
}

impl From<(f64, f64)> for Location {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}
