//! Test fixtures for nav-route.
//!
//! Provides:
//! - A real Las Vegas route along Las Vegas Blvd and Flamingo Rd
//! - A builder producing routing-engine JSON documents from coordinates

#![allow(dead_code)]

pub mod las_vegas_route;

pub use las_vegas_route::*;

use nav_route::polyline::Polyline;
use nav_route::{Location, Route};
use serde_json::{Value, json};

/// Meters per degree of latitude on the crate's spherical earth.
pub const METERS_PER_DEGREE: f64 = 111_195.08;

/// Shift a point north by `meters`.
pub fn offset_north(point: (f64, f64), meters: f64) -> Location {
    Location::new(point.0 + meters / METERS_PER_DEGREE, point.1)
}

/// Shift a point east by `meters`.
pub fn offset_east(point: (f64, f64), meters: f64) -> Location {
    let meters_per_degree = METERS_PER_DEGREE * point.0.to_radians().cos();
    Location::new(point.0, point.1 + meters / meters_per_degree)
}

pub fn midpoint(a: (f64, f64), b: (f64, f64)) -> (f64, f64) {
    ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0)
}

/// Builder for routing-engine route documents with sensible defaults.
#[derive(Clone, Debug)]
pub struct RouteDocBuilder {
    status: i32,
    status_message: Option<String>,
    units: String,
    points: Vec<(f64, f64)>,
    shape: Option<String>,
    maneuvers: Vec<(usize, f64, String)>,
    time: f64,
    extra_legs: usize,
    locations: Vec<(f64, f64)>,
}

impl RouteDocBuilder {
    pub fn new(points: &[(f64, f64)]) -> Self {
        Self {
            status: 0,
            status_message: Some("Found route between points".to_string()),
            units: "kilometers".to_string(),
            points: points.to_vec(),
            shape: None,
            maneuvers: Vec::new(),
            time: 0.0,
            extra_legs: 0,
            locations: Vec::new(),
        }
    }

    pub fn status(mut self, status: i32, message: &str) -> Self {
        self.status = status;
        self.status_message = Some(message.to_string());
        self
    }

    pub fn units(mut self, units: &str) -> Self {
        self.units = units.to_string();
        self
    }

    /// Replace the encoded shape with a raw string.
    pub fn shape(mut self, encoded: &str) -> Self {
        self.shape = Some(encoded.to_string());
        self
    }

    pub fn maneuver(mut self, begin_shape_index: usize, length: f64, text: &str) -> Self {
        self.maneuvers.push((begin_shape_index, length, text.to_string()));
        self
    }

    pub fn time(mut self, seconds: f64) -> Self {
        self.time = seconds;
        self
    }

    pub fn extra_leg(mut self) -> Self {
        self.extra_legs += 1;
        self
    }

    pub fn via_point(mut self, lat: f64, lon: f64) -> Self {
        self.locations.push((lat, lon));
        self
    }

    pub fn to_value(&self) -> Value {
        let shape = self
            .shape
            .clone()
            .unwrap_or_else(|| {
                Polyline::new(self.points.clone())
                    .encode()
                    .expect("fixture points are in range")
            });
        let length: f64 = self.maneuvers.iter().map(|(_, length, _)| length).sum();
        let maneuvers: Vec<Value> = self
            .maneuvers
            .iter()
            .map(|(begin, length, text)| {
                json!({
                    "type": 1,
                    "instruction": text,
                    "street_names": [],
                    "length": length,
                    "time": 0,
                    "begin_shape_index": begin,
                })
            })
            .collect();

        let leg = json!({
            "shape": shape,
            "maneuvers": maneuvers,
            "summary": {"length": length, "time": self.time},
        });
        let legs: Vec<Value> = std::iter::repeat_n(leg, 1 + self.extra_legs).collect();
        let locations: Vec<Value> = self
            .locations
            .iter()
            .map(|(lat, lon)| json!({"lat": lat, "lon": lon, "type": "break"}))
            .collect();

        json!({
            "trip": {
                "status": self.status,
                "status_message": self.status_message,
                "units": self.units,
                "language": "en-US",
                "summary": {"length": length, "time": self.time},
                "legs": legs,
                "locations": locations,
            }
        })
    }

    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }

    pub fn build(&self) -> Route {
        Route::from_json(&self.to_json()).expect("fixture route should parse")
    }
}

// ============================================================================
// Equator routes (exact distances, easy geometry)
// ============================================================================

/// Three nodes ~111 m apart heading east along the equator.
pub const EQUATOR_POINTS: &[(f64, f64)] = &[(0.0, 0.0), (0.0, 0.001), (0.0, 0.002)];

/// ~200 m in degrees of longitude on the equator.
pub const LONG_LEG_DEG: f64 = 0.0017986;

pub fn equator_route() -> Route {
    RouteDocBuilder::new(EQUATOR_POINTS)
        .maneuver(0, 0.222, "Head east.")
        .maneuver(2, 0.0, "You have arrived at your destination.")
        .time(20.0)
        .build()
}

/// Two ~200 m legs heading east along the equator.
pub fn long_leg_route() -> Route {
    RouteDocBuilder::new(&[(0.0, 0.0), (0.0, LONG_LEG_DEG), (0.0, 2.0 * LONG_LEG_DEG)])
        .maneuver(0, 0.4, "Head east.")
        .maneuver(2, 0.0, "You have arrived at your destination.")
        .build()
}
