//! Raw route document produced by the routing engine.
//!
//! Only the fields the route core reads are modelled; everything else in the
//! engine's response is ignored.

use serde::{Deserialize, Serialize};

/// Status reported when the document carries no trip at all.
pub const MISSING_TRIP_STATUS: i32 = -1;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteDocument {
    #[serde(default)]
    pub trip: Option<Trip>,
}

impl RouteDocument {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Engine status code; 0 means a route was found.
    pub fn status(&self) -> i32 {
        self.trip
            .as_ref()
            .map_or(MISSING_TRIP_STATUS, |trip| trip.status)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    #[serde(default = "missing_status")]
    pub status: i32,
    #[serde(default)]
    pub status_message: Option<String>,
    /// Unit label for every length in the trip, e.g. "kilometers" or "miles".
    #[serde(default)]
    pub units: Option<String>,
    #[serde(default)]
    pub summary: Summary,
    #[serde(default)]
    pub legs: Vec<Leg>,
    #[serde(default)]
    pub locations: Vec<ViaPoint>,
}

fn missing_status() -> i32 {
    MISSING_TRIP_STATUS
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Total length in trip units.
    #[serde(default)]
    pub length: f64,
    /// Total time in seconds.
    #[serde(default)]
    pub time: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    /// Encoded path string.
    #[serde(default)]
    pub shape: String,
    #[serde(default)]
    pub maneuvers: Vec<Maneuver>,
    #[serde(default)]
    pub summary: Option<Summary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Maneuver {
    #[serde(rename = "type", default)]
    pub maneuver_type: u32,
    #[serde(default)]
    pub instruction: String,
    #[serde(default)]
    pub verbal_pre_transition_instruction: Option<String>,
    #[serde(default)]
    pub verbal_post_transition_instruction: Option<String>,
    #[serde(default)]
    pub street_names: Vec<String>,
    /// Length in trip units.
    #[serde(default)]
    pub length: f64,
    /// Seconds.
    #[serde(default)]
    pub time: f64,
    pub begin_shape_index: usize,
    #[serde(default)]
    pub end_shape_index: Option<usize>,
}

/// A via-point the route was requested through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViaPoint {
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}
