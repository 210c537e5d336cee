//! Turn-by-turn instructions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::document::Maneuver;
use crate::location::Location;

pub const KM_TO_METERS: f64 = 1000.0;
pub const MI_TO_METERS: f64 = 1609.344;

/// Unit every length in a route document is expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnits {
    #[default]
    Kilometers,
    Miles,
}

impl DistanceUnits {
    /// Parse the routing engine's unit label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "kilometers" => Some(Self::Kilometers),
            "miles" => Some(Self::Miles),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Kilometers => "kilometers",
            Self::Miles => "miles",
        }
    }

    pub fn meters_per_unit(&self) -> f64 {
        match self {
            Self::Kilometers => KM_TO_METERS,
            Self::Miles => MI_TO_METERS,
        }
    }

    /// Whole meters for a length in these units.
    pub fn to_meters(&self, length: f64) -> u32 {
        (length * self.meters_per_unit()).round().max(0.0) as u32
    }
}

impl fmt::Display for DistanceUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One maneuver anchored to a node of the route path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    begin_polygon_index: usize,
    end_polygon_index: Option<usize>,
    distance: u32,
    live_distance_to_next: Option<i64>,
    bearing: i32,
    location: Option<Location>,
    text: String,
    maneuver_type: u32,
    street_names: Vec<String>,
    time_seconds: f64,
    verbal_pre_transition: Option<String>,
    verbal_post_transition: Option<String>,
}

impl Instruction {
    pub fn from_maneuver(maneuver: &Maneuver, units: DistanceUnits) -> Self {
        Self {
            begin_polygon_index: maneuver.begin_shape_index,
            end_polygon_index: maneuver.end_shape_index,
            distance: units.to_meters(maneuver.length),
            live_distance_to_next: None,
            bearing: 0,
            location: None,
            text: maneuver.instruction.clone(),
            maneuver_type: maneuver.maneuver_type,
            street_names: maneuver.street_names.clone(),
            time_seconds: maneuver.time,
            verbal_pre_transition: maneuver.verbal_pre_transition_instruction.clone(),
            verbal_post_transition: maneuver.verbal_post_transition_instruction.clone(),
        }
    }

    /// Index of the node this instruction starts at. Also its identity key.
    pub fn begin_polygon_index(&self) -> usize {
        self.begin_polygon_index
    }

    pub fn end_polygon_index(&self) -> Option<usize> {
        self.end_polygon_index
    }

    /// Meters this instruction spans.
    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// Meters from the device to the next instruction.
    ///
    /// `None` until progress has been computed. Negative once the device is
    /// past the next instruction's start.
    pub fn live_distance_to_next(&self) -> Option<i64> {
        self.live_distance_to_next
    }

    /// Anchor node bearing rounded up to whole degrees.
    pub fn bearing(&self) -> i32 {
        self.bearing
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Routing engine maneuver type code.
    pub fn maneuver_type(&self) -> u32 {
        self.maneuver_type
    }

    pub fn street_names(&self) -> &[String] {
        &self.street_names
    }

    pub fn time_seconds(&self) -> f64 {
        self.time_seconds
    }

    pub fn verbal_pre_transition(&self) -> Option<&str> {
        self.verbal_pre_transition.as_deref()
    }

    pub fn verbal_post_transition(&self) -> Option<&str> {
        self.verbal_post_transition.as_deref()
    }

    pub(crate) fn set_distance(&mut self, distance: u32) {
        self.distance = distance;
    }

    pub(crate) fn set_bearing(&mut self, bearing: i32) {
        self.bearing = bearing;
    }

    pub(crate) fn set_location(&mut self, location: Location) {
        self.location = Some(location);
    }

    pub(crate) fn set_live_distance_to_next(&mut self, meters: i64) {
        self.live_distance_to_next = Some(meters);
    }
}
