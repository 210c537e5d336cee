//! Route vertices.
//!
//! Geometry is built in two phases: the decoder yields bare coordinates,
//! then [`annotate`] derives per-vertex distances and bearings in one pass.

use serde::{Deserialize, Serialize};

use crate::haversine;
use crate::location::Location;
use crate::polyline::Polyline;

/// One vertex of the decoded route path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoNode {
    lat: f64,
    lng: f64,
    cumulative_distance: f64,
    leg_distance: f64,
    bearing: f64,
}

impl GeoNode {
    /// A bare vertex with no derived fields.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            cumulative_distance: 0.0,
            leg_distance: 0.0,
            bearing: 0.0,
        }
    }

    /// Same position heading the other way.
    pub(crate) fn reversed(&self) -> Self {
        Self {
            bearing: haversine::normalize_bearing(self.bearing + 180.0),
            ..self.clone()
        }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Meters from route start to this node.
    pub fn cumulative_distance(&self) -> f64 {
        self.cumulative_distance
    }

    /// Meters from this node to the next one; 0 for the last node.
    pub fn leg_distance(&self) -> f64 {
        self.leg_distance
    }

    /// Degrees within [0, 360) from this node towards the next one.
    pub fn bearing(&self) -> f64 {
        self.bearing
    }

    /// The node position carrying its outbound bearing.
    pub fn location(&self) -> Location {
        Location::new(self.lat, self.lng).with_bearing(self.bearing)
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    pub fn distance_to(&self, location: &Location) -> f64 {
        haversine::distance_m(self.coords(), location.coords())
    }
}

/// Derive leg distance, cumulative distance and bearing for every vertex.
///
/// Leg distance and bearing at node `i` describe the leg towards node `i + 1`,
/// so they are filled one node behind the cursor. The last node keeps a leg
/// distance of 0 and the default bearing.
pub fn annotate(polyline: &Polyline) -> Vec<GeoNode> {
    let mut nodes: Vec<GeoNode> = Vec::with_capacity(polyline.len());

    for &(lat, lng) in polyline.points() {
        let mut node = GeoNode::new(lat, lng);
        if let Some(previous) = nodes.last_mut() {
            let distance = haversine::distance_m(previous.coords(), node.coords());
            node.cumulative_distance = previous.cumulative_distance + distance;
            previous.leg_distance = distance;
            previous.bearing = haversine::bearing_deg(previous.coords(), node.coords());
        }
        nodes.push(node);
    }

    nodes
}
