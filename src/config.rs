//! Matching tunables.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// A match whose correction exceeds this many meters marks the device lost.
    pub lost_threshold_m: f64,
    /// Fixes closer than this to the final node are treated as arrived.
    pub destination_threshold_m: f64,
    /// A projected point within this many meters of a leg's end advances to the next leg.
    pub leg_advance_margin_m: f64,
    /// Projections farther than this from the fix are retried along the reverse bearing.
    pub correction_threshold_m: f64,
    /// Maximum angle between the leg bearing and the bearing to the projected point.
    pub bearing_tolerance_deg: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            lost_threshold_m: 50.0,
            destination_threshold_m: 20.0,
            leg_advance_margin_m: 5.0,
            correction_threshold_m: 1000.0,
            bearing_tolerance_deg: 10.0,
        }
    }
}
