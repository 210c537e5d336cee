//! Progress recalculation after a successful match.

use crate::instruction::Instruction;
use crate::location::Location;
use crate::node::GeoNode;

/// Meters travelled when the device sits at `fixed_point` on the leg that
/// starts at `anchor`, having completed every leg before `current_leg`.
///
/// Rounded up to whole meters. Without a fixed point only the completed legs
/// count.
pub fn distance_travelled(
    nodes: &[GeoNode],
    current_leg: usize,
    anchor: &GeoNode,
    fixed_point: Option<&Location>,
) -> f64 {
    let completed: f64 = nodes
        .iter()
        .take(current_leg)
        .map(GeoNode::leg_distance)
        .sum();
    let along = fixed_point.map_or(0.0, |point| anchor.distance_to(point));

    (completed + along).ceil()
}

/// Recompute every instruction's live distance for `travelled` meters.
///
/// Each instruction's threshold is the running total of instruction distances
/// up to and including it. Passed instructions go negative.
pub fn update_live_distances(instructions: &mut [Instruction], travelled: f64) {
    let travelled = travelled.ceil() as i64;
    let mut combined: i64 = 0;

    for instruction in instructions.iter_mut() {
        combined += i64::from(instruction.distance());
        instruction.set_live_distance_to_next(combined - travelled);
    }
}
