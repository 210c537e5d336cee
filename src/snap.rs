//! Map matching: snapping raw fixes onto the current leg of a route.

use tracing::{debug, info};

use crate::config::SnapConfig;
use crate::instruction::Instruction;
use crate::location::Location;
use crate::node::GeoNode;
use crate::progress;
use crate::projection::project_onto_bearing;
use crate::route::NavigationState;

/// Outcome of matching one fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Snap {
    /// The fix was matched to the current leg; carries the corrected point.
    OnRoute(Location),
    /// The fix is within the destination radius; carries the destination.
    Arrived(Location),
    /// The fix could not be matched within tolerance, or the route is exhausted.
    Lost,
}

impl Snap {
    pub fn location(&self) -> Option<&Location> {
        match self {
            Snap::OnRoute(location) | Snap::Arrived(location) => Some(location),
            Snap::Lost => None,
        }
    }

    pub fn is_lost(&self) -> bool {
        matches!(self, Snap::Lost)
    }
}

/// Match `fix` against the route, advancing over as many legs as it has passed.
///
/// Each iteration either returns or moves `current_leg` forward by one, so the
/// loop runs at most `nodes.len() - current_leg + 1` times.
pub fn snap_to_route(
    nodes: &[GeoNode],
    instructions: &mut [Instruction],
    state: &mut NavigationState,
    config: &SnapConfig,
    fix: &Location,
) -> Snap {
    let Some(destination) = nodes.last() else {
        state.lost = true;
        return Snap::Lost;
    };

    loop {
        debug!(current_leg = state.current_leg, lat = fix.lat, lng = fix.lng, "snapping");

        if state.current_leg >= nodes.len() {
            if !state.lost {
                info!("route exhausted, device is lost");
            }
            state.lost = true;
            return Snap::Lost;
        }

        let distance_to_destination = destination.distance_to(fix);
        debug!(distance_to_destination, "distance to destination");
        if distance_to_destination.floor() < config.destination_threshold_m {
            arrive(nodes, instructions, state);
            return Snap::Arrived(destination.location());
        }

        let current = &nodes[state.current_leg];
        let corrected = project_onto_bearing(current, fix, config).unwrap_or_else(|| current.location());
        state.last_fixed_point = Some(corrected);

        if current.distance_to(&corrected) > current.leg_distance() - config.leg_advance_margin_m {
            state.current_leg += 1;
            advance_instruction_if_needed(instructions, state);
            debug!(current_leg = state.current_leg, "leg passed, trying next leg");
            continue;
        }

        let correction_distance = fix.distance_to(&corrected);
        debug!(
            correction_distance,
            lost_threshold = config.lost_threshold_m,
            fixed_lat = corrected.lat,
            fixed_lng = corrected.lng,
            "corrected fix"
        );
        if correction_distance < config.lost_threshold_m {
            record_progress(nodes, instructions, state, current);
            return Snap::OnRoute(corrected);
        }

        info!(correction_distance, current_leg = state.current_leg, "fix too far from route, device is lost");
        state.lost = true;
        return Snap::Lost;
    }
}

/// Move the current instruction forward once the leg cursor reaches the next
/// instruction's anchor node.
pub fn advance_instruction_if_needed(instructions: &[Instruction], state: &mut NavigationState) -> bool {
    let Some(next) = instructions.get(state.current_instruction_index + 1) else {
        return false;
    };
    if state.current_leg >= next.begin_polygon_index() {
        state.current_instruction_index += 1;
        true
    } else {
        false
    }
}

fn arrive(nodes: &[GeoNode], instructions: &mut [Instruction], state: &mut NavigationState) {
    let last = nodes.len() - 1;
    if state.current_leg < last {
        state.current_leg = last;
    }
    while advance_instruction_if_needed(instructions, state) {}

    let destination = &nodes[last];
    state.last_fixed_point = Some(destination.location());
    record_progress(nodes, instructions, state, destination);
    info!(total_distance_travelled = state.total_distance_travelled, "arrived at destination");
}

fn record_progress(
    nodes: &[GeoNode],
    instructions: &mut [Instruction],
    state: &mut NavigationState,
    anchor: &GeoNode,
) {
    state.total_distance_travelled = progress::distance_travelled(
        nodes,
        state.current_leg,
        anchor,
        state.last_fixed_point.as_ref(),
    );
    progress::update_live_distances(instructions, state.total_distance_travelled);
}
