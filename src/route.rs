//! Route aggregate: geometry, instructions and navigation state.

use std::collections::HashSet;
use std::str::FromStr;

use tracing::{info, warn};

use crate::config::SnapConfig;
use crate::document::{Leg, RouteDocument, Summary, Trip, ViaPoint};
use crate::error::{Result, RouteError};
use crate::instruction::{DistanceUnits, Instruction};
use crate::location::Location;
use crate::node::{self, GeoNode};
use crate::polyline::Polyline;
use crate::snap::{self, Snap};
use crate::traits::PositionFix;

/// Mutable navigation cursors, owned by one route.
///
/// Fixes must be fed in chronological order; the cursors only move forward
/// (apart from [`Route::rewind`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationState {
    pub(crate) current_leg: usize,
    pub(crate) current_instruction_index: usize,
    pub(crate) lost: bool,
    pub(crate) last_fixed_point: Option<Location>,
    pub(crate) total_distance_travelled: f64,
    pub(crate) seen_instructions: HashSet<usize>,
}

impl NavigationState {
    /// Index of the node starting the leg being matched against.
    pub fn current_leg(&self) -> usize {
        self.current_leg
    }

    pub fn current_instruction_index(&self) -> usize {
        self.current_instruction_index
    }

    pub fn is_lost(&self) -> bool {
        self.lost
    }

    pub fn last_fixed_point(&self) -> Option<&Location> {
        self.last_fixed_point.as_ref()
    }

    /// Whole meters travelled along the route.
    pub fn total_distance_travelled(&self) -> f64 {
        self.total_distance_travelled
    }
}

/// Decoded geometry, instructions and state of a found route.
#[derive(Debug, Clone)]
struct Guidance {
    nodes: Vec<GeoNode>,
    instructions: Vec<Instruction>,
    state: NavigationState,
}

impl Guidance {
    fn build(leg: &Leg, units: DistanceUnits) -> Result<Self> {
        let polyline = Polyline::decode(&leg.shape)?;
        if polyline.is_empty() {
            return Err(RouteError::EmptyShape);
        }
        let nodes = node::annotate(&polyline);
        let instructions = build_instructions(leg, &nodes, units)?;

        Ok(Self {
            nodes,
            instructions,
            state: NavigationState::default(),
        })
    }

    fn current_instruction(&self) -> &Instruction {
        &self.instructions[self.state.current_instruction_index]
    }

    fn next_instruction(&self) -> Option<&Instruction> {
        self.instructions.get(self.state.current_instruction_index + 1)
    }
}

/// Build instructions from the leg's maneuvers.
///
/// A maneuver whose length rounds to zero meters is not emitted. Its unrounded
/// length is carried into the next emitted instruction, so short segments add
/// up instead of vanishing. The final maneuver (the arrival) is always kept.
fn build_instructions(leg: &Leg, nodes: &[GeoNode], units: DistanceUnits) -> Result<Vec<Instruction>> {
    if leg.maneuvers.is_empty() {
        return Err(RouteError::NoManeuvers);
    }

    let last = leg.maneuvers.len() - 1;
    let mut instructions = Vec::with_capacity(leg.maneuvers.len());
    // document units, not yet rounded to meters
    let mut carried_length = 0.0;

    for (index, maneuver) in leg.maneuvers.iter().enumerate() {
        let anchor = nodes
            .get(maneuver.begin_shape_index)
            .ok_or(RouteError::ManeuverOutOfRange {
                maneuver: index,
                begin: maneuver.begin_shape_index,
                nodes: nodes.len(),
            })?;

        let mut instruction = Instruction::from_maneuver(maneuver, units);
        if instruction.distance() == 0 && index != last {
            carried_length += maneuver.length;
            continue;
        }

        instruction.set_bearing(anchor.bearing().ceil() as i32);
        if carried_length > 0.0 {
            instruction.set_distance(units.to_meters(maneuver.length + carried_length));
            carried_length = 0.0;
        }
        instructions.push(instruction);
    }

    Ok(instructions)
}

/// A route produced by an external routing engine, tracked against live fixes.
#[derive(Debug, Clone)]
pub struct Route {
    status: i32,
    status_message: Option<String>,
    units: DistanceUnits,
    summary: Summary,
    via_points: Vec<ViaPoint>,
    leg_count: usize,
    guidance: Option<Guidance>,
    config: SnapConfig,
}

impl Route {
    /// Parse a raw route document from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_document(RouteDocument::from_json(json)?)
    }

    pub fn from_document(document: RouteDocument) -> Result<Self> {
        Self::from_document_with_config(document, SnapConfig::default())
    }

    /// Build a route from a document.
    ///
    /// A non-zero status yields a route that is not found; its geometry and
    /// instruction queries return [`RouteError::NoRoute`]. A malformed path or
    /// maneuver list fails construction.
    pub fn from_document_with_config(document: RouteDocument, config: SnapConfig) -> Result<Self> {
        let status = document.status();
        let Some(trip) = document.trip else {
            info!(status, "route document has no trip");
            return Ok(Self::not_found(status, None, config));
        };
        if status != 0 {
            info!(status, message = ?trip.status_message, "no route found");
            return Ok(Self::not_found(status, Some(trip), config));
        }

        let units = trip
            .units
            .as_deref()
            .and_then(DistanceUnits::from_label)
            .unwrap_or_default();

        let leg = trip.legs.first().ok_or(RouteError::MissingLeg)?;
        if trip.legs.len() > 1 {
            warn!(legs = trip.legs.len(), "route has multiple legs, only the first is tracked");
        }
        let guidance = Guidance::build(leg, units)?;
        info!(
            nodes = guidance.nodes.len(),
            instructions = guidance.instructions.len(),
            %units,
            "route loaded"
        );

        Ok(Self {
            status,
            status_message: trip.status_message,
            units,
            summary: trip.summary,
            via_points: trip.locations,
            leg_count: trip.legs.len(),
            guidance: Some(guidance),
            config,
        })
    }

    fn not_found(status: i32, trip: Option<Trip>, config: SnapConfig) -> Self {
        let (status_message, summary, via_points, leg_count) = match trip {
            Some(trip) => (trip.status_message, trip.summary, trip.locations, trip.legs.len()),
            None => (None, Summary::default(), Vec::new(), 0),
        };
        Self {
            status,
            status_message,
            units: DistanceUnits::default(),
            summary,
            via_points,
            leg_count,
            guidance: None,
            config,
        }
    }

    /// Replace the matching tunables.
    pub fn with_config(mut self, config: SnapConfig) -> Self {
        self.config = config;
        self
    }

    fn guidance(&self) -> Result<&Guidance> {
        self.guidance
            .as_ref()
            .ok_or(RouteError::NoRoute { status: self.status })
    }

    fn guidance_mut(&mut self) -> Result<&mut Guidance> {
        let status = self.status;
        self.guidance.as_mut().ok_or(RouteError::NoRoute { status })
    }

    pub fn status(&self) -> i32 {
        self.status
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn found_route(&self) -> bool {
        self.guidance.is_some()
    }

    pub fn units(&self) -> DistanceUnits {
        self.units
    }

    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    /// Via-points the route was requested through.
    pub fn via_points(&self) -> &[ViaPoint] {
        &self.via_points
    }

    /// Legs in the document. Only the first is tracked; more than one is
    /// logged as a warning at construction.
    pub fn leg_count(&self) -> usize {
        self.leg_count
    }

    pub fn total_distance_meters(&self) -> Result<u32> {
        self.guidance()?;
        Ok(self.units.to_meters(self.summary.length))
    }

    pub fn total_time_seconds(&self) -> Result<u32> {
        self.guidance()?;
        Ok(self.summary.time.round().max(0.0) as u32)
    }

    pub fn nodes(&self) -> Result<&[GeoNode]> {
        Ok(&self.guidance()?.nodes)
    }

    pub fn instructions(&self) -> Result<&[Instruction]> {
        Ok(&self.guidance()?.instructions)
    }

    /// Node coordinates in order, for rendering.
    pub fn geometry(&self) -> Result<Vec<Location>> {
        Ok(self
            .guidance()?
            .nodes
            .iter()
            .map(|node| Location::new(node.lat(), node.lng()))
            .collect())
    }

    pub fn start_coordinates(&self) -> Result<Location> {
        let first = &self.guidance()?.nodes[0];
        Ok(Location::new(first.lat(), first.lng()))
    }

    /// First node including its outbound bearing.
    pub fn accurate_start_point(&self) -> Result<Location> {
        Ok(self.guidance()?.nodes[0].location())
    }

    /// Map rotation for the leg being travelled.
    pub fn current_rotation_bearing(&self) -> Result<f64> {
        let guidance = self.guidance()?;
        let index = guidance.state.current_leg.min(guidance.nodes.len() - 1);
        Ok(360.0 - guidance.nodes[index].bearing())
    }

    pub fn navigation(&self) -> Result<&NavigationState> {
        Ok(&self.guidance()?.state)
    }

    /// False for a route that was not found.
    pub fn is_lost(&self) -> bool {
        self.guidance.as_ref().is_some_and(|guidance| guidance.state.lost)
    }

    pub fn current_instruction(&self) -> Result<&Instruction> {
        Ok(self.guidance()?.current_instruction())
    }

    pub fn next_instruction(&self) -> Result<Option<&Instruction>> {
        Ok(self.guidance()?.next_instruction())
    }

    pub fn next_instruction_index(&self) -> Result<Option<usize>> {
        let guidance = self.guidance()?;
        let next = guidance.state.current_instruction_index + 1;
        Ok((next < guidance.instructions.len()).then_some(next))
    }

    /// Live distance of the current instruction; `None` before any progress.
    pub fn distance_to_next_instruction_meters(&self) -> Result<Option<i64>> {
        Ok(self.guidance()?.current_instruction().live_distance_to_next())
    }

    /// Live distance of the final instruction; `None` before any progress.
    pub fn remaining_distance_to_destination_meters(&self) -> Result<Option<i64>> {
        let guidance = self.guidance()?;
        Ok(guidance
            .instructions
            .last()
            .and_then(Instruction::live_distance_to_next))
    }

    /// Instructions with their anchor locations filled in.
    ///
    /// Instructions whose live distance has never been computed get the
    /// distance from route start to their successor.
    pub fn route_instructions(&mut self) -> Result<&[Instruction]> {
        let guidance = self.guidance_mut()?;
        let mut accumulated: i64 = 0;
        for instruction in guidance.instructions.iter_mut() {
            let anchor = guidance.nodes[instruction.begin_polygon_index()].location();
            instruction.set_location(anchor);
            if instruction.live_distance_to_next().is_none() {
                accumulated += i64::from(instruction.distance());
                instruction.set_live_distance_to_next(accumulated);
            }
        }
        Ok(&guidance.instructions)
    }

    /// Match a raw fix onto the route and update progress.
    pub fn snap_to_route<F: PositionFix + ?Sized>(&mut self, fix: &F) -> Result<Snap> {
        let fix = fix.to_location();
        let status = self.status;
        let guidance = self.guidance.as_mut().ok_or(RouteError::NoRoute { status })?;
        Ok(snap::snap_to_route(
            &guidance.nodes,
            &mut guidance.instructions,
            &mut guidance.state,
            &self.config,
            &fix,
        ))
    }

    /// Restart matching from the first leg.
    ///
    /// Only the leg cursor is reset; instruction index, lost flag and distance
    /// travelled are kept.
    pub fn rewind(&mut self) -> Result<()> {
        self.guidance_mut()?.state.current_leg = 0;
        Ok(())
    }

    pub fn mark_instruction_seen(&mut self, instruction: &Instruction) -> Result<()> {
        self.guidance_mut()?
            .state
            .seen_instructions
            .insert(instruction.begin_polygon_index());
        Ok(())
    }

    pub fn is_instruction_seen(&self, instruction: &Instruction) -> bool {
        self.guidance.as_ref().is_some_and(|guidance| {
            guidance
                .state
                .seen_instructions
                .contains(&instruction.begin_polygon_index())
        })
    }

    /// Instructions marked as seen, in route order.
    pub fn seen_instructions(&self) -> Result<Vec<&Instruction>> {
        let guidance = self.guidance()?;
        Ok(guidance
            .instructions
            .iter()
            .filter(|instruction| {
                guidance
                    .state
                    .seen_instructions
                    .contains(&instruction.begin_polygon_index())
            })
            .collect())
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(json: &str) -> Result<Self> {
        Self::from_json(json)
    }
}
