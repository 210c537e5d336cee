//! Great-circle projection of a fix onto a leg's bearing line.
//!
//! The leg is the great circle leaving the turn point along its bearing. The
//! fix is projected by intersecting that circle with a perpendicular circle
//! through the fix. All trigonometry is done in radians.

use std::f64::consts::{PI, TAU};

use tracing::debug;

use crate::config::SnapConfig;
use crate::haversine;
use crate::location::Location;
use crate::node::GeoNode;

pub const CLOCKWISE: f64 = 90.0;
pub const COUNTERCLOCKWISE: f64 = -90.0;

/// Sines below this are treated as zero.
const SINE_EPSILON: f64 = 1e-12;

/// Project `fix` onto the bearing line through `turn_point`.
///
/// Returns `None` when no intersection can be established, e.g. when the fix
/// coincides with the turn point. The returned location always carries the
/// turn point's bearing.
pub fn project_onto_bearing(
    turn_point: &GeoNode,
    fix: &Location,
    config: &SnapConfig,
) -> Option<Location> {
    let origin = turn_point.location();
    let mut candidate = intersect_either_side(turn_point, fix)?;

    if candidate.distance_to(fix).round() > config.correction_threshold_m {
        debug!(
            lat = candidate.lat,
            lng = candidate.lng,
            "projection landed on the far side of the globe, retrying along reverse bearing"
        );
        candidate = intersect_either_side(&turn_point.reversed(), fix)?;
    }

    let delta = turn_point.bearing() - origin.bearing_to(&candidate);
    let tolerance = config.bearing_tolerance_deg;
    if delta.abs() > tolerance && delta.abs() < 360.0 - tolerance {
        candidate = origin;
    }

    Some(candidate.with_bearing(turn_point.bearing()))
}

fn intersect_either_side(turn_point: &GeoNode, fix: &Location) -> Option<Location> {
    intersect(turn_point, fix, CLOCKWISE).or_else(|| intersect(turn_point, fix, COUNTERCLOCKWISE))
}

/// Intersection of the turn point's bearing line with the line through `fix`
/// at `turn_point.bearing + offset` degrees.
pub fn intersect(turn_point: &GeoNode, fix: &Location, offset: f64) -> Option<Location> {
    let lat1 = turn_point.lat().to_radians();
    let lon1 = turn_point.lng().to_radians();
    let lat2 = fix.lat.to_radians();
    let lon2 = fix.lng.to_radians();

    let brng13 = turn_point.bearing().to_radians();
    let brng23 = (turn_point.bearing() + offset).to_radians();

    let dist12 = haversine::angular_distance(turn_point.coords(), fix.coords());
    if dist12 == 0.0 {
        return None;
    }

    // initial bearings at each end of the 1-2 arc
    let brng_a = clamped_acos((lat2.sin() - lat1.sin() * dist12.cos()) / (dist12.sin() * lat1.cos()));
    let brng_b = clamped_acos((lat1.sin() - lat2.sin() * dist12.cos()) / (dist12.sin() * lat2.cos()));

    let (brng12, brng21) = if (lon2 - lon1).sin() > 0.0 {
        (brng_a, TAU - brng_b)
    } else {
        (TAU - brng_a, brng_b)
    };

    let alpha1 = wrap_angle(brng13 - brng12);
    let alpha2 = wrap_angle(brng21 - brng23);
    let sin1 = snap_to_zero(alpha1.sin());
    let sin2 = snap_to_zero(alpha2.sin());

    if sin1 == 0.0 && sin2 == 0.0 {
        // infinite intersections
        return None;
    }
    if sin1 == 0.0 {
        // the fix already lies on the leg's great circle
        return Some(Location::new(fix.lat, fix.lng));
    }
    if sin1 * sin2 < 0.0 {
        // ambiguous intersection
        return None;
    }

    let alpha3 = clamped_acos(-alpha1.cos() * alpha2.cos() + sin1 * sin2 * dist12.cos());
    let dist13 = (dist12.sin() * sin1 * sin2).atan2(alpha2.cos() + alpha1.cos() * alpha3.cos());
    let lat3 = (lat1.sin() * dist13.cos() + lat1.cos() * dist13.sin() * brng13.cos()).asin();
    let dlon13 = (brng13.sin() * dist13.sin() * lat1.cos()).atan2(dist13.cos() - lat1.sin() * lat3.sin());
    let lon3 = wrap_angle(lon1 + dlon13);

    let location = Location::new(lat3.to_degrees(), normalize_longitude(lon3.to_degrees()));
    if location.lat.is_finite() && location.lng.is_finite() {
        Some(location)
    } else {
        None
    }
}

/// Wrap radians into [-PI, PI).
fn wrap_angle(radians: f64) -> f64 {
    (radians + PI).rem_euclid(TAU) - PI
}

/// Map degrees from [-180, 180) into (-180, 180].
fn normalize_longitude(degrees: f64) -> f64 {
    if degrees <= -180.0 { degrees + 360.0 } else { degrees }
}

fn clamped_acos(value: f64) -> f64 {
    value.clamp(-1.0, 1.0).acos()
}

fn snap_to_zero(value: f64) -> f64 {
    if value.abs() < SINE_EPSILON { 0.0 } else { value }
}
