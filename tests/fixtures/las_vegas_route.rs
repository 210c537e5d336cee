//! A drive north on Las Vegas Blvd, then east on Flamingo Rd.
//!
//! Simplified to straight legs so expected distances are easy to reason about.

use super::RouteDocBuilder;
use nav_route::Route;

/// Route vertices: four nodes north along the Strip, then two legs east.
pub const STRIP_POINTS: &[(f64, f64)] = &[
    (36.1000, -115.1729),
    (36.1020, -115.1729),
    (36.1040, -115.1729),
    (36.1060, -115.1729),
    (36.1060, -115.1699),
    (36.1060, -115.1669),
];

/// Index of the node where the right turn onto Flamingo Rd happens.
pub const TURN_NODE: usize = 3;

pub fn strip_route() -> Route {
    strip_builder().build()
}

pub fn strip_builder() -> RouteDocBuilder {
    RouteDocBuilder::new(STRIP_POINTS)
        .maneuver(0, 0.667, "Drive north on Las Vegas Boulevard.")
        .maneuver(TURN_NODE, 0.539, "Turn right onto Flamingo Road.")
        .maneuver(STRIP_POINTS.len() - 1, 0.0, "You have arrived at your destination.")
        .time(180.0)
        .via_point(36.1000, -115.1729)
        .via_point(36.1060, -115.1669)
}
