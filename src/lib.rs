//! nav-route core
//!
//! Route tracking for turn-by-turn guidance: decodes a routing engine's route
//! document, snaps GPS fixes onto the path and keeps progress state.

pub mod config;
pub mod document;
pub mod error;
pub mod haversine;
pub mod instruction;
pub mod location;
pub mod node;
pub mod polyline;
pub mod progress;
pub mod projection;
pub mod route;
pub mod snap;
pub mod traits;

pub use config::SnapConfig;
pub use error::{MalformedPathError, Result, RouteError};
pub use instruction::{DistanceUnits, Instruction};
pub use location::Location;
pub use node::GeoNode;
pub use route::{NavigationState, Route};
pub use snap::Snap;
pub use traits::PositionFix;
