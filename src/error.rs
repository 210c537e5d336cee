//! Error types for route construction and queries.

use thiserror::Error;

/// Failure while decoding or encoding a path string.
///
/// Offsets are byte offsets into the encoded string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedPathError {
    #[error("invalid path character {byte:#04x} at offset {offset}")]
    InvalidCharacter { offset: usize, byte: u8 },

    #[error("path ends mid-codeword at offset {offset}")]
    Truncated { offset: usize },

    #[error("path has a latitude without a longitude at offset {offset}")]
    OddComponentCount { offset: usize },

    #[error("codeword starting at offset {offset} overflows")]
    Overflow { offset: usize },

    /// Structurally sound, but the codec refused the coordinates.
    #[error("path rejected by codec: {0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("route document is not valid JSON: {0}")]
    Document(#[from] serde_json::Error),

    #[error("malformed path: {0}")]
    MalformedPath(#[from] MalformedPathError),

    #[error("route document has no legs")]
    MissingLeg,

    #[error("route shape decoded to no nodes")]
    EmptyShape,

    #[error("route leg has no maneuvers")]
    NoManeuvers,

    #[error("maneuver {maneuver} begins at shape index {begin} but the shape has {nodes} nodes")]
    ManeuverOutOfRange {
        maneuver: usize,
        begin: usize,
        nodes: usize,
    },

    #[error("no route found (status {status})")]
    NoRoute { status: i32 },
}

pub type Result<T> = std::result::Result<T, RouteError>;
