//! Encoded path codec.
//!
//! Paths arrive as variable-length delta-encoded strings: each vertex is a
//! latitude delta followed by a longitude delta, zig-zag signed, split into
//! 5-bit chunks and shifted into printable ASCII by 63. One unit is 1e-6
//! degrees.
//!
//! The `polyline` crate does the coding. A structural scan runs first so a bad
//! string is reported with a precise [`MalformedPathError`] instead of the
//! crate's message, and so running sums that would leave `i64` are rejected
//! before the crate accumulates them.

use geo_types::Coord;
use serde::{Deserialize, Serialize};

use crate::error::MalformedPathError;

/// Decimal digits per encoded unit (1e-6 degrees).
pub const PRECISION_DIGITS: u32 = 6;

const CHAR_OFFSET: u8 = 63;
const LAST_CHAR: u8 = b'~';
const CHUNK_BITS: u32 = 5;
const CONTINUATION: i64 = 0x20;
const CHUNK_MASK: i64 = 0x1f;
const MAX_SHIFT: u32 = 60;

/// A route geometry as decoded coordinates.
///
/// Each point is a (latitude, longitude) tuple in degrees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Wrap already-decoded (latitude, longitude) points.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Decode an encoded path string.
    pub fn decode(encoded: &str) -> Result<Self, MalformedPathError> {
        validate(encoded.as_bytes())?;
        if encoded.is_empty() {
            return Ok(Self::default());
        }

        let line = ::polyline::decode_polyline(encoded, PRECISION_DIGITS).map_err(|e| MalformedPathError::Rejected(e.to_string()))?;
        // the crate works in (x, y) = (lng, lat)
        let points = line.coords().map(|coord| (coord.y, coord.x)).collect();

        Ok(Self { points })
    }

    /// Encode back into the path string format.
    ///
    /// Fails when a point lies outside valid latitude/longitude ranges.
    pub fn encode(&self) -> Result<String, MalformedPathError> {
        let coords = self.points.iter().map(|&(lat, lng)| Coord { x: lng, y: lat });
        ::polyline::encode_coordinates(coords, PRECISION_DIGITS).map_err(|e| MalformedPathError::Rejected(e.to_string()))
    }

    /// Points in path order.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consume the wrapper, returning the points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when there are no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Walk every codeword, checking the alphabet, codeword boundaries, pairing
/// and that the running latitude/longitude sums stay within `i64`.
fn validate(bytes: &[u8]) -> Result<(), MalformedPathError> {
    let mut offset = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while offset < bytes.len() {
        let start = offset;
        lat = lat
            .checked_add(read_value(bytes, &mut offset)?)
            .ok_or(MalformedPathError::Overflow { offset: start })?;
        if offset >= bytes.len() {
            return Err(MalformedPathError::OddComponentCount { offset });
        }

        let start = offset;
        lng = lng
            .checked_add(read_value(bytes, &mut offset)?)
            .ok_or(MalformedPathError::Overflow { offset: start })?;
    }

    Ok(())
}

fn read_value(bytes: &[u8], offset: &mut usize) -> Result<i64, MalformedPathError> {
    let start = *offset;
    let mut result: i64 = 0;
    let mut shift: u32 = 0;

    loop {
        let Some(&byte) = bytes.get(*offset) else {
            return Err(MalformedPathError::Truncated { offset: *offset });
        };
        if !(CHAR_OFFSET..=LAST_CHAR).contains(&byte) {
            return Err(MalformedPathError::InvalidCharacter {
                offset: *offset,
                byte,
            });
        }
        if shift > MAX_SHIFT {
            return Err(MalformedPathError::Overflow { offset: start });
        }
        *offset += 1;

        let chunk = i64::from(byte - CHAR_OFFSET);
        result |= (chunk & CHUNK_MASK) << shift;
        shift += CHUNK_BITS;

        if chunk < CONTINUATION {
            break;
        }
    }

    Ok(if result & 1 != 0 {
        !(result >> 1)
    } else {
        result >> 1
    })
}
