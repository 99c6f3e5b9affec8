//! Level assembly: dimension selection, header defaults, and construction
//! of the typed level value.

use std::collections::HashMap;

use super::body::parse_body;
use crate::error::{LevelError, Result};
use crate::types::{Coordinate2D, Coordinate3D, Level, Level2D, Level3D};

/// Build the final level from the header map and the body segment.
///
/// The `type` header decides the dimensionality once; everything after is
/// typed accordingly. Absent `spawn` (and, for 2D, `scroll`) headers are
/// overlaid with their defaults before the typed level resolves them, so
/// construction always sees concrete values.
pub(crate) fn build_level(
    headers: HashMap<String, String>,
    body: &[&str],
    body_start: usize,
) -> Result<Level> {
    let dimension = headers
        .get("type")
        .ok_or(LevelError::MissingRequiredHeader)?;

    match dimension.as_str() {
        "2" => {
            let effective = with_defaults(headers, &[("spawn", "[0, 0]"), ("scroll", "none")]);
            let blocks = parse_body::<Coordinate2D>(body, body_start)?;
            Ok(Level::TwoD(Level2D::from_parts(effective, blocks)?))
        }
        "3" => {
            let effective = with_defaults(headers, &[("spawn", "[0, 0, 0]")]);
            let blocks = parse_body::<Coordinate3D>(body, body_start)?;
            Ok(Level::ThreeD(Level3D::from_parts(effective, blocks)?))
        }
        other => Err(LevelError::UnknownDimension(other.to_string())),
    }
}

/// The effective header map: explicit headers, with defaults filled in for
/// absent keys only.
fn with_defaults(
    headers: HashMap<String, String>,
    defaults: &[(&str, &str)],
) -> HashMap<String, String> {
    let mut effective = headers;
    for (key, value) in defaults {
        effective
            .entry((*key).to_string())
            .or_insert_with(|| (*value).to_string());
    }
    effective
}
