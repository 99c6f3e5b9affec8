//! Coordinate matrix literals.
//!
//! A matrix is a rectangular lattice of integer coordinates with inclusive
//! bounds, plus a starting anchor point. Its textual form is
//! `(minX, maxX, minY, maxY)^[cx, cy]` (2D) or
//! `(minX, maxX, minY, maxY, minZ, maxZ)^[cx, cy, cz]` (3D), with the caret
//! separating the bounds tuple from the anchor. This is an independent
//! serialization form; the inline range literal used inside body lines has
//! different (half-open, base-offset) semantics.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::coordinate::{parse_bound, Coordinate2D, Coordinate3D};
use crate::error::{LevelError, Result};

/// A 2D lattice of coordinates with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoordinateMatrix2D {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
    /// The anchor point of the matrix. Not added to the lattice points.
    pub start: Coordinate2D,
}

impl CoordinateMatrix2D {
    pub const fn new(min_x: i64, max_x: i64, min_y: i64, max_y: i64, start: Coordinate2D) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
            start,
        }
    }

    /// A matrix with both minimum bounds at zero.
    pub const fn from_max(max_x: i64, max_y: i64, start: Coordinate2D) -> Self {
        Self::new(0, max_x, 0, max_y, start)
    }

    /// Every lattice point, x outer, y inner, bounds inclusive.
    pub fn coordinates(&self) -> Vec<Coordinate2D> {
        let mut coordinates = Vec::new();
        for x in self.min_x..=self.max_x {
            for y in self.min_y..=self.max_y {
                coordinates.push(Coordinate2D::new(x as f64, y as f64));
            }
        }
        coordinates
    }
}

impl fmt::Display for CoordinateMatrix2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})^{}",
            self.min_x, self.max_x, self.min_y, self.max_y, self.start
        )
    }
}

impl FromStr for CoordinateMatrix2D {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self> {
        let (bounds, start) = split_matrix(s)?;
        if bounds.len() != 4 {
            return Err(LevelError::format(format!(
                "matrix literal `{}` has {} bounds (expected 4)",
                s.trim(),
                bounds.len()
            )));
        }

        Ok(Self::new(
            bounds[0],
            bounds[1],
            bounds[2],
            bounds[3],
            start.parse()?,
        ))
    }
}

/// A 3D lattice of coordinates with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoordinateMatrix3D {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
    pub min_z: i64,
    pub max_z: i64,
    /// The anchor point of the matrix. Not added to the lattice points.
    pub start: Coordinate3D,
}

impl CoordinateMatrix3D {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        min_x: i64,
        max_x: i64,
        min_y: i64,
        max_y: i64,
        min_z: i64,
        max_z: i64,
        start: Coordinate3D,
    ) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
            min_z,
            max_z,
            start,
        }
    }

    /// A matrix with all minimum bounds at zero.
    pub const fn from_max(max_x: i64, max_y: i64, max_z: i64, start: Coordinate3D) -> Self {
        Self::new(0, max_x, 0, max_y, 0, max_z, start)
    }

    /// Every lattice point, x outer, then y, z innermost, bounds inclusive.
    pub fn coordinates(&self) -> Vec<Coordinate3D> {
        let mut coordinates = Vec::new();
        for x in self.min_x..=self.max_x {
            for y in self.min_y..=self.max_y {
                for z in self.min_z..=self.max_z {
                    coordinates.push(Coordinate3D::new(x as f64, y as f64, z as f64));
                }
            }
        }
        coordinates
    }
}

impl fmt::Display for CoordinateMatrix3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {}, {}, {})^{}",
            self.min_x, self.max_x, self.min_y, self.max_y, self.min_z, self.max_z, self.start
        )
    }
}

impl FromStr for CoordinateMatrix3D {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self> {
        let (bounds, start) = split_matrix(s)?;
        if bounds.len() != 6 {
            return Err(LevelError::format(format!(
                "matrix literal `{}` has {} bounds (expected 6)",
                s.trim(),
                bounds.len()
            )));
        }

        Ok(Self::new(
            bounds[0],
            bounds[1],
            bounds[2],
            bounds[3],
            bounds[4],
            bounds[5],
            start.parse()?,
        ))
    }
}

/// Split a matrix literal at the caret into its integer bounds and the
/// anchor point literal.
fn split_matrix(s: &str) -> Result<(Vec<i64>, String)> {
    let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();

    let (bounds, start) = cleaned.split_once('^').ok_or_else(|| {
        LevelError::format_help(
            format!("malformed matrix literal `{}`", s.trim()),
            "write matrices as `(minX, maxX, minY, maxY)^[cx, cy]`",
        )
    })?;

    let inner = bounds
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| {
            LevelError::format(format!(
                "matrix bounds `{}` are not parenthesized",
                bounds
            ))
        })?;

    let values = inner
        .split(',')
        .map(parse_bound)
        .collect::<Result<Vec<_>>>()?;

    Ok((values, start.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_max_equals_explicit_bounds() {
        assert_eq!(
            CoordinateMatrix2D::from_max(2, 2, Coordinate2D::ORIGIN),
            CoordinateMatrix2D::new(0, 2, 0, 2, Coordinate2D::ORIGIN)
        );
    }

    #[test]
    fn test_lattice_size_2d() {
        let matrix = CoordinateMatrix2D::from_max(2, 2, Coordinate2D::ORIGIN);
        assert_eq!(matrix.coordinates().len(), 9);
        assert_eq!(matrix.start, Coordinate2D::ORIGIN);
    }

    #[test]
    fn test_lattice_size_3d() {
        let matrix = CoordinateMatrix3D::from_max(2, 2, 2, Coordinate3D::ORIGIN);
        assert_eq!(matrix.coordinates().len(), 27);
        assert_eq!(matrix.start, Coordinate3D::ORIGIN);
    }

    #[test]
    fn test_lattice_order_2d() {
        let matrix = CoordinateMatrix2D::new(0, 1, 0, 1, Coordinate2D::ORIGIN);
        assert_eq!(
            matrix.coordinates(),
            vec![
                Coordinate2D::new(0.0, 0.0),
                Coordinate2D::new(0.0, 1.0),
                Coordinate2D::new(1.0, 0.0),
                Coordinate2D::new(1.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_from_string_2d() {
        let matrix: CoordinateMatrix2D = "(0, 3, 0, 3)^[-1, 2]".parse().unwrap();
        assert_eq!(
            matrix,
            CoordinateMatrix2D::new(0, 3, 0, 3, Coordinate2D::new(-1.0, 2.0))
        );
    }

    #[test]
    fn test_from_string_3d() {
        let matrix: CoordinateMatrix3D = "(0, 3, 0, 3, 0, 3)^[-1, 2, 3]".parse().unwrap();
        assert_eq!(
            matrix,
            CoordinateMatrix3D::new(0, 3, 0, 3, 0, 3, Coordinate3D::new(-1.0, 2.0, 3.0))
        );
    }

    #[test]
    fn test_round_trip_2d() {
        let matrix: CoordinateMatrix2D = "(0, 3, 0, 3)^[-1, 2]".parse().unwrap();
        let back: CoordinateMatrix2D = matrix.to_string().parse().unwrap();
        assert_eq!(matrix, back);
    }

    #[test]
    fn test_missing_caret() {
        let result = "(0, 3, 0, 3)[-1, 2]".parse::<CoordinateMatrix2D>();
        assert!(matches!(result, Err(LevelError::Format { .. })));
    }

    #[test]
    fn test_wrong_bound_count() {
        let result = "(0, 3, 0)^[-1, 2]".parse::<CoordinateMatrix2D>();
        assert!(matches!(result, Err(LevelError::Format { .. })));
    }

    #[test]
    fn test_non_numeric_bound() {
        let result = "(0, a, 0, 3)^[-1, 2]".parse::<CoordinateMatrix2D>();
        assert!(matches!(result, Err(LevelError::NumericParse { .. })));
    }
}
