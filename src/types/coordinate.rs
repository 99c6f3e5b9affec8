//! Coordinate value types and point-literal parsing.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use serde::Serialize;

use crate::error::{LevelError, Result};

/// A 2D point in a level.
///
/// Components are real numbers; levels may place blocks at fractional
/// positions. The textual form is the point literal `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Coordinate2D {
    pub x: f64,
    pub y: f64,
}

impl Coordinate2D {
    /// The origin, `[0, 0]`.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Sum of squared components.
    pub fn magnitude(self) -> f64 {
        self.x * self.x + self.y * self.y
    }
}

/// A 3D point in a level.
///
/// Same numeric model as [`Coordinate2D`]; the point literal is `[x, y, z]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Coordinate3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coordinate3D {
    /// The origin, `[0, 0, 0]`.
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Sum of squared components.
    pub fn magnitude(self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
}

impl Add for Coordinate2D {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Coordinate2D {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Coordinate2D {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Div<f64> for Coordinate2D {
    type Output = Self;
    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

impl Add for Coordinate3D {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Coordinate3D {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Coordinate3D {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Div<f64> for Coordinate3D {
    type Output = Self;
    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl fmt::Display for Coordinate2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

impl fmt::Display for Coordinate3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

impl FromStr for Coordinate2D {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self> {
        let values = split_point(s, 2)?;
        Ok(Self::new(values[0], values[1]))
    }
}

impl FromStr for Coordinate3D {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self> {
        let values = split_point(s, 3)?;
        Ok(Self::new(values[0], values[1], values[2]))
    }
}

/// Parse a real number, reporting the offending token on failure.
pub(crate) fn parse_real(s: &str) -> Result<f64> {
    s.parse().map_err(|_| LevelError::numeric(s))
}

/// Parse an integer range bound.
pub(crate) fn parse_bound(s: &str) -> Result<i64> {
    s.parse().map_err(|_| LevelError::numeric(s))
}

/// Split a `[a, b, ...]` point literal into exactly `arity` real numbers.
fn split_point(s: &str, arity: usize) -> Result<Vec<f64>> {
    let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();

    let inner = cleaned
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| {
            LevelError::format_help(
                format!("malformed point literal `{}`", s.trim()),
                "write points as `[x, y]` (2D) or `[x, y, z]` (3D)",
            )
        })?;

    let values = inner
        .split(',')
        .map(parse_real)
        .collect::<Result<Vec<_>>>()?;

    if values.len() != arity {
        return Err(LevelError::format(format!(
            "point literal `{}` has {} components (expected {})",
            s.trim(),
            values.len(),
            arity
        )));
    }

    Ok(values)
}
