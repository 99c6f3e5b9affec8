//! Core domain types for levelz.
//!
//! This module contains the value types a parsed level is made of:
//! - `Coordinate2D` / `Coordinate3D` - points in a level
//! - `Block` - a named block with string properties
//! - `CoordinateMatrix2D` / `CoordinateMatrix3D` - inclusive-bound lattices
//! - `Level`, `Level2D`, `Level3D`, `LevelObject`, `Scroll` - the parsed level

mod block;
mod coordinate;
mod level;
mod matrix;

pub use block::Block;
pub use coordinate::{Coordinate2D, Coordinate3D};
pub use level::{Level, Level2D, Level3D, LevelObject, Scroll};
pub use matrix::{CoordinateMatrix2D, CoordinateMatrix3D};

pub(crate) use coordinate::{parse_bound, parse_real};
