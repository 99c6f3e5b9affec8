//! levelz - LevelZ level format parser
//!
//! A library for parsing the LevelZ text format: `@key value` headers, a
//! `---` delimiter, and block placement lines with point and range
//! coordinate literals, in 2D or 3D.

pub mod cli;
pub mod error;
pub mod loader;
pub mod parser;
pub mod types;

pub use error::{LevelError, Result};
pub use loader::load_file;
pub use parser::{parse_block_token, parse_coordinates_2d, parse_coordinates_3d, parse_lines, parse_str};
pub use types::{
    Block, Coordinate2D, Coordinate3D, CoordinateMatrix2D, CoordinateMatrix3D, Level, Level2D,
    Level3D, LevelObject, Scroll,
};
