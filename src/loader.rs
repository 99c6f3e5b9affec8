//! Level file loading.
//!
//! The parser core consumes already-materialized lines; this is the one
//! place that touches the filesystem.

use std::fs;
use std::path::Path;

use crate::error::{LevelError, Result};
use crate::parser::parse_str;
use crate::types::Level;

/// Read and parse a level file.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Level> {
    let path = path.as_ref();

    let source = fs::read_to_string(path).map_err(|e| LevelError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    parse_str(&source)
}
