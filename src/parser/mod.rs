//! Parsing pipeline for the LevelZ text format.
//!
//! A level file is a header section of `@key value` lines, a `---`
//! delimiter line, and a body of `name: coordinates` placement lines, with
//! an optional `end` sentinel that truncates the body early.
//!
//! The pipeline is a pure transformation: lines in, one immutable
//! [`Level`](crate::types::Level) out, or a single error naming the failing
//! line and the violated rule. No I/O happens here; see
//! [`loader`](crate::loader) for the file-reading convenience.
//!
//! # Usage
//!
//! ```ignore
//! let level = levelz::parse_str("@type 2\n---\ngrass: [0, 0]\n")?;
//! assert_eq!(level.block_count(), 1);
//! ```

mod block;
mod body;
mod builder;
mod coordinate;
mod header;
mod section;

pub use block::parse_block_token;
pub use coordinate::{parse_coordinates_2d, parse_coordinates_3d};

use crate::error::Result;
use crate::types::Level;

/// Marks the end of the header section.
pub(crate) const HEADER_END: &str = "---";

/// Marks the end of the body; everything after is ignored.
pub(crate) const END: &str = "end";

/// Parse a level from an ordered sequence of already-materialized lines.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Result<Level> {
    let lines: Vec<&str> = lines.iter().map(AsRef::as_ref).collect();

    let sections = section::split_sections(&lines)?;
    let headers = header::read_headers(sections.header)?;
    builder::build_level(headers, sections.body, sections.body_start)
}

/// Parse a level from a single text blob, splitting on any newline form.
pub fn parse_str(source: &str) -> Result<Level> {
    let lines: Vec<&str> = source.lines().collect();

    let sections = section::split_sections(&lines)?;
    let headers = header::read_headers(sections.header)?;
    builder::build_level(headers, sections.body, sections.body_start)
}
