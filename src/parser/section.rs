//! Header/body section splitting.

use super::HEADER_END;
use crate::error::{LevelError, Result};

/// The two segments of a level file, plus where the body starts.
#[derive(Debug)]
pub(crate) struct Sections<'a> {
    /// Lines strictly before the `---` delimiter.
    pub header: &'a [&'a str],
    /// Lines strictly after the `---` delimiter.
    pub body: &'a [&'a str],
    /// 1-based line number of the first body line, for error reporting.
    pub body_start: usize,
}

/// Split the raw line sequence at the first `---` line.
///
/// A file without the delimiter has no body at all and is rejected rather
/// than silently treated as all-header.
pub(crate) fn split_sections<'a>(lines: &'a [&'a str]) -> Result<Sections<'a>> {
    let delimiter = lines
        .iter()
        .position(|line| line.trim() == HEADER_END)
        .ok_or(LevelError::MissingDelimiter)?;

    Ok(Sections {
        header: &lines[..delimiter],
        body: &lines[delimiter + 1..],
        body_start: delimiter + 2,
    })
}
