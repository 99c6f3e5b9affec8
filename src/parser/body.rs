//! Body-line decoding: comments, the `end` sentinel, and placement
//! emission.

use super::block::parse_block_token;
use super::coordinate::{parse_coordinate_field, ParseCoordinate};
use super::END;
use crate::error::{LevelError, Result};
use crate::types::LevelObject;

/// What a raw body line turned out to be.
enum BodyLine<'a> {
    /// Comment or blank line, nothing to emit.
    Skip,
    /// The `end` sentinel: stop scanning the body entirely.
    End,
    /// A data line, split at the first `:`.
    Data {
        block: &'a str,
        coordinates: &'a str,
    },
}

/// Classify one raw body line.
///
/// Order matters: a leading `#` makes the whole line a comment, a trimmed
/// `end` is the sentinel (so `end # note` is a data line and fails on the
/// missing `:`), and only then is an inline comment stripped.
fn classify(raw: &str) -> Result<BodyLine<'_>> {
    if raw.starts_with('#') {
        return Ok(BodyLine::Skip);
    }

    if raw.trim() == END {
        return Ok(BodyLine::End);
    }

    let stripped = match raw.find('#') {
        Some(i) => &raw[..i],
        None => raw,
    };
    let stripped = stripped.trim_end();

    if stripped.trim().is_empty() {
        return Ok(BodyLine::Skip);
    }

    let (block, coordinates) = stripped.split_once(':').ok_or_else(|| {
        LevelError::format_help(
            format!("body line has no `:` separator: `{}`", stripped.trim()),
            "write body lines as `name: [x, y]`",
        )
    })?;

    Ok(BodyLine::Data { block, coordinates })
}

/// Decode the body segment into placements.
///
/// `body_start` is the 1-based line number of the first body line in the
/// original input, used for error positions. Each data line emits one
/// placement per expanded coordinate, all sharing the parsed block, in
/// expansion order.
pub(crate) fn parse_body<C: ParseCoordinate>(
    lines: &[&str],
    body_start: usize,
) -> Result<Vec<LevelObject<C>>> {
    let mut objects = Vec::new();

    for (i, raw) in lines.iter().enumerate() {
        let line_no = body_start + i;

        match classify(raw).map_err(|e| e.at_line(line_no))? {
            BodyLine::Skip => continue,
            BodyLine::End => break,
            BodyLine::Data { block, coordinates } => {
                let block = parse_block_token(block).map_err(|e| e.at_line(line_no))?;
                let coordinates =
                    parse_coordinate_field::<C>(coordinates).map_err(|e| e.at_line(line_no))?;

                objects.extend(
                    coordinates
                        .into_iter()
                        .map(|coordinate| LevelObject::new(block.clone(), coordinate)),
                );
            }
        }
    }

    Ok(objects)
}
