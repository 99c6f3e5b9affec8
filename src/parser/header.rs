//! Header section decoding: `@key value` lines into a string map.

use std::collections::HashMap;

use crate::error::{LevelError, Result};

/// Decode the header segment into a key-value map.
///
/// Blank lines are skipped. Every other line must be `@key value`; the key
/// runs to the first space, the value is everything after it, both trimmed
/// (interior value spaces kept). Duplicate keys: last occurrence wins.
///
/// No required-key checks happen here; the builder is responsible for
/// `type`.
pub(crate) fn read_headers(lines: &[&str]) -> Result<HashMap<String, String>> {
    let mut map = HashMap::new();

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let rest = line.strip_prefix('@').ok_or_else(|| {
            LevelError::format_help(
                format!("header line does not start with `@`: `{}`", line),
                "write headers as `@key value`",
            )
            .at_line(i + 1)
        })?;

        let (key, value) = rest.split_once(' ').ok_or_else(|| {
            LevelError::format_help(
                format!("header `{}` has no value", line),
                "write headers as `@key value`",
            )
            .at_line(i + 1)
        })?;

        let key = key.trim();
        if key.is_empty() {
            return Err(
                LevelError::format(format!("header `{}` has an empty key", line)).at_line(i + 1)
            );
        }

        map.insert(key.to_string(), value.trim().to_string());
    }

    Ok(map)
}
