//! Block-token decoding: `name` or `name<k=v,k=v>` into a [`Block`].

use std::collections::HashMap;

use crate::error::{LevelError, Result};
use crate::types::Block;

/// Decode a block token.
///
/// Spaces and `>` are stripped first. Without a `<`, the whole cleaned
/// token is the block name. Otherwise the text after `<` splits on `,`
/// into property segments; each splits on the first `=` into a key and a
/// raw string value. Segments without `=` are dropped silently (the
/// format's one deliberate tolerance). Duplicate keys: last wins.
pub fn parse_block_token(token: &str) -> Result<Block> {
    let cleaned: String = token.chars().filter(|c| *c != ' ' && *c != '>').collect();

    let (name, segments) = match cleaned.split_once('<') {
        Some((name, rest)) => (name, Some(rest)),
        None => (cleaned.as_str(), None),
    };

    if name.is_empty() {
        return Err(LevelError::format_help(
            format!("block token `{}` has no name", token.trim()),
            "write blocks as `name` or `name<key=value>`",
        ));
    }

    let Some(segments) = segments else {
        return Ok(Block::new(name));
    };

    let mut properties = HashMap::new();
    for segment in segments.split(',') {
        if let Some((key, value)) = segment.split_once('=') {
            properties.insert(key.to_string(), value.to_string());
        }
    }

    Ok(Block::with_properties(name, properties))
}
