//! Block type: a named tile/object with optional string properties.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{LevelError, Result};

/// A named block with string properties.
///
/// Property values are kept as raw strings; interpreting them is up to the
/// consumer. Equality is structural over the name and the full property map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub name: String,
    pub properties: HashMap<String, String>,
}

impl Block {
    /// A block with no properties.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: HashMap::new(),
        }
    }

    pub fn with_properties(name: impl Into<String>, properties: HashMap<String, String>) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }

    /// Get a property value.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Get a property value, or a default if the key is absent.
    pub fn property_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.property(key).unwrap_or(default)
    }

    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.properties.is_empty() {
            return write!(f, "{}", self.name);
        }

        // Sorted keys so the rendering is deterministic.
        let mut pairs: Vec<_> = self.properties.iter().collect();
        pairs.sort_by_key(|(k, _)| k.as_str());

        write!(f, "{}<", self.name)?;
        for (i, (key, value)) in pairs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        write!(f, ">")
    }
}

impl FromStr for Block {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self> {
        crate::parser::parse_block_token(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_equality() {
        let a = Block::new("grass");
        let b = Block::new("grass");
        assert_eq!(a, b);
        assert_ne!(a, Block::new("stone"));

        let props: HashMap<_, _> = [("type".to_string(), "1".to_string())].into_iter().collect();
        assert_ne!(a, Block::with_properties("grass", props));
    }

    #[test]
    fn test_property_access() {
        let props: HashMap<_, _> = [("cracked".to_string(), "false".to_string())]
            .into_iter()
            .collect();
        let block = Block::with_properties("stone", props);

        assert_eq!(block.property("cracked"), Some("false"));
        assert_eq!(block.property("missing"), None);
        assert_eq!(block.property_or("missing", "true"), "true");
        assert!(block.has_property("cracked"));
        assert!(!block.has_property("missing"));
    }

    #[test]
    fn test_display_plain() {
        assert_eq!(Block::new("grass").to_string(), "grass");
    }

    #[test]
    fn test_display_with_properties() {
        let props: HashMap<_, _> = [
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "1".to_string()),
        ]
        .into_iter()
        .collect();
        let block = Block::with_properties("stone", props);
        assert_eq!(block.to_string(), "stone<a=1, b=2>");
    }

    #[test]
    fn test_from_str_round_trip() {
        let block: Block = "stone<cracked=false>".parse().unwrap();
        assert_eq!(block.name, "stone");
        assert_eq!(block.property("cracked"), Some("false"));
        assert_eq!(block.to_string(), "stone<cracked=false>");
    }
}
