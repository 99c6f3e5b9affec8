//! Level types: placements, scroll direction, and the dimensionality-tagged
//! level value produced by the parser.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use super::block::Block;
use super::coordinate::{Coordinate2D, Coordinate3D};
use crate::error::Result;

/// One block placed at one coordinate.
///
/// Generic over the coordinate type, so a placement's dimensionality is
/// fixed by the level that owns it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelObject<C> {
    pub block: Block,
    pub coordinate: C,
}

impl<C> LevelObject<C> {
    pub fn new(block: Block, coordinate: C) -> Self {
        Self { block, coordinate }
    }
}

impl<C: fmt::Display> fmt::Display for LevelObject<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.block, self.coordinate)
    }
}

/// Auto-scroll direction of a 2D level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Scroll {
    #[default]
    None,
    HorizontalLeft,
    HorizontalRight,
    VerticalUp,
    VerticalDown,
}

impl Scroll {
    /// Decode the `scroll` header value. Unrecognized values fall back to
    /// no scrolling.
    pub fn from_header(value: &str) -> Self {
        match value {
            "horizontal-left" => Self::HorizontalLeft,
            "horizontal-right" => Self::HorizontalRight,
            "vertical-up" => Self::VerticalUp,
            "vertical-down" => Self::VerticalDown,
            _ => Self::None,
        }
    }
}

impl fmt::Display for Scroll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "none",
            Self::HorizontalLeft => "horizontal-left",
            Self::HorizontalRight => "horizontal-right",
            Self::VerticalUp => "vertical-up",
            Self::VerticalDown => "vertical-down",
        };
        write!(f, "{}", s)
    }
}

/// A 2D level: headers, placements, and the typed fields resolved from the
/// headers at construction time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Level2D {
    headers: HashMap<String, String>,
    blocks: Vec<LevelObject<Coordinate2D>>,
    pub spawn: Coordinate2D,
    pub scroll: Scroll,
}

impl Level2D {
    /// Build from a header map and placements, resolving `spawn` and
    /// `scroll`. The builder has already overlaid defaults, so both keys
    /// are normally present; absent keys still resolve to the defaults.
    pub fn from_parts(
        headers: HashMap<String, String>,
        blocks: Vec<LevelObject<Coordinate2D>>,
    ) -> Result<Self> {
        let spawn = match headers.get("spawn") {
            Some(value) => value.parse()?,
            None => Coordinate2D::ORIGIN,
        };
        let scroll = headers
            .get("scroll")
            .map(|value| Scroll::from_header(value))
            .unwrap_or_default();

        Ok(Self {
            headers,
            blocks,
            spawn,
            scroll,
        })
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    pub fn blocks(&self) -> &[LevelObject<Coordinate2D>] {
        &self.blocks
    }
}

/// A 3D level. No scroll concept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Level3D {
    headers: HashMap<String, String>,
    blocks: Vec<LevelObject<Coordinate3D>>,
    pub spawn: Coordinate3D,
}

impl Level3D {
    pub fn from_parts(
        headers: HashMap<String, String>,
        blocks: Vec<LevelObject<Coordinate3D>>,
    ) -> Result<Self> {
        let spawn = match headers.get("spawn") {
            Some(value) => value.parse()?,
            None => Coordinate3D::ORIGIN,
        };

        Ok(Self {
            headers,
            blocks,
            spawn,
        })
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    pub fn blocks(&self) -> &[LevelObject<Coordinate3D>] {
        &self.blocks
    }
}

/// A parsed level, tagged with its dimensionality.
///
/// The variant is decided once from the `type` header during parsing and
/// never re-derived.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Level {
    TwoD(Level2D),
    ThreeD(Level3D),
}

impl Level {
    pub fn headers(&self) -> &HashMap<String, String> {
        match self {
            Self::TwoD(level) => level.headers(),
            Self::ThreeD(level) => level.headers(),
        }
    }

    /// Number of placements in the level.
    pub fn block_count(&self) -> usize {
        match self {
            Self::TwoD(level) => level.blocks().len(),
            Self::ThreeD(level) => level.blocks().len(),
        }
    }

    pub fn as_2d(&self) -> Option<&Level2D> {
        match self {
            Self::TwoD(level) => Some(level),
            Self::ThreeD(_) => None,
        }
    }

    pub fn as_3d(&self) -> Option<&Level3D> {
        match self {
            Self::TwoD(_) => None,
            Self::ThreeD(level) => Some(level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_scroll_from_header() {
        assert_eq!(Scroll::from_header("none"), Scroll::None);
        assert_eq!(
            Scroll::from_header("horizontal-left"),
            Scroll::HorizontalLeft
        );
        assert_eq!(
            Scroll::from_header("horizontal-right"),
            Scroll::HorizontalRight
        );
        assert_eq!(Scroll::from_header("vertical-up"), Scroll::VerticalUp);
        assert_eq!(Scroll::from_header("vertical-down"), Scroll::VerticalDown);
    }

    #[test]
    fn test_scroll_unrecognized_falls_back() {
        assert_eq!(Scroll::from_header("diagonal"), Scroll::None);
        assert_eq!(Scroll::from_header(""), Scroll::None);
    }

    #[test]
    fn test_scroll_display_round_trip() {
        for scroll in [
            Scroll::None,
            Scroll::HorizontalLeft,
            Scroll::HorizontalRight,
            Scroll::VerticalUp,
            Scroll::VerticalDown,
        ] {
            assert_eq!(Scroll::from_header(&scroll.to_string()), scroll);
        }
    }

    #[test]
    fn test_level2d_resolves_headers() {
        let level = Level2D::from_parts(
            headers(&[("scroll", "horizontal-right"), ("spawn", "[-2, 4]")]),
            vec![],
        )
        .unwrap();

        assert_eq!(level.scroll, Scroll::HorizontalRight);
        assert_eq!(level.spawn, Coordinate2D::new(-2.0, 4.0));
    }

    #[test]
    fn test_level2d_defaults() {
        let level = Level2D::from_parts(HashMap::new(), vec![]).unwrap();
        assert_eq!(level.spawn, Coordinate2D::ORIGIN);
        assert_eq!(level.scroll, Scroll::None);
    }

    #[test]
    fn test_level3d_spawn() {
        let level = Level3D::from_parts(headers(&[("spawn", "[2, 3, 4]")]), vec![]).unwrap();
        assert_eq!(level.spawn, Coordinate3D::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_level_object_display() {
        let object = LevelObject::new(Block::new("grass"), Coordinate2D::new(0.0, 1.0));
        assert_eq!(object.to_string(), "grass: [0, 1]");
    }

    #[test]
    fn test_level_variant_accessors() {
        let level = Level::TwoD(Level2D::from_parts(HashMap::new(), vec![]).unwrap());
        assert!(level.as_2d().is_some());
        assert!(level.as_3d().is_none());
        assert_eq!(level.block_count(), 0);
    }
}
