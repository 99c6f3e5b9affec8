//! Coordinate-field decoding for body lines.
//!
//! A coordinate field is one or more literals joined by `*`:
//! - point literals `[x, y]` / `[x, y, z]`, one coordinate each;
//! - inline range literals, recognized by a leading `(`: after stripping
//!   every `(`, `)`, `[`, `]`, the comma-separated numbers are
//!   `x1,x2,y1,y2,cx,cy` (2D) or `x1,x2,y1,y2,z1,z2,cx,cy,cz` (3D). The
//!   integer offsets range over the half-open products `[x1,x2)` etc.,
//!   x outer, y next, z innermost, each added to the real base point.
//!
//! Expansion results concatenate in token order with no deduplication.

use crate::error::{LevelError, Result};
use crate::types::{parse_bound, parse_real, Coordinate2D, Coordinate3D};

/// Parsing hooks for the two coordinate arities, so body parsing can stay
/// generic over the level's dimensionality.
pub(crate) trait ParseCoordinate: Sized {
    fn parse_point(token: &str) -> Result<Self>;
    fn parse_range(token: &str) -> Result<Vec<Self>>;
}

impl ParseCoordinate for Coordinate2D {
    fn parse_point(token: &str) -> Result<Self> {
        token.parse()
    }

    fn parse_range(token: &str) -> Result<Vec<Self>> {
        let numbers = range_numbers(token, 6)?;
        let (x1, x2) = (parse_bound(&numbers[0])?, parse_bound(&numbers[1])?);
        let (y1, y2) = (parse_bound(&numbers[2])?, parse_bound(&numbers[3])?);
        let base = Coordinate2D::new(parse_real(&numbers[4])?, parse_real(&numbers[5])?);

        let mut coordinates = Vec::new();
        for x in x1..x2 {
            for y in y1..y2 {
                coordinates.push(Coordinate2D::new(base.x + x as f64, base.y + y as f64));
            }
        }
        Ok(coordinates)
    }
}

impl ParseCoordinate for Coordinate3D {
    fn parse_point(token: &str) -> Result<Self> {
        token.parse()
    }

    fn parse_range(token: &str) -> Result<Vec<Self>> {
        let numbers = range_numbers(token, 9)?;
        let (x1, x2) = (parse_bound(&numbers[0])?, parse_bound(&numbers[1])?);
        let (y1, y2) = (parse_bound(&numbers[2])?, parse_bound(&numbers[3])?);
        let (z1, z2) = (parse_bound(&numbers[4])?, parse_bound(&numbers[5])?);
        let base = Coordinate3D::new(
            parse_real(&numbers[6])?,
            parse_real(&numbers[7])?,
            parse_real(&numbers[8])?,
        );

        let mut coordinates = Vec::new();
        for x in x1..x2 {
            for y in y1..y2 {
                for z in z1..z2 {
                    coordinates.push(Coordinate3D::new(
                        base.x + x as f64,
                        base.y + y as f64,
                        base.z + z as f64,
                    ));
                }
            }
        }
        Ok(coordinates)
    }
}

/// Strip bracket characters from a range token and split out its numbers,
/// checking the count.
fn range_numbers(token: &str, expected: usize) -> Result<Vec<String>> {
    let cleaned: String = token
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | '[' | ']'))
        .collect();

    let numbers: Vec<String> = cleaned.split(',').map(str::to_string).collect();

    if numbers.len() != expected {
        return Err(LevelError::format(format!(
            "range literal `{}` has {} numbers (expected {})",
            token,
            numbers.len(),
            expected
        )));
    }

    Ok(numbers)
}

/// Decode a full coordinate field: literals joined by `*`, spaces removed.
pub(crate) fn parse_coordinate_field<C: ParseCoordinate>(field: &str) -> Result<Vec<C>> {
    let cleaned: String = field.chars().filter(|c| *c != ' ').collect();
    if cleaned.is_empty() {
        return Err(LevelError::format("empty coordinate field"));
    }

    let mut coordinates = Vec::new();
    for token in cleaned.split('*') {
        if token.starts_with('(') {
            coordinates.extend(C::parse_range(token)?);
        } else {
            coordinates.push(C::parse_point(token)?);
        }
    }
    Ok(coordinates)
}

/// Decode a 2D coordinate field (point and range literals joined by `*`).
pub fn parse_coordinates_2d(field: &str) -> Result<Vec<Coordinate2D>> {
    parse_coordinate_field(field)
}

/// Decode a 3D coordinate field (point and range literals joined by `*`).
pub fn parse_coordinates_3d(field: &str) -> Result<Vec<Coordinate3D>> {
    parse_coordinate_field(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_point() {
        let coords = parse_coordinates_2d("[0, 0]").unwrap();
        assert_eq!(coords, vec![Coordinate2D::ORIGIN]);
    }

    #[test]
    fn test_inline_range_expansion() {
        // Half-open bounds: x and y each run 0..2, base (0, 0).
        let coords = parse_coordinates_2d("(0,2,0,2,0,0)").unwrap();
        assert_eq!(
            coords,
            vec![
                Coordinate2D::new(0.0, 0.0),
                Coordinate2D::new(0.0, 1.0),
                Coordinate2D::new(1.0, 0.0),
                Coordinate2D::new(1.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_inline_range_base_offset() {
        let coords = parse_coordinates_2d("(0,2,0,1,5,-3)").unwrap();
        assert_eq!(
            coords,
            vec![Coordinate2D::new(5.0, -3.0), Coordinate2D::new(6.0, -3.0)]
        );
    }

    #[test]
    fn test_inline_range_3d() {
        let coords = parse_coordinates_3d("(0,2,0,2,0,2,0,0,0)").unwrap();
        assert_eq!(coords.len(), 8);
        assert_eq!(coords[0], Coordinate3D::new(0.0, 0.0, 0.0));
        // z varies fastest, x slowest.
        assert_eq!(coords[1], Coordinate3D::new(0.0, 0.0, 1.0));
        assert_eq!(coords[7], Coordinate3D::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_multiplier_composition() {
        let coords = parse_coordinates_2d("[0, 1]*[0, 2]").unwrap();
        assert_eq!(
            coords,
            vec![Coordinate2D::new(0.0, 1.0), Coordinate2D::new(0.0, 2.0)]
        );
    }

    #[test]
    fn test_multiplier_mixing_point_and_range() {
        let coords = parse_coordinates_2d("[9, 9]*(0,2,0,1,0,0)").unwrap();
        assert_eq!(
            coords,
            vec![
                Coordinate2D::new(9.0, 9.0),
                Coordinate2D::new(0.0, 0.0),
                Coordinate2D::new(1.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_no_deduplication() {
        let coords = parse_coordinates_2d("[0, 0]*[0, 0]").unwrap();
        assert_eq!(coords.len(), 2);
    }

    #[test]
    fn test_range_wrong_count() {
        let result = parse_coordinates_2d("(0,2,0,2)");
        assert!(matches!(result, Err(LevelError::Format { .. })));
    }

    #[test]
    fn test_range_non_numeric() {
        let result = parse_coordinates_2d("(0,2,0,2,a,0)");
        assert!(matches!(result, Err(LevelError::NumericParse { .. })));
    }

    #[test]
    fn test_empty_field() {
        let result = parse_coordinates_2d("   ");
        assert!(matches!(result, Err(LevelError::Format { .. })));
    }

    #[test]
    fn test_empty_range_produces_nothing() {
        let coords = parse_coordinates_2d("(0,0,0,5,0,0)").unwrap();
        assert!(coords.is_empty());
    }
}
