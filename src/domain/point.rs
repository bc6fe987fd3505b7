//! Lattice point and its textual renderings

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::error::DomainError;

/// How a point is rendered on a single output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum PointFormat {
    /// `(x,y)`
    Canonical,
    /// `x y`
    #[default]
    Bare,
}

/// Format names are case-insensitive.
impl FromStr for PointFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "canonical" => Ok(Self::Canonical),
            "bare" => Ok(Self::Bare),
            _ => Err(DomainError::InvalidFormat(s.to_string())),
        }
    }
}

impl TryFrom<String> for PointFormat {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A position on the two-dimensional integer lattice.
///
/// No bounds are enforced; coordinates wrap around at the `i64` limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Both coordinates set to `n`.
    pub fn splat(n: i64) -> Self {
        Self { x: n, y: n }
    }

    pub fn origin() -> Self {
        Self::default()
    }

    /// Translate in place by `(dx, dy)`, wrapping on overflow.
    pub fn move_by(&mut self, dx: i64, dy: i64) {
        self.x = self.x.wrapping_add(dx);
        self.y = self.y.wrapping_add(dy);
    }

    pub fn render(&self, format: PointFormat) -> String {
        match format {
            PointFormat::Canonical => format!("({},{})", self.x, self.y),
            PointFormat::Bare => format!("{} {}", self.x, self.y),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Parses `x,y` or `(x,y)`.
impl FromStr for Point {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidPoint(s.to_string());

        let trimmed = s.trim();
        let inner = match trimmed.strip_prefix('(') {
            Some(rest) => rest.strip_suffix(')').ok_or_else(invalid)?,
            None => trimmed,
        };

        let (x, y) = inner.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse::<i64>().map_err(|_| invalid())?;
        let y = y.trim().parse::<i64>().map_err(|_| invalid())?;
        Ok(Self::new(x, y))
    }
}

impl TryFrom<String> for Point {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_constructors_when_built_then_coordinates_match() {
        assert_eq!(Point::origin(), Point::new(0, 0));
        assert_eq!(Point::splat(7), Point::new(7, 7));
        assert_eq!(Point::default(), Point::origin());
    }

    #[test]
    fn given_point_when_moved_then_offsets_are_added() {
        let mut p = Point::new(2, -3);
        p.move_by(-1, 1);
        assert_eq!(p, Point::new(1, -2));
        p.move_by(0, 0);
        assert_eq!(p, Point::new(1, -2));
    }

    #[test]
    fn given_point_at_limits_when_moved_past_them_then_wraps() {
        let mut p = Point::new(i64::MAX, i64::MIN);
        p.move_by(1, -1);
        assert_eq!(p, Point::new(i64::MIN, i64::MAX));
        p.move_by(-1, 1);
        assert_eq!(p, Point::new(i64::MAX, i64::MIN));
    }

    #[test]
    fn given_negative_point_when_rendered_then_both_formats_match() {
        let p = Point::new(-4, 12);
        assert_eq!(p.render(PointFormat::Canonical), "(-4,12)");
        assert_eq!(p.render(PointFormat::Bare), "-4 12");
        assert_eq!(p.to_string(), "(-4,12)");
    }

    #[test]
    fn given_point_text_when_parsed_then_accepts_both_spellings() {
        assert_eq!("3,-2".parse::<Point>(), Ok(Point::new(3, -2)));
        assert_eq!("(3,-2)".parse::<Point>(), Ok(Point::new(3, -2)));
        assert_eq!(" ( 1 , 2 ) ".parse::<Point>(), Ok(Point::new(1, 2)));
    }

    #[test]
    fn given_malformed_point_text_when_parsed_then_fails() {
        for bad in ["", "3", "3;4", "(3,4", "a,b", "1,2,3"] {
            assert!(bad.parse::<Point>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn given_format_names_when_parsed_then_case_insensitive() {
        assert_eq!("Canonical".parse::<PointFormat>(), Ok(PointFormat::Canonical));
        assert_eq!("bare".parse::<PointFormat>(), Ok(PointFormat::Bare));
        assert!("pretty".parse::<PointFormat>().is_err());
    }
}
