//! Polyline point lists
//!
//! The `points` attribute is a space-separated list of `x,y` pairs. Parsing
//! is deliberately lenient: a malformed coordinate becomes NaN and stays NaN
//! all the way back into the attribute.

use crate::utils::js_number::{js_number_str, parse_float, trim_js};
use std::fmt;

/// One polyline vertex
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

/// Ordered list of polyline vertices
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointList(Vec<Point>);

impl PointList {
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// Parse a `points` attribute value.
    ///
    /// The value is trimmed and split on single spaces, so `"1,2  3,4"`
    /// yields three points, the middle one all NaN. A token without a comma
    /// gets `y = NaN`; coordinates past the second are ignored.
    pub fn parse(s: &str) -> Self {
        let points = trim_js(s)
            .split(' ')
            .map(|token| {
                let mut coords = token.split(',').map(parse_float);
                let x = coords.next().unwrap_or(f64::NAN);
                let y = coords.next().unwrap_or(f64::NAN);
                Point::new(x, y)
            })
            .collect();
        Self(points)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Point> {
        self.0
    }
}

impl From<Vec<Point>> for PointList {
    fn from(points: Vec<Point>) -> Self {
        Self(points)
    }
}

impl FromIterator<Point> for PointList {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PointList {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Serializes back to `"x,y x,y ..."` with JS number formatting
impl fmt::Display for PointList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = ryu_js::Buffer::new();
        for (i, point) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(js_number_str(point.x, &mut buf))?;
            f.write_str(",")?;
            f.write_str(js_number_str(point.y, &mut buf))?;
        }
        Ok(())
    }
}

/// Parse a `points` attribute value
pub fn parse_points(s: &str) -> PointList {
    PointList::parse(s)
}

/// Format points as a `points` attribute value
pub fn format_points(points: &PointList) -> String {
    points.to_string()
}
