//! Geometric primitives and connector geometry.
//!
//! This module provides the geometric types used throughout Classdraw and the
//! pure functions that turn connector segments into drawable primitives.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Size`] - Width and height dimensions
//! - [`arrowhead`] - Side vertices of an arrowhead anchored on a segment
//! - [`rhombus`] - The four vertices of a diamond decoration
//! - [`DashSegments`] - An iterator over the dashes of a dashed segment
//!
//! # Coordinate System
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Origin at the top-left corner, Y increasing downward, matching raster
//! image coordinates.

use serde::Deserialize;

/// A 2D point representing a position in diagram coordinate space.
///
/// Deserializes from a `[x, y]` pair.
///
/// # Examples
///
/// ```
/// # use classdraw_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(from = "(f32, f32)")]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Multiplies both coordinates by the given factor.
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns the point `t` of the way from `self` to `other`.
    pub fn lerp(self, other: Point, t: f32) -> Self {
        other.sub_point(self).scale(t).add_point(self)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

// =============================================================================
// Arrowheads
// =============================================================================

/// Parameters for placing arrowhead and rhombus vertices on a segment.
///
/// | Field | Default |
/// |-------|---------|
/// | `base_ratio` | `0.8` |
/// | `axis_offset` | `5.0` |
/// | `oblique_offset` | `6.0` |
///
/// Axis-aligned and oblique segments use different offsets so that existing
/// diagrams keep their look.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ArrowheadGeometry {
    /// Fraction of the segment, measured from the tail, where the base sits.
    pub base_ratio: f32,
    /// Half width of the head on vertical and horizontal segments.
    pub axis_offset: f32,
    /// Half width of the head on oblique segments.
    pub oblique_offset: f32,
}

impl Default for ArrowheadGeometry {
    fn default() -> Self {
        Self {
            base_ratio: 0.8,
            axis_offset: 5.0,
            oblique_offset: 6.0,
        }
    }
}

/// The side vertices and base point of an arrowhead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrowhead {
    left: Point,
    right: Point,
    base: Point,
}

impl Arrowhead {
    /// The first side vertex.
    pub fn left(&self) -> Point {
        self.left
    }

    /// The second side vertex, mirrored from [`left`](Self::left) across the segment.
    pub fn right(&self) -> Point {
        self.right
    }

    /// The point on the segment the side vertices are anchored to.
    pub fn base(&self) -> Point {
        self.base
    }
}

/// Computes the arrowhead vertices for the segment from `tail` to `tip`.
///
/// The base lies at `base_ratio` of the segment length from the tail. The two
/// side vertices are offset perpendicular to the segment, by `axis_offset` for
/// vertical and horizontal segments and `oblique_offset` otherwise.
///
/// Returns `None` for a zero-length segment.
///
/// # Examples
///
/// ```
/// # use classdraw_core::geometry::{arrowhead, ArrowheadGeometry, Point};
/// let head = arrowhead(
///     Point::new(0.0, 0.0),
///     Point::new(100.0, 0.0),
///     &ArrowheadGeometry::default(),
/// )
/// .unwrap();
/// assert_eq!(head.base(), Point::new(80.0, 0.0));
/// assert_eq!(head.left(), Point::new(80.0, 5.0));
/// assert_eq!(head.right(), Point::new(80.0, -5.0));
/// ```
pub fn arrowhead(tail: Point, tip: Point, geometry: &ArrowheadGeometry) -> Option<Arrowhead> {
    if tail == tip {
        return None;
    }

    let base = tail.lerp(tip, geometry.base_ratio);
    let offset = if tail.x() == tip.x() {
        Point::new(-geometry.axis_offset, 0.0)
    } else if tail.y() == tip.y() {
        Point::new(0.0, geometry.axis_offset)
    } else {
        let delta = tip.sub_point(tail);
        let alpha = delta.y().atan2(delta.x()) - 90f32.to_radians();
        Point::new(alpha.cos(), alpha.sin()).scale(geometry.oblique_offset)
    };

    Some(Arrowhead {
        left: base.add_point(offset),
        right: base.sub_point(offset),
        base,
    })
}

/// Computes the four vertices of a rhombus whose front point is `tip`.
///
/// The back vertex is the arrowhead base reflected away from the tip, so the
/// returned vertices are `[left, back, right, tip]` in drawing order.
///
/// Returns `None` for a zero-length segment.
pub fn rhombus(tail: Point, tip: Point, geometry: &ArrowheadGeometry) -> Option<[Point; 4]> {
    let head = arrowhead(tail, tip, geometry)?;
    let back = head.base().add_point(head.base().sub_point(tip));
    Some([head.left(), back, head.right(), tip])
}

// =============================================================================
// Dashes
// =============================================================================

/// Dash layout for dashed connector lines.
///
/// A dash of `length` starts every `length * gap_ratio` along the line.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashPattern {
    /// Length of each dash.
    pub length: f32,
    /// Distance between dash starts, as a multiple of `length`.
    pub gap_ratio: f32,
}

impl DashPattern {
    /// Distance between the starts of two consecutive dashes.
    pub fn step(&self) -> f32 {
        self.length * self.gap_ratio
    }
}

impl Default for DashPattern {
    fn default() -> Self {
        Self {
            length: 5.0,
            gap_ratio: 2.0,
        }
    }
}

/// Iterator over the dashes of a dashed segment, as `(start, end)` pairs.
///
/// The iterator is a pure function of its inputs; cloning it restarts from
/// the same position.
///
/// # Examples
///
/// ```
/// # use classdraw_core::geometry::{DashPattern, DashSegments, Point};
/// let dashes: Vec<_> = DashSegments::new(
///     Point::new(0.0, 0.0),
///     Point::new(25.0, 0.0),
///     &DashPattern::default(),
/// )
/// .collect();
/// assert_eq!(dashes.len(), 3);
/// assert_eq!(dashes[2], (Point::new(20.0, 0.0), Point::new(25.0, 0.0)));
/// ```
#[derive(Debug, Clone)]
pub struct DashSegments {
    origin: Point,
    direction: Point,
    length: f32,
    dash_length: f32,
    step: f32,
    index: usize,
    count: usize,
}

impl DashSegments {
    pub fn new(from: Point, to: Point, pattern: &DashPattern) -> Self {
        let delta = to.sub_point(from);
        let length = if delta.y() == 0.0 {
            delta.x().abs()
        } else if delta.x() == 0.0 {
            delta.y().abs()
        } else {
            delta.hypot()
        };

        let direction = if length > 0.0 {
            delta.scale(1.0 / length)
        } else {
            Point::default()
        };

        let step = pattern.step();
        let count = if step > 0.0 && pattern.length > 0.0 {
            (length / step).ceil() as usize
        } else {
            0
        };

        Self {
            origin: from,
            direction,
            length,
            dash_length: pattern.length,
            step,
            index: 0,
            count,
        }
    }

    /// Length of the whole segment being dashed.
    pub fn segment_length(&self) -> f32 {
        self.length
    }

    fn point_at(&self, distance: f32) -> Point {
        self.direction.scale(distance).add_point(self.origin)
    }
}

impl Iterator for DashSegments {
    type Item = (Point, Point);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }

        let start = (self.index as f32 * self.step).min(self.length);
        let end = (start + self.dash_length).min(self.length);
        self.index += 1;

        Some((self.point_at(start), self.point_at(end)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn assert_point_eq(actual: Point, expected: Point) {
        assert_approx_eq!(f32, actual.x(), expected.x(), epsilon = 1e-4);
        assert_approx_eq!(f32, actual.y(), expected.y(), epsilon = 1e-4);
    }

    #[test]
    fn test_point_lerp() {
        let a = Point::new(0.0, 10.0);
        let b = Point::new(100.0, 50.0);
        assert_point_eq(a.lerp(b, 0.8), Point::new(80.0, 42.0));
        assert_point_eq(a.lerp(b, 0.0), a);
        assert_point_eq(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_point_deserialize_from_pair() {
        let point: Point = serde_json::from_str("[12.5, 40]").unwrap();
        assert_eq!(point, Point::new(12.5, 40.0));
    }

    #[test]
    fn test_arrowhead_horizontal() {
        let head = arrowhead(
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            &ArrowheadGeometry::default(),
        )
        .unwrap();

        assert_point_eq(head.base(), Point::new(80.0, 0.0));
        assert_point_eq(head.left(), Point::new(80.0, 5.0));
        assert_point_eq(head.right(), Point::new(80.0, -5.0));
    }

    #[test]
    fn test_arrowhead_vertical() {
        let head = arrowhead(
            Point::new(50.0, 100.0),
            Point::new(50.0, 0.0),
            &ArrowheadGeometry::default(),
        )
        .unwrap();

        assert_point_eq(head.base(), Point::new(50.0, 20.0));
        assert_point_eq(head.left(), Point::new(45.0, 20.0));
        assert_point_eq(head.right(), Point::new(55.0, 20.0));
    }

    #[test]
    fn test_arrowhead_oblique_uses_wider_offset() {
        let tail = Point::new(0.0, 0.0);
        let tip = Point::new(30.0, 40.0);
        let head = arrowhead(tail, tip, &ArrowheadGeometry::default()).unwrap();

        assert_point_eq(head.base(), Point::new(24.0, 32.0));
        let left_offset = head.left().sub_point(head.base()).hypot();
        let right_offset = head.right().sub_point(head.base()).hypot();
        assert_approx_eq!(f32, left_offset, 6.0, epsilon = 1e-4);
        assert_approx_eq!(f32, right_offset, 6.0, epsilon = 1e-4);

        // Perpendicular to the segment direction
        let direction = tip.sub_point(tail);
        let side = head.left().sub_point(head.base());
        let dot = direction.x() * side.x() + direction.y() * side.y();
        assert_approx_eq!(f32, dot, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_arrowhead_degenerate_segment() {
        let point = Point::new(10.0, 10.0);
        assert!(arrowhead(point, point, &ArrowheadGeometry::default()).is_none());
        assert!(rhombus(point, point, &ArrowheadGeometry::default()).is_none());
    }

    #[test]
    fn test_arrowhead_custom_geometry() {
        let geometry = ArrowheadGeometry {
            base_ratio: 0.5,
            axis_offset: 10.0,
            oblique_offset: 12.0,
        };
        let head = arrowhead(Point::new(0.0, 0.0), Point::new(0.0, 40.0), &geometry).unwrap();
        assert_point_eq(head.base(), Point::new(0.0, 20.0));
        assert_point_eq(head.left(), Point::new(-10.0, 20.0));
        assert_point_eq(head.right(), Point::new(10.0, 20.0));
    }

    #[test]
    fn test_rhombus_vertices() {
        let tail = Point::new(0.0, 0.0);
        let tip = Point::new(100.0, 0.0);
        let [left, back, right, front] = rhombus(tail, tip, &ArrowheadGeometry::default()).unwrap();

        assert_point_eq(left, Point::new(80.0, 5.0));
        assert_point_eq(back, Point::new(60.0, 0.0));
        assert_point_eq(right, Point::new(80.0, -5.0));
        assert_point_eq(front, tip);
    }

    #[test]
    fn test_dash_segments_horizontal() {
        let dashes: Vec<_> = DashSegments::new(
            Point::new(0.0, 0.0),
            Point::new(30.0, 0.0),
            &DashPattern::default(),
        )
        .collect();

        assert_eq!(
            dashes,
            vec![
                (Point::new(0.0, 0.0), Point::new(5.0, 0.0)),
                (Point::new(10.0, 0.0), Point::new(15.0, 0.0)),
                (Point::new(20.0, 0.0), Point::new(25.0, 0.0)),
            ]
        );
    }

    #[test]
    fn test_dash_segments_last_dash_clipped() {
        let dashes: Vec<_> = DashSegments::new(
            Point::new(0.0, 0.0),
            Point::new(0.0, -22.0),
            &DashPattern::default(),
        )
        .collect();

        assert_eq!(dashes.len(), 3);
        let (start, end) = dashes[2];
        assert_point_eq(start, Point::new(0.0, -20.0));
        assert_point_eq(end, Point::new(0.0, -22.0));
    }

    #[test]
    fn test_dash_segments_zero_length() {
        let point = Point::new(3.0, 4.0);
        let mut dashes = DashSegments::new(point, point, &DashPattern::default());
        assert_eq!(dashes.segment_length(), 0.0);
        assert!(dashes.next().is_none());
    }

    #[test]
    fn test_dash_segments_non_positive_pattern() {
        let pattern = DashPattern {
            length: 0.0,
            gap_ratio: 2.0,
        };
        let count = DashSegments::new(Point::new(0.0, 0.0), Point::new(50.0, 0.0), &pattern).count();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_dash_segments_restartable() {
        let dashes = DashSegments::new(
            Point::new(0.0, 0.0),
            Point::new(40.0, 30.0),
            &DashPattern::default(),
        );
        let first: Vec<_> = dashes.clone().collect();
        let second: Vec<_> = dashes.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }
}
