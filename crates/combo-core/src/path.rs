// File: crates/combo-core/src/path.rs
// Summary: Line/spline path construction connecting the accumulated points of a series.

use crate::geometry::Point;
use crate::types::{LineMode, SPLINE_CONTROL_FACTOR};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    Line(Point),
    Cubic { c1: Point, c2: Point, to: Point },
}

/// Open path: a start point followed by segments in drawing order.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPath {
    pub start: Point,
    pub segments: Vec<PathSegment>,
}

impl SeriesPath {
    pub fn new(start: Point) -> Self {
        Self { start, segments: Vec::new() }
    }
    pub fn line_to(&mut self, to: Point) {
        self.segments.push(PathSegment::Line(to));
    }
    pub fn cubic_to(&mut self, c1: Point, c2: Point, to: Point) {
        self.segments.push(PathSegment::Cubic { c1, c2, to });
    }
    pub fn len(&self) -> usize {
        self.segments.len()
    }
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Control points of the cubic segment from `point` to `next`.
///
/// Both tangents are horizontal with the same magnitude at every point, so
/// steep value changes overshoot.
pub fn cubic_controls(point: Point, next: Point, item_width: f32) -> (Point, Point) {
    let offset = Point::new(item_width * SPLINE_CONTROL_FACTOR, 0.0);
    (point + offset, next - offset)
}

/// Connect `points` in order. Returns `None` for fewer than two points or
/// `LineMode::None`.
pub fn build_series_path(points: &[Point], mode: LineMode, item_width: f32) -> Option<SeriesPath> {
    let spline = match mode {
        LineMode::None => return None,
        LineMode::Straight => false,
        LineMode::Spline => true,
    };
    if points.len() < 2 {
        return None;
    }

    let mut path = SeriesPath::new(points[0]);
    for pair in points.windows(2) {
        let (point, next) = (pair[0], pair[1]);
        if spline {
            let (c1, c2) = cubic_controls(point, next, item_width);
            path.cubic_to(c1, c2, next);
        } else {
            path.line_to(next);
        }
    }
    Some(path)
}
