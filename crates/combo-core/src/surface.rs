// File: crates/combo-core/src/surface.rs
// Summary: Drawing surface abstraction, plus a recording implementation for headless inspection.

use crate::geometry::{Point, Rect};
use crate::gradient::LinearGradient;
use crate::path::{PathSegment, SeriesPath};
use crate::types::{Color, PointMode};

#[derive(Clone, Debug, PartialEq)]
pub enum StrokePaint {
    Solid(Color),
    Gradient(LinearGradient),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub paint: StrokePaint,
    pub width: f32,
    pub anti_alias: bool,
}

/// What the drawing pass needs from a canvas.
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Draw a point of diameter/side `size` centered on `center`.
    fn draw_point(&mut self, center: Point, color: Color, size: f32, mode: PointMode);
    fn stroke_path(&mut self, path: &SeriesPath, stroke: &Stroke);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    FillRect { rect: Rect, color: Color },
    Point { center: Point, color: Color, size: f32, mode: PointMode },
    StrokePath { path: SeriesPath, stroke: Stroke },
}

/// Surface that keeps every draw call in order instead of rasterizing it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rects(&self) -> impl Iterator<Item = (&Rect, &Color)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillRect { rect, color } => Some((rect, color)),
            _ => None,
        })
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Point { center, .. } => Some(center),
            _ => None,
        })
    }

    pub fn paths(&self) -> impl Iterator<Item = (&SeriesPath, &Stroke)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::StrokePath { path, stroke } => Some((path, stroke)),
            _ => None,
        })
    }

    /// Number of cubic segments across all stroked paths.
    pub fn cubic_count(&self) -> usize {
        self.paths()
            .flat_map(|(p, _)| p.segments.iter())
            .filter(|s| matches!(s, PathSegment::Cubic { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn draw_point(&mut self, center: Point, color: Color, size: f32, mode: PointMode) {
        self.ops.push(DrawOp::Point { center, color, size, mode });
    }

    fn stroke_path(&mut self, path: &SeriesPath, stroke: &Stroke) {
        self.ops.push(DrawOp::StrokePath { path: path.clone(), stroke: stroke.clone() });
    }
}
