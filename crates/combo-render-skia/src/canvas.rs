// File: crates/combo-render-skia/src/canvas.rs
// Summary: Drawing surface implementation over a borrowed Skia canvas.

use combo_core::gradient::TileMode;
use combo_core::{
    Color, LinearGradient, PathSegment, Point, PointMode, Rect, SeriesPath, Stroke, StrokePaint,
    Surface,
};
use skia_safe as skia;

pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self {
        Self { canvas }
    }
}

pub(crate) fn to_skia_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_skia_point(p: Point) -> skia::Point {
    skia::Point::new(p.x, p.y)
}

fn to_skia_rect(r: Rect) -> skia::Rect {
    skia::Rect::from_xywh(r.location.x, r.location.y, r.size.width, r.size.height)
}

fn to_skia_tile_mode(mode: TileMode) -> skia::TileMode {
    match mode {
        TileMode::Clamp => skia::TileMode::Clamp,
    }
}

fn to_skia_path(path: &SeriesPath) -> skia::Path {
    let mut out = skia::Path::new();
    out.move_to(to_skia_point(path.start));
    for seg in &path.segments {
        match *seg {
            PathSegment::Line(to) => {
                out.line_to(to_skia_point(to));
            }
            PathSegment::Cubic { c1, c2, to } => {
                out.cubic_to(to_skia_point(c1), to_skia_point(c2), to_skia_point(to));
            }
        }
    }
    out
}

fn gradient_shader(g: &LinearGradient) -> Option<skia::Shader> {
    let colors: Vec<skia::Color> = g.colors.iter().copied().map(to_skia_color).collect();
    skia::Shader::linear_gradient(
        (to_skia_point(g.start), to_skia_point(g.end)),
        colors.as_slice(),
        g.positions.as_deref(),
        to_skia_tile_mode(g.tile_mode),
        None,
        None,
    )
}

impl Surface for SkiaSurface<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let mut paint = skia::Paint::default();
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(to_skia_color(color));
        self.canvas.draw_rect(to_skia_rect(rect), &paint);
    }

    fn draw_point(&mut self, center: Point, color: Color, size: f32, mode: PointMode) {
        let mut paint = skia::Paint::default();
        paint.set_style(skia::paint::Style::Fill);
        paint.set_anti_alias(true);
        paint.set_color(to_skia_color(color));

        let half = size * 0.5;
        match mode {
            PointMode::None => {}
            PointMode::Circle => {
                self.canvas.draw_circle(to_skia_point(center), half, &paint);
            }
            PointMode::Square => {
                let r = skia::Rect::from_xywh(center.x - half, center.y - half, size, size);
                self.canvas.draw_rect(r, &paint);
            }
        }
    }

    fn stroke_path(&mut self, path: &SeriesPath, stroke: &Stroke) {
        let mut paint = skia::Paint::default();
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(stroke.width);
        paint.set_anti_alias(stroke.anti_alias);

        match &stroke.paint {
            StrokePaint::Solid(color) => {
                paint.set_color(to_skia_color(*color));
            }
            StrokePaint::Gradient(g) => {
                paint.set_color(skia::Color::WHITE);
                match gradient_shader(g) {
                    Some(shader) => {
                        paint.set_shader(shader);
                    }
                    None => {
                        let stops = g.colors.len();
                        tracing::warn!(stops, "skia rejected gradient; stroking white")
                    }
                }
            }
        }

        self.canvas.draw_path(&to_skia_path(path), &paint);
    }
}
