// File: crates/combo-core/src/chart.rs
// Summary: Combination chart; implements the per-item and end-of-pass drawing callbacks.

use tracing::{debug, trace};

use crate::bar::{bar_area_rect, compute_bar_rect, ItemLayout};
use crate::error::{ChartError, Result};
use crate::geometry::{Rect, Size};
use crate::gradient::build_gradient;
use crate::options::ChartOptions;
use crate::path::build_series_path;
use crate::points::SeriesPoints;
use crate::series::{Series, SeriesKind};
use crate::surface::{Stroke, StrokePaint, Surface};
use crate::types::{Color, LineMode};

/// Callbacks an axis host invokes during one content draw pass.
///
/// Call order: `on_pass_begin` once, then for every visible item
/// `on_draw_bar_area` followed by `on_draw_item`, then `on_draw_pass_end` once.
pub trait DrawPassHandler {
    fn on_pass_begin(&mut self, series: &[Series]) -> Result<()>;

    fn on_draw_bar_area(
        &mut self,
        surface: &mut dyn Surface,
        item: &ItemLayout,
        color: Color,
        value: f32,
    ) -> Result<()>;

    fn on_draw_item(
        &mut self,
        surface: &mut dyn Surface,
        series: &Series,
        item: &ItemLayout,
        color: Color,
    ) -> Result<()>;

    fn on_draw_pass_end(
        &mut self,
        surface: &mut dyn Surface,
        series: &[Series],
        item_size: Size,
    ) -> Result<()>;
}

/// Bars and point/line series sharing one categorical axis.
#[derive(Debug)]
pub struct CombinationChart {
    pub options: ChartOptions,
    animation_progress: f32,
    points: SeriesPoints,
}

impl Default for CombinationChart {
    fn default() -> Self {
        Self::new(ChartOptions::default())
    }
}

impl CombinationChart {
    pub fn new(options: ChartOptions) -> Self {
        Self { options, animation_progress: 1.0, points: SeriesPoints::new() }
    }

    pub fn animation_progress(&self) -> f32 {
        self.animation_progress
    }

    /// Set the externally driven animation progress, clamped into [0, 1].
    pub fn set_animation_progress(&mut self, progress: f32) {
        self.animation_progress = progress.clamp(0.0, 1.0);
    }

    /// Points accumulated during the current pass.
    pub fn points(&self) -> &SeriesPoints {
        &self.points
    }

    /// Connect the accumulated points of every series and stroke the result.
    fn draw_series_lines(
        &self,
        surface: &mut dyn Surface,
        series: &[Series],
        item_size: Size,
    ) -> Result<()> {
        if self.options.line_mode == LineMode::None {
            return Ok(());
        }

        for s in series {
            let points = self
                .points
                .sequence_for(&s.id)
                .ok_or_else(|| ChartError::UnknownSeries(s.id.clone()))?;
            let Some(path) = build_series_path(points, self.options.line_mode, item_size.width)
            else {
                debug!(series = %s.id, points = points.len(), "not enough points for a line");
                continue;
            };

            let paint = match s.color {
                Some(color) => StrokePaint::Solid(color),
                None => build_gradient(points, &s.entries, s.color, u8::MAX)
                    .map(StrokePaint::Gradient)
                    .ok_or_else(|| ChartError::NoStrokeColor(s.id.clone()))?,
            };
            let stroke = Stroke { paint, width: self.options.line_size, anti_alias: true };

            trace!(series = %s.id, segments = path.len(), "stroking series line");
            surface.stroke_path(&path, &stroke);
        }
        Ok(())
    }
}

impl DrawPassHandler for CombinationChart {
    fn on_pass_begin(&mut self, series: &[Series]) -> Result<()> {
        trace!(series = series.len(), "draw pass begin");
        self.points.reset(series)
    }

    fn on_draw_bar_area(
        &mut self,
        surface: &mut dyn Surface,
        item: &ItemLayout,
        color: Color,
        value: f32,
    ) -> Result<()> {
        if self.options.bar_area_alpha == 0 {
            return Ok(());
        }
        let alpha = (f32::from(self.options.bar_area_alpha) * self.animation_progress) as u8;
        surface.fill_rect(bar_area_rect(item, value), color.with_alpha(alpha));
        Ok(())
    }

    fn on_draw_item(
        &mut self,
        surface: &mut dyn Surface,
        series: &Series,
        item: &ItemLayout,
        color: Color,
    ) -> Result<()> {
        match series.kind {
            SeriesKind::Bar => {
                let (location, size) = compute_bar_rect(item, self.options.min_bar_height);
                surface.fill_rect(Rect::new(location, size), color);
            }
            SeriesKind::Point => {
                let point = item.point_location();
                surface.draw_point(point, color, self.options.point_size, self.options.point_mode);
                self.points.record(&series.id, point)?;
            }
        }
        Ok(())
    }

    fn on_draw_pass_end(
        &mut self,
        surface: &mut dyn Surface,
        series: &[Series],
        item_size: Size,
    ) -> Result<()> {
        self.draw_series_lines(surface, series, item_size)?;
        trace!("draw pass end");
        Ok(())
    }
}
