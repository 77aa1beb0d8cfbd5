// File: crates/combo-core/src/axis.rs
// Summary: Minimal categorical axis host: lays items out and drives a draw pass.
// Notes:
// - Stands in for a full axis-based chart framework; draws no ticks, labels or legends.

use crate::bar::ItemLayout;
use crate::chart::DrawPassHandler;
use crate::error::Result;
use crate::geometry::Size;
use crate::series::Series;
use crate::surface::Surface;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLayout {
    pub width: f32,
    pub height: f32,
    /// Horizontal inset on both sides of the plot.
    pub margin: f32,
    pub header_height: f32,
    pub footer_height: f32,
    /// Horizontal gap left on each side of a category's bar group.
    pub bar_padding: f32,
    /// Force the value range to include these bounds.
    pub min_value: Option<f32>,
    pub max_value: Option<f32>,
}

impl Default for AxisLayout {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 640.0,
            margin: 20.0,
            header_height: 40.0,
            footer_height: 40.0,
            bar_padding: 4.0,
            min_value: None,
            max_value: None,
        }
    }
}

impl AxisLayout {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, ..Self::default() }
    }

    /// Number of category slots: the longest series' entry count.
    pub fn item_count(series: &[Series]) -> usize {
        series.iter().map(|s| s.entries.len()).max().unwrap_or(0)
    }

    pub fn item_size(&self, items: usize) -> Size {
        let plot_w = (self.width - 2.0 * self.margin).max(0.0);
        let plot_h = (self.height - self.header_height - self.footer_height).max(0.0);
        Size::new(plot_w / items.max(1) as f32, plot_h)
    }

    pub fn bar_size(&self, item_size: Size, series_count: usize) -> Size {
        let group_w = (item_size.width - 2.0 * self.bar_padding).max(0.0);
        Size::new(group_w / series_count.max(1) as f32, item_size.height)
    }

    /// Value range covering zero, every entry and the forced bounds.
    pub fn value_range(&self, series: &[Series]) -> (f32, f32) {
        let mut lo = self.min_value.unwrap_or(0.0).min(0.0);
        let mut hi = self.max_value.unwrap_or(0.0).max(0.0);
        for (smin, smax) in series.iter().filter_map(Series::value_range) {
            lo = lo.min(smin);
            hi = hi.max(smax);
        }
        if (hi - lo).abs() < f32::EPSILON {
            hi = lo + 1.0;
        }
        (lo, hi)
    }

    /// Screen y of `value` within the plot.
    pub fn value_to_y(&self, value: f32, range: (f32, f32), item_height: f32) -> f32 {
        let (lo, hi) = range;
        self.header_height + (hi - value) / (hi - lo) * item_height
    }

    /// Layout of entry `index` of the `slot`-th series.
    pub fn item_layout(
        &self,
        index: usize,
        slot: usize,
        value: f32,
        item_size: Size,
        bar_size: Size,
        range: (f32, f32),
    ) -> ItemLayout {
        let item_left = self.margin + index as f32 * item_size.width;
        let bar_left = item_left + self.bar_padding + slot as f32 * bar_size.width;
        ItemLayout {
            header_height: self.header_height,
            item_size,
            bar_size,
            origin: self.value_to_y(0.0, range, item_size.height),
            bar_x: bar_left + item_size.width / 2.0,
            bar_y: self.value_to_y(value, range, item_size.height),
        }
    }

    /// Run one content pass over `series`, category by category.
    ///
    /// The end-of-pass callback runs exactly once, even with no items; an
    /// error from any callback aborts the pass.
    pub fn draw_content(
        &self,
        handler: &mut dyn DrawPassHandler,
        series: &[Series],
        surface: &mut dyn Surface,
    ) -> Result<()> {
        handler.on_pass_begin(series)?;

        let items = Self::item_count(series);
        let item_size = self.item_size(items);
        let bar_size = self.bar_size(item_size, series.len());
        let range = self.value_range(series);

        for index in 0..items {
            for (slot, s) in series.iter().enumerate() {
                let Some(entry) = s.entries.get(index) else { continue };
                let color = s.color.unwrap_or(entry.color);
                let item = self.item_layout(index, slot, entry.value, item_size, bar_size, range);
                handler.on_draw_bar_area(surface, &item, color, entry.value)?;
                handler.on_draw_item(surface, s, &item, color)?;
            }
        }

        handler.on_draw_pass_end(surface, series, item_size)
    }
}
