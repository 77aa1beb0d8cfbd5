// File: crates/combo-core/src/bar.rs
// Summary: Per-item layout handed over by the axis host, and bar geometry derived from it.

use crate::geometry::{Point, Rect, Size};

/// Screen-space layout of one item (one entry of one series) within the plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemLayout {
    /// Top of the plotting area.
    pub header_height: f32,
    /// Size of one category slot; its height is the plot height.
    pub item_size: Size,
    pub bar_size: Size,
    /// Y coordinate of value zero.
    pub origin: f32,
    pub bar_x: f32,
    pub bar_y: f32,
}

impl ItemLayout {
    /// Bottom bound of the plotting area.
    pub fn plot_bottom(&self) -> f32 {
        self.header_height + self.item_size.height
    }

    /// Left edge of the item's bar slot.
    pub fn bar_left(&self) -> f32 {
        self.bar_x - self.item_size.width / 2.0
    }

    /// Where a point-series item is plotted: the horizontal middle of its bar slot.
    pub fn point_location(&self) -> Point {
        Point::new(self.bar_left() + self.bar_size.width / 2.0, self.bar_y)
    }
}

/// Location and size of the bar for `item`, never shorter than `min_bar_height`.
///
/// A bar shorter than the floor is stretched to it, and pushed back up when
/// the stretched bar would cross the bottom of the plot. A tiny value just
/// above the origin on the far side can still overflow upward.
pub fn compute_bar_rect(item: &ItemLayout, min_bar_height: f32) -> (Point, Size) {
    let x = item.bar_left();
    let mut y = item.origin.min(item.bar_y);
    let raw = (item.origin - item.bar_y).abs();
    let mut height = min_bar_height.max(raw);

    if raw < min_bar_height {
        height = min_bar_height;
        if y + height > item.plot_bottom() {
            y = item.plot_bottom() - height;
        }
    }

    (Point::new(x, y), Size::new(item.bar_size.width, height))
}

/// Rectangle of the translucent area spanning from the plot edge on the
/// value's side of the axis to the item's y.
pub fn bar_area_rect(item: &ItemLayout, value: f32) -> Rect {
    let edge = if value > 0.0 { item.header_height } else { item.plot_bottom() };
    let height = (edge - item.bar_y).abs();
    let y = edge.min(item.bar_y);
    Rect::from_xywh(item.bar_left(), y, item.bar_size.width, height)
}
