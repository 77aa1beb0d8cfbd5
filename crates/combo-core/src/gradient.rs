// File: crates/combo-core/src/gradient.rs
// Summary: Horizontal linear gradient derived from per-entry colors.

use crate::geometry::Point;
use crate::series::Entry;
use crate::types::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TileMode {
    /// Colors beyond the endpoints repeat the edge color.
    #[default]
    Clamp,
}

/// Linear gradient between two points.
///
/// `positions == None` lets the backend spread `colors` evenly between
/// `start` and `end`.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub colors: Vec<Color>,
    pub positions: Option<Vec<f32>>,
    pub tile_mode: TileMode,
}

/// Gradient from the leftmost to the rightmost of `points`, one stop per entry.
///
/// Stops follow entry order and count, not the x of the plotted points; when
/// the two diverge the stops drift from the points they stand for. Returns
/// `None` when `points` or `entries` is empty.
pub fn build_gradient(
    points: &[Point],
    entries: &[Entry],
    override_color: Option<Color>,
    alpha: u8,
) -> Option<LinearGradient> {
    if entries.is_empty() {
        return None;
    }
    let (x_min, x_max) = points.iter().fold(None, |acc: Option<(f32, f32)>, p| match acc {
        None => Some((p.x, p.x)),
        Some((lo, hi)) => Some((lo.min(p.x), hi.max(p.x))),
    })?;

    let colors = entries
        .iter()
        .map(|e| override_color.unwrap_or(e.color).with_alpha(alpha))
        .collect();

    Some(LinearGradient {
        start: Point::new(x_min, 0.0),
        end: Point::new(x_max, 0.0),
        colors,
        positions: None,
        tile_mode: TileMode::Clamp,
    })
}
