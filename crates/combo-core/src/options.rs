// File: crates/combo-core/src/options.rs
// Summary: Recognized chart options with their defaults; deserializable from config files.

use serde::Deserialize;

use crate::types::{LineMode, PointMode, DEFAULT_BAR_AREA_ALPHA, DEFAULT_MIN_BAR_HEIGHT};

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Alpha of the area under each item; 0 disables it.
    pub bar_area_alpha: u8,
    pub min_bar_height: f32,
    pub point_size: f32,
    pub point_mode: PointMode,
    pub line_size: f32,
    pub line_mode: LineMode,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            bar_area_alpha: DEFAULT_BAR_AREA_ALPHA,
            min_bar_height: DEFAULT_MIN_BAR_HEIGHT,
            point_size: 14.0,
            point_mode: PointMode::Circle,
            line_size: 3.0,
            line_mode: LineMode::Spline,
        }
    }
}
