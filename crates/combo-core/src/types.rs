// File: crates/combo-core/src/types.rs
// Summary: Shared types and constants (colors, point/line modes, defaults).

use serde::Deserialize;

/// Default fill alpha of the translucent area drawn under each item.
pub const DEFAULT_BAR_AREA_ALPHA: u8 = 32;
/// Default floor for bar heights, in pixels.
pub const DEFAULT_MIN_BAR_HEIGHT: f32 = 4.0;
/// Horizontal control-point offset of spline segments, as a fraction of item width.
pub const SPLINE_CONTROL_FACTOR: f32 = 0.8;

/// 8-bit ARGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::from_argb(255, 255, 255, 255);
    pub const RED: Color = Color::from_argb(255, 255, 0, 0);
    pub const GREEN: Color = Color::from_argb(255, 0, 255, 0);
    pub const BLUE: Color = Color::from_argb(255, 0, 0, 255);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// Same color with its alpha channel replaced.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Shape used when drawing a plotted point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointMode {
    None,
    #[default]
    Circle,
    Square,
}

/// How consecutive points of a series are connected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineMode {
    None,
    Straight,
    #[default]
    Spline,
}
