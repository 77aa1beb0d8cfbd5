// File: crates/combo-core/src/lib.rs
// Summary: Core library entry point; exports the combination chart drawing pass.

pub mod axis;
pub mod bar;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod gradient;
pub mod options;
pub mod path;
pub mod points;
pub mod series;
pub mod surface;
pub mod theme;
pub mod types;

pub use axis::AxisLayout;
pub use bar::{bar_area_rect, compute_bar_rect, ItemLayout};
pub use chart::{CombinationChart, DrawPassHandler};
pub use error::ChartError;
pub use geometry::{Point, Rect, Size};
pub use gradient::{build_gradient, LinearGradient, TileMode};
pub use options::ChartOptions;
pub use path::{build_series_path, PathSegment, SeriesPath};
pub use points::SeriesPoints;
pub use series::{Entry, Series, SeriesId, SeriesKind};
pub use surface::{DrawOp, RecordingSurface, Stroke, StrokePaint, Surface};
pub use theme::Theme;
pub use types::{Color, LineMode, PointMode};
