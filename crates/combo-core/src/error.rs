// File: crates/combo-core/src/error.rs
// Summary: Contract violations raised by the drawing pass.

use thiserror::Error;

use crate::series::SeriesId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    /// A point was recorded for a series the accumulator was not reset with.
    #[error("series `{0}` was not registered for this draw pass")]
    UnknownSeries(SeriesId),
    /// Two series of one pass share an id.
    #[error("series `{0}` appears more than once in this draw pass")]
    DuplicateSeries(SeriesId),
    /// A line was requested for a series with neither a color nor entries.
    #[error("series `{0}` has no color and no entries to derive a stroke from")]
    NoStrokeColor(SeriesId),
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
