// File: crates/combo-core/src/points.rs
// Summary: Per-pass accumulator of plotted screen points, keyed by series.

use indexmap::IndexMap;

use crate::error::{ChartError, Result};
use crate::geometry::Point;
use crate::series::{Series, SeriesId};

/// Transient store of the points each series contributed during one draw pass.
///
/// Lifetime is one pass: [`reset`](Self::reset) must run before any item is
/// drawn, and the content is consumed once when the pass ends.
#[derive(Debug, Default)]
pub struct SeriesPoints {
    points: IndexMap<SeriesId, Vec<Point>>,
}

impl SeriesPoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all recorded points and seed an empty sequence per series, in order.
    ///
    /// Fails on the first id seen twice; the points of two series must never
    /// share one sequence.
    pub fn reset<'a>(&mut self, series: impl IntoIterator<Item = &'a Series>) -> Result<()> {
        self.points.clear();
        for s in series {
            if self.points.insert(s.id.clone(), Vec::new()).is_some() {
                return Err(ChartError::DuplicateSeries(s.id.clone()));
            }
        }
        Ok(())
    }

    pub fn record(&mut self, series: &SeriesId, point: Point) -> Result<()> {
        self.points
            .get_mut(series)
            .ok_or_else(|| ChartError::UnknownSeries(series.clone()))?
            .push(point);
        Ok(())
    }

    /// Points recorded so far for `series`, `None` if it was not registered.
    pub fn sequence_for(&self, series: &SeriesId) -> Option<&[Point]> {
        self.points.get(series).map(Vec::as_slice)
    }

    /// Series and their points, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&SeriesId, &[Point])> {
        self.points.iter().map(|(id, pts)| (id, pts.as_slice()))
    }

    /// True when no point at all was recorded this pass.
    pub fn is_empty(&self) -> bool {
        self.points.values().all(Vec::is_empty)
    }
}
