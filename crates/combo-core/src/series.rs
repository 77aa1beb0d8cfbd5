// File: crates/combo-core/src/series.rs
// Summary: Series model for combination charts: bar or point/line series of colored entries.
// Notes:
// - Series are owned by the host and only borrowed by the drawing pass.
// - The draw mode is a plain enum field; the only behavioral difference is a
//   branch at item-draw time.

use std::fmt;

use crate::types::Color;

/// Identity of a series within one chart. Two series with the same id are the
/// same series as far as point accumulation is concerned.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SeriesId(String);

impl SeriesId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SeriesId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesKind {
    /// Filled bars from the axis origin.
    Bar,
    /// Plotted points, connected into a line at the end of the pass.
    Point,
}

/// One value within a series.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub value: f32,
    pub color: Color,
    /// Category label; carried for the host's axis, never drawn by the core.
    pub label: Option<String>,
}

impl Entry {
    pub fn new(value: f32, color: Color) -> Self {
        Self { value, color, label: None }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

#[derive(Clone, Debug)]
pub struct Series {
    pub id: SeriesId,
    pub kind: SeriesKind,
    /// `None` means "derive the color from each entry".
    pub color: Option<Color>,
    pub entries: Vec<Entry>,
}

impl Series {
    pub fn new(id: impl Into<String>, kind: SeriesKind) -> Self {
        Self { id: SeriesId::new(id), kind, color: None, entries: Vec::new() }
    }

    pub fn bars(id: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self { entries, ..Self::new(id, SeriesKind::Bar) }
    }

    pub fn points(id: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self { entries, ..Self::new(id, SeriesKind::Point) }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Min/max over entry values, `None` when the series is empty.
    pub fn value_range(&self) -> Option<(f32, f32)> {
        self.entries.iter().fold(None, |acc, e| match acc {
            None => Some((e.value, e.value)),
            Some((lo, hi)) => Some((lo.min(e.value), hi.max(e.value))),
        })
    }
}
