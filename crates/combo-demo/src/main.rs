// File: crates/combo-demo/src/main.rs
// Summary: Demo loads series rows from CSV and renders a combination chart to PNG.
// Usage: combo-demo [data.csv] [options.toml] [out.png]

use anyhow::{Context, Result};
use combo_core::{AxisLayout, ChartOptions, Color, CombinationChart, Entry, Series, SeriesKind};
use combo_render_skia::{RenderOptions, SkiaRenderer};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DemoConfig {
    theme: String,
    width: f32,
    height: f32,
    animation_progress: f32,
    chart: ChartOptions,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            width: 1024.0,
            height: 640.0,
            animation_progress: 1.0,
            chart: ChartOptions::default(),
        }
    }
}

/// One CSV row: a single entry of a named series.
#[derive(Debug, Deserialize)]
struct Row {
    series: String,
    kind: String,
    label: Option<String>,
    value: f32,
    color: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let data = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("crates/combo-demo/data/sample.csv"));
    let config = match args.next() {
        Some(p) => load_config(Path::new(&p))?,
        None => DemoConfig::default(),
    };
    let out = args.next().map(PathBuf::from).unwrap_or_else(|| out_name_for(&data));

    let theme = combo_core::theme::find(&config.theme);
    let series = load_series_csv(&data, &theme)
        .with_context(|| format!("failed to load CSV '{}'", data.display()))?;
    if series.is_empty() {
        anyhow::bail!("no series loaded from '{}'; check headers.", data.display());
    }
    info!(path = %data.display(), series = series.len(), theme = theme.name, "loaded data");

    let mut chart = CombinationChart::new(config.chart);
    chart.set_animation_progress(config.animation_progress);

    let renderer = SkiaRenderer::new(RenderOptions {
        layout: AxisLayout::new(config.width, config.height),
        background: theme.background,
    });
    renderer.render_to_png(&mut chart, &series, &out)?;
    info!(path = %out.display(), "wrote chart");
    Ok(())
}

fn load_config(path: &Path) -> Result<DemoConfig> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Produce output file name like target/out/combo_<stem>.png
fn out_name_for(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("combo_{stem}.png"))
}

fn load_series_csv(path: &Path, theme: &combo_core::Theme) -> Result<Vec<Series>> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    series_from_rows(rdr, theme)
}

/// Group rows into series in first-seen order.
///
/// Bars always take the theme color. A point series keeps per-entry colors
/// (and thus a gradient line) when every row carries one.
fn series_from_rows<R: std::io::Read>(
    mut rdr: csv::Reader<R>,
    theme: &combo_core::Theme,
) -> Result<Vec<Series>> {
    let mut series: Vec<Series> = Vec::new();
    let mut all_colored: Vec<bool> = Vec::new();

    for (line, rec) in rdr.deserialize::<Row>().enumerate() {
        let row = rec.with_context(|| format!("row {}", line + 1))?;
        let kind = match row.kind.to_ascii_lowercase().as_str() {
            "bar" => SeriesKind::Bar,
            "point" | "line" => SeriesKind::Point,
            other => anyhow::bail!("row {}: unknown series kind '{other}'", line + 1),
        };

        let idx = match series.iter().position(|s| s.id.as_str() == row.series) {
            Some(i) if series[i].kind != kind => anyhow::bail!(
                "row {}: series '{}' was {:?}, not {:?}",
                line + 1,
                row.series,
                series[i].kind,
                kind
            ),
            Some(i) => i,
            None => {
                series.push(Series::new(row.series.clone(), kind));
                all_colored.push(true);
                series.len() - 1
            }
        };

        let fallback = theme.series_color(idx);
        let color = match row.color.as_deref().filter(|c| !c.is_empty()) {
            Some(hex) => parse_color(hex).with_context(|| format!("row {}: bad color", line + 1))?,
            None => {
                all_colored[idx] = false;
                fallback
            }
        };
        let mut entry = Entry::new(row.value, color);
        if let Some(label) = row.label {
            entry = entry.with_label(label);
        }
        series[idx].push(entry);
    }

    for (i, s) in series.iter_mut().enumerate() {
        if s.kind == SeriesKind::Bar || !all_colored[i] {
            s.color = Some(theme.series_color(i));
        }
    }
    Ok(series)
}

/// Parse `#RRGGBB` or `#AARRGGBB`.
fn parse_color(hex: &str) -> Result<Color> {
    let digits = hex.trim_start_matches('#');
    let v = u32::from_str_radix(digits, 16).with_context(|| format!("'{hex}' is not hex"))?;
    let byte = |shift: u32| ((v >> shift) & 0xff) as u8;
    match digits.len() {
        6 => Ok(Color::from_rgb(byte(16), byte(8), byte(0))),
        8 => Ok(Color::from_argb(byte(24), byte(16), byte(8), byte(0))),
        n => anyhow::bail!("'{hex}' has {n} hex digits, expected 6 or 8"),
    }
}
