// File: crates/combo-render-skia/src/raster.rs
// Summary: Headless rendering of a combination chart onto Skia CPU raster surfaces.

use anyhow::{Context, Result};
use combo_core::{AxisLayout, Color, DrawPassHandler, Series, Theme};
use skia_safe as skia;

use crate::canvas::{to_skia_color, SkiaSurface};

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Surface size and plot insets; the raster is `layout.width x layout.height`.
    pub layout: AxisLayout,
    pub background: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            layout: AxisLayout::default(),
            background: Theme::dark().background,
        }
    }
}

impl RenderOptions {
    fn dimensions(&self) -> (i32, i32) {
        (self.layout.width.ceil().max(1.0) as i32, self.layout.height.ceil().max(1.0) as i32)
    }
}

pub struct SkiaRenderer {
    pub options: RenderOptions,
}

impl SkiaRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Clear a fresh raster surface and run one draw pass of `chart` over `series`.
    fn draw(&self, chart: &mut dyn DrawPassHandler, series: &[Series]) -> Result<skia::Surface> {
        let (w, h) = self.options.dimensions();
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(to_skia_color(self.options.background));

        let mut target = SkiaSurface::new(canvas);
        self.options
            .layout
            .draw_content(chart, series, &mut target)
            .context("draw pass failed")?;
        tracing::debug!(width = w, height = h, series = series.len(), "rendered chart");
        Ok(surface)
    }

    pub fn render_to_png_bytes(
        &self,
        chart: &mut dyn DrawPassHandler,
        series: &[Series],
    ) -> Result<Vec<u8>> {
        let mut surface = self.draw(chart, series)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a PNG file, creating parent directories as needed.
    pub fn render_to_png(
        &self,
        chart: &mut dyn DrawPassHandler,
        series: &[Series],
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(chart, series)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create '{}'", parent.display()))?;
        }
        std::fs::write(path, bytes)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        Ok(())
    }

    /// Render to unpremultiplied RGBA8; returns (pixels, width, height, stride).
    pub fn render_to_rgba8(
        &self,
        chart: &mut dyn DrawPassHandler,
        series: &[Series],
    ) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.draw(chart, series)?;
        let (w, h) = self.options.dimensions();
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("failed to read back {w}x{h} pixels");
        }
        Ok((pixels, w as u32, h as u32, stride))
    }
}
