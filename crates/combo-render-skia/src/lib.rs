// File: crates/combo-render-skia/src/lib.rs
// Summary: Skia renderer crate; hosts the canvas-backed drawing surface and raster output.

pub mod canvas;
pub mod raster;

pub use canvas::SkiaSurface;
pub use raster::{RenderOptions, SkiaRenderer};
