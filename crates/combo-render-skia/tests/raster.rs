// File: crates/combo-render-skia/tests/raster.rs
// Purpose: Render combination charts headlessly and inspect the resulting pixels.

use combo_core::{
    AxisLayout, ChartOptions, Color, CombinationChart, Entry, LineMode, PointMode, Series,
};
use combo_render_skia::{RenderOptions, SkiaRenderer};

const BAR: Color = Color::from_rgb(200, 40, 40);
const BACKGROUND: [u8; 4] = [10, 20, 30, 255];

fn renderer() -> SkiaRenderer {
    // One 300px category; plot from y=20 to y=180.
    let layout = AxisLayout {
        width: 340.0,
        height: 200.0,
        margin: 20.0,
        header_height: 20.0,
        footer_height: 20.0,
        bar_padding: 0.0,
        min_value: None,
        max_value: None,
    };
    SkiaRenderer::new(RenderOptions { layout, background: Color::from_rgb(10, 20, 30) })
}

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn png_bytes_have_png_header() {
    let series = vec![
        Series::bars("b", vec![Entry::new(2.0, BAR), Entry::new(4.0, BAR)]),
        Series::points("p", vec![Entry::new(1.0, Color::RED), Entry::new(3.0, Color::BLUE)]),
    ];
    let mut chart = CombinationChart::default();
    let bytes = renderer().render_to_png_bytes(&mut chart, &series).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (340, 200));
}

#[test]
fn rgba_buffer_shows_bar_over_background() {
    let series = vec![Series::bars("b", vec![Entry::new(10.0, BAR)])];
    let mut chart = CombinationChart::default();
    let (px, w, h, stride) = renderer().render_to_rgba8(&mut chart, &series).expect("rgba render");
    assert_eq!((w, h), (340, 200));
    assert_eq!(stride, w as usize * 4);
    assert_eq!(px.len(), stride * h as usize);

    assert_eq!(pixel(&px, stride, 2, 2), BACKGROUND);
    assert_eq!(pixel(&px, stride, 170, 100), [200, 40, 40, 255]);
}

#[test]
fn gradient_spline_renders_and_writes_file() {
    let series = vec![Series::points(
        "p",
        vec![
            Entry::new(1.0, Color::RED),
            Entry::new(3.0, Color::GREEN),
            Entry::new(2.0, Color::BLUE),
        ],
    )];
    let mut chart = CombinationChart::new(ChartOptions {
        line_mode: LineMode::Spline,
        ..Default::default()
    });
    let out = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("gradient_spline.png");
    renderer().render_to_png(&mut chart, &series, &out).expect("render to png");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}


/// One point of value 10 on a 0..20 axis sits at (170, 100).
fn render_single_point(point_mode: PointMode) -> (Vec<u8>, usize) {
    let mut r = renderer();
    r.options.layout.max_value = Some(20.0);
    let series = vec![Series::points("p", vec![Entry::new(10.0, Color::GREEN)])];
    let mut chart = CombinationChart::new(ChartOptions {
        line_mode: LineMode::None,
        bar_area_alpha: 0,
        point_size: 20.0,
        point_mode,
        ..Default::default()
    });
    let (px, _, _, stride) = r.render_to_rgba8(&mut chart, &series).expect("rgba render");
    (px, stride)
}

#[test]
fn square_point_fills_its_corners() {
    let (px, stride) = render_single_point(PointMode::Square);
    let green = [0, 255, 0, 255];
    assert_eq!(pixel(&px, stride, 170, 100), green);
    // Outside the inscribed circle, inside the square.
    assert_eq!(pixel(&px, stride, 178, 108), green);
    assert_eq!(pixel(&px, stride, 162, 92), green);
    assert_eq!(pixel(&px, stride, 185, 100), BACKGROUND);
}

#[test]
fn circle_point_leaves_square_corners_empty() {
    let (px, stride) = render_single_point(PointMode::Circle);
    assert_eq!(pixel(&px, stride, 170, 100), [0, 255, 0, 255]);
    assert_eq!(pixel(&px, stride, 178, 108), BACKGROUND);
}

#[test]
fn hidden_point_draws_nothing() {
    let (px, stride) = render_single_point(PointMode::None);
    assert_eq!(pixel(&px, stride, 170, 100), BACKGROUND);
    assert_eq!(pixel(&px, stride, 178, 108), BACKGROUND);
}
