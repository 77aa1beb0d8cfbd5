// File: crates/combo-core/tests/paths.rs
// Purpose: Validate line/spline path construction and gradient derivation.

use combo_core::{
    build_gradient, build_series_path, Color, Entry, LineMode, PathSegment, Point, TileMode,
};

fn zigzag() -> Vec<Point> {
    vec![Point::new(0.0, 10.0), Point::new(10.0, 0.0), Point::new(20.0, 10.0)]
}

#[test]
fn straight_mode_emits_one_line_per_following_point() {
    let path = build_series_path(&zigzag(), LineMode::Straight, 10.0).expect("path");
    assert_eq!(path.start, Point::new(0.0, 10.0));
    assert_eq!(
        path.segments,
        vec![
            PathSegment::Line(Point::new(10.0, 0.0)),
            PathSegment::Line(Point::new(20.0, 10.0)),
        ]
    );
}

#[test]
fn spline_mode_uses_horizontal_control_offsets() {
    let path = build_series_path(&zigzag(), LineMode::Spline, 10.0).expect("path");
    assert_eq!(path.start, Point::new(0.0, 10.0));
    assert_eq!(
        path.segments,
        vec![
            PathSegment::Cubic {
                c1: Point::new(8.0, 10.0),
                c2: Point::new(2.0, 0.0),
                to: Point::new(10.0, 0.0),
            },
            PathSegment::Cubic {
                c1: Point::new(18.0, 0.0),
                c2: Point::new(12.0, 10.0),
                to: Point::new(20.0, 10.0),
            },
        ]
    );
}

#[test]
fn spline_overshoots_are_kept() {
    // Control points land past the next point when points are closer than the offset.
    let pts = [Point::new(0.0, 100.0), Point::new(4.0, 0.0)];
    let path = build_series_path(&pts, LineMode::Spline, 10.0).unwrap();
    match path.segments[0] {
        PathSegment::Cubic { c1, c2, .. } => {
            assert!(c1.x > 4.0);
            assert!(c2.x < 0.0);
        }
        other => panic!("expected cubic, got {other:?}"),
    }
}

#[test]
fn no_path_for_single_point_or_disabled_lines() {
    let one = [Point::new(1.0, 1.0)];
    assert!(build_series_path(&one, LineMode::Spline, 10.0).is_none());
    assert!(build_series_path(&[], LineMode::Straight, 10.0).is_none());
    assert!(build_series_path(&zigzag(), LineMode::None, 10.0).is_none());
}

#[test]
fn gradient_has_one_stop_per_entry_in_entry_order() {
    let entries = vec![
        Entry::new(1.0, Color::RED),
        Entry::new(2.0, Color::GREEN),
        Entry::new(3.0, Color::BLUE),
    ];
    let pts = [Point::new(15.0, 3.0), Point::new(5.0, 1.0), Point::new(25.0, 2.0)];
    let g = build_gradient(&pts, &entries, None, 255).expect("gradient");

    assert_eq!(g.colors, vec![Color::RED, Color::GREEN, Color::BLUE]);
    assert_eq!(g.positions, None);
    assert_eq!(g.tile_mode, TileMode::Clamp);
    assert_eq!(g.start, Point::new(5.0, 0.0));
    assert_eq!(g.end, Point::new(25.0, 0.0));
}

#[test]
fn gradient_override_color_replaces_every_stop() {
    let entries = vec![Entry::new(1.0, Color::RED), Entry::new(2.0, Color::GREEN)];
    let pts = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
    let g = build_gradient(&pts, &entries, Some(Color::BLUE), 128).unwrap();
    assert_eq!(g.colors, vec![Color::BLUE.with_alpha(128); 2]);
}

#[test]
fn gradient_stop_count_follows_entries_not_points() {
    let entries = vec![Entry::new(1.0, Color::RED); 5];
    let pts = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
    let g = build_gradient(&pts, &entries, None, 255).unwrap();
    assert_eq!(g.colors.len(), 5);
}

#[test]
fn gradient_needs_entries_and_points() {
    let pts = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
    assert!(build_gradient(&pts, &[], None, 255).is_none());
    assert!(build_gradient(&[], &[Entry::new(1.0, Color::RED)], None, 255).is_none());
}
