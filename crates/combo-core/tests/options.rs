// File: crates/combo-core/tests/options.rs
// Purpose: Validate option defaults and partial overrides from TOML.

use combo_core::{ChartOptions, LineMode, PointMode};

#[test]
fn defaults_match_documented_values() {
    let o = ChartOptions::default();
    assert_eq!(o.bar_area_alpha, 32);
    assert_eq!(o.min_bar_height, 4.0);
    assert_eq!(o.point_size, 14.0);
    assert_eq!(o.point_mode, PointMode::Circle);
    assert_eq!(o.line_size, 3.0);
    assert_eq!(o.line_mode, LineMode::Spline);
}

#[test]
fn partial_toml_keeps_remaining_defaults() {
    let o: ChartOptions = toml::from_str(
        r#"
        line_mode = "straight"
        point_mode = "square"
        point_size = 10.0
        "#,
    )
    .expect("parse options");
    assert_eq!(o.line_mode, LineMode::Straight);
    assert_eq!(o.point_mode, PointMode::Square);
    assert_eq!(o.point_size, 10.0);
    assert_eq!(o.bar_area_alpha, 32);
    assert_eq!(o.line_size, 3.0);
}

#[test]
fn unknown_line_mode_is_rejected() {
    assert!(toml::from_str::<ChartOptions>("line_mode = \"bezier\"").is_err());
}
