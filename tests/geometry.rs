//! Tests for edge path geometry.
use flowgraph::geometry::*;

#[test]
fn test_line() {
    assert_eq!(build_path_d(0.0, 0.0, 100.0, 50.0, &PathStyle::Line), "M 0 0 L 100 50");
}

#[test]
fn test_cubic_horizontal() {
    assert_eq!(
        build_path_d(0.0, 0.0, 100.0, 50.0, &PathStyle::cubic_h(0.5)),
        "M 0 0 C 50 0, 50 50, 100 50"
    );
    assert_eq!(
        build_path_d(0.0, 0.0, 200.0, 100.0, &PathStyle::cubic_h(0.25)),
        "M 0 0 C 50 0, 150 100, 200 100"
    );
}

#[test]
fn test_cubic_horizontal_default_strength() {
    let default = build_path_d(0.0, 0.0, 100.0, 50.0, &PathStyle::CubicH { strength: None });
    assert_eq!(default, "M 0 0 C 50 0, 50 50, 100 50");
    assert_eq!(PathStyle::default(), PathStyle::CubicH { strength: None });
}

#[test]
fn test_curved_uses_x_midpoint() {
    assert_eq!(
        build_path_d(0.0, 0.0, 200.0, 100.0, &PathStyle::Curved),
        "M 0 0 C 100 0, 100 100, 200 100"
    );
}

#[test]
fn test_cubic_vertical() {
    assert_eq!(
        build_path_d(0.0, 0.0, 100.0, 50.0, &PathStyle::CubicV { strength: None }),
        "M 0 0 C 0 25, 100 25, 100 50"
    );
}

#[test]
fn test_quad_bends_perpendicular() {
    assert_eq!(
        build_path_d(0.0, 0.0, 100.0, 0.0, &PathStyle::Quad { bend: None }),
        "M 0 0 Q 50 20, 100 0"
    );
}

#[test]
fn test_quad_zero_length_segment() {
    assert_eq!(
        build_path_d(5.0, 5.0, 5.0, 5.0, &PathStyle::quad(0.2)),
        "M 5 5 Q 5 5, 5 5"
    );
}

#[test]
fn test_elbow_modes() {
    assert_eq!(
        build_path_d(0.0, 0.0, 100.0, 50.0, &PathStyle::Elbow { mode: None }),
        "M 0 0 L 50 0 L 50 50 L 100 50"
    );
    assert_eq!(
        build_path_d(0.0, 0.0, 100.0, 50.0, &PathStyle::elbow(ElbowMode::VH)),
        "M 0 0 L 0 25 L 100 25 L 100 50"
    );
}

#[test]
fn test_rounded_elbow() {
    assert_eq!(
        build_path_d(0.0, 0.0, 100.0, 50.0, &PathStyle::RoundedElbowHV { r: None }),
        "M 0 0 L 38 0 Q 50 0, 50 12 L 50 38 Q 50 50, 62 50 L 100 50"
    );
}

#[test]
fn test_rounded_elbow_clamps_radius_to_rise() {
    assert_eq!(
        build_path_d(0.0, 0.0, 100.0, 10.0, &PathStyle::rounded_elbow(12.0)),
        "M 0 0 L 40 0 Q 50 0, 50 10 L 50 0 Q 50 10, 60 10 L 100 10"
    );
}

#[test]
fn test_rounded_elbow_right_to_left() {
    assert_eq!(
        build_path_d(100.0, 50.0, 0.0, 0.0, &PathStyle::rounded_elbow(12.0)),
        "M 100 50 L 62 50 Q 50 50, 50 38 L 50 12 Q 50 0, 38 0 L 0 0"
    );
}

#[test]
fn test_arc_radius() {
    assert_eq!(
        build_path_d(0.0, 0.0, 30.0, 40.0, &PathStyle::arc(0.5)),
        "M 0 0 A 25 25 0 0 1 30 40"
    );
    // radius never drops below 1
    assert_eq!(
        build_path_d(0.0, 0.0, 1.0, 0.0, &PathStyle::Arc { curvature: None }),
        "M 0 0 A 1 1 0 0 1 1 0"
    );
}

#[test]
fn test_build_path_d_is_pure() {
    let styles = [
        PathStyle::Line,
        PathStyle::Curved,
        PathStyle::cubic_h(0.3),
        PathStyle::cubic_v(0.7),
        PathStyle::quad(0.4),
        PathStyle::elbow(ElbowMode::HV),
        PathStyle::elbow(ElbowMode::VH),
        PathStyle::rounded_elbow(8.0),
        PathStyle::arc(0.6),
    ];
    for style in &styles {
        let first = build_path_d(12.5, -3.25, 301.0, 77.125, style);
        for _ in 0..10 {
            assert_eq!(build_path_d(12.5, -3.25, 301.0, 77.125, style), first);
        }
    }
}

#[test]
fn test_number_formatting() {
    assert_eq!(
        build_path_d(0.5, -0.0, -12.25, 3.0, &PathStyle::Line),
        "M 0.5 0 L -12.25 3"
    );
}

#[test]
fn test_structured_path() {
    let path = build_path(
        Point::new(0.0, 0.0),
        Point::new(100.0, 50.0),
        &PathStyle::default(),
    );
    assert_eq!(path.start(), Some(Point::new(0.0, 0.0)));
    assert_eq!(path.end(), Some(Point::new(100.0, 50.0)));
    assert_eq!(
        path.commands()[1],
        PathCommand::CubicTo {
            c1: Point::new(50.0, 0.0),
            c2: Point::new(50.0, 50.0),
            to: Point::new(100.0, 50.0),
        }
    );
}

#[test]
fn test_style_names_and_serde() {
    assert_eq!("line".parse::<PathStyle>(), Ok(PathStyle::Line));
    assert_eq!(
        "elbowVH".parse::<PathStyle>(),
        Ok(PathStyle::elbow(ElbowMode::VH))
    );
    assert!("zigzag".parse::<PathStyle>().is_err());
    assert_eq!(PathStyle::rounded_elbow(4.0).to_string(), "roundedElbowHV");

    let parsed: PathStyle =
        serde_json::from_str(r#"{ "kind": "cubicH", "strength": 0.5 }"#).unwrap();
    assert_eq!(parsed, PathStyle::cubic_h(0.5));
    let parsed: PathStyle = serde_json::from_str(r#"{ "kind": "line" }"#).unwrap();
    assert_eq!(parsed, PathStyle::Line);
    let parsed: PathStyle = serde_json::from_str(r#"{ "kind": "elbow", "mode": "VH" }"#).unwrap();
    assert_eq!(parsed, PathStyle::elbow(ElbowMode::VH));

    let json = serde_json::to_string(&PathStyle::Arc { curvature: None }).unwrap();
    assert_eq!(json, r#"{"kind":"arc"}"#);
}
