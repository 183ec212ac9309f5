//! Shape generators.

use std::f64::consts::PI;
use vecpath::geometry::bezier::CubicBezier;
use vecpath::{
    ellipse, rectangle, regular_polygon, star, CornerRadii, EllipseArc, PathSegment, Point, ShapeError,
    WindingRule,
};

fn commands(segments: &[PathSegment]) -> String {
    segments.iter().map(PathSegment::command).collect()
}

#[test]
fn sharp_rectangle_is_exact() {
    let r = rectangle(0.0, 0.0, 100.0, 50.0, 0.0).unwrap();
    assert_eq!(
        r.segments,
        vec![
            PathSegment::MoveTo { to: Point::new(0.0, 0.0) },
            PathSegment::LineTo { to: Point::new(100.0, 0.0) },
            PathSegment::LineTo { to: Point::new(100.0, 50.0) },
            PathSegment::LineTo { to: Point::new(0.0, 50.0) },
            PathSegment::Close,
        ]
    );
    assert!(r.closed);
    assert_eq!(r.winding_rule, WindingRule::NonZero);
}

#[test]
fn oversized_radius_is_clamped_to_half_the_short_side() {
    let r = rectangle(0.0, 0.0, 100.0, 50.0, 80.0).unwrap();
    assert_eq!(r.start_point(), Some(Point::new(25.0, 0.0)));
    let b = r.bounds().unwrap();
    assert_eq!((b.min_x, b.min_y, b.max_x, b.max_y), (0.0, 0.0, 100.0, 50.0));
}

#[test]
fn per_corner_radii() {
    let r = rectangle(0.0, 0.0, 100.0, 100.0, CornerRadii::PerCorner([10.0, 0.0, 0.0, 0.0])).unwrap();
    // Only the top-left corner is rounded
    assert_eq!(commands(&r.segments), "MLLLLCZ");
}

#[test]
fn circle_stays_within_tolerance() {
    let r = 100.0;
    let c = ellipse(0.0, 0.0, r, r, EllipseArc::default()).unwrap();
    assert_eq!(commands(&c.segments), "MCCCCZ");
    let mut cur = Point::ORIGIN;
    let mut samples = 0;
    for seg in &c.segments {
        match *seg {
            PathSegment::MoveTo { to } => cur = to,
            PathSegment::CubicTo { ctrl1, ctrl2, to } => {
                let curve = CubicBezier::new(cur, ctrl1, ctrl2, to);
                for i in 0..16 {
                    let p = curve.eval(i as f64 / 16.0);
                    assert!((p.length() - r).abs() < 0.003 * r, "{:?}", p);
                    samples += 1;
                }
                cur = to;
            }
            _ => {}
        }
    }
    assert_eq!(samples, 64);
}

#[test]
fn partial_ellipse_is_a_wedge() {
    let arc = EllipseArc { start_angle: 0.0, end_angle: PI / 2.0, inner_radius: 0.0 };
    let p = ellipse(0.0, 0.0, 10.0, 10.0, arc).unwrap();
    assert_eq!(commands(&p.segments), "MLAZ");
    assert_eq!(p.start_point(), Some(Point::ORIGIN));
}

#[test]
fn sweeps_past_half_a_turn_use_the_large_arc() {
    let large_flag = |start: f64, end: f64| {
        let arc = EllipseArc { start_angle: start, end_angle: end, inner_radius: 0.0 };
        let p = ellipse(0.0, 0.0, 10.0, 10.0, arc).unwrap();
        p.segments.iter().find_map(|s| match *s {
            PathSegment::ArcTo { large_arc, sweep, .. } => Some((large_arc, sweep)),
            _ => None,
        })
    };
    assert_eq!(large_flag(0.0, 1.5 * PI), Some((true, true)));
    assert_eq!(large_flag(0.0, -1.5 * PI), Some((true, false)));
    assert_eq!(large_flag(0.0, PI), Some((false, true)));
}

#[test]
fn full_ring_uses_half_arcs() {
    let arc = EllipseArc { inner_radius: 0.5, ..EllipseArc::default() };
    let p = ellipse(0.0, 0.0, 10.0, 10.0, arc).unwrap();
    assert_eq!(commands(&p.segments), "MAALAAZ");
}

#[test]
fn polygon_vertices_sit_on_the_circle() {
    let p = regular_polygon(0.0, 0.0, 10.0, 6, 0.0).unwrap();
    assert_eq!(commands(&p.segments), "MLLLLLZ");
    assert_eq!(p.start_point().map(|s| (s.x.round(), s.y.round())), Some((0.0, -10.0)));
    for seg in &p.segments {
        if let Some(v) = seg.end_point() {
            assert!((v.length() - 10.0).abs() < 1e-9);
        }
    }
}

#[test]
fn star_alternates_radii() {
    let s = star(0.0, 0.0, 10.0, 4.0, 5, 0.0).unwrap();
    let radii: Vec<f64> = s.segments.iter().filter_map(PathSegment::end_point).map(|p| p.length()).collect();
    assert_eq!(radii.len(), 10);
    for (i, r) in radii.iter().enumerate() {
        let want = if i % 2 == 0 { 10.0 } else { 4.0 };
        assert!((r - want).abs() < 1e-9);
    }
}

#[test]
fn star_corner_radius_does_not_change_geometry() {
    let sharp = star(5.0, 5.0, 10.0, 4.0, 5, 0.0).unwrap();
    let rounded = star(5.0, 5.0, 10.0, 4.0, 5, 3.0).unwrap();
    assert_eq!(rounded.segments, sharp.segments);
    assert_eq!(commands(&rounded.segments), "MLLLLLLLLLZ");
}

#[test]
fn invalid_parameters_are_rejected() {
    let is_invalid = |r: Result<_, ShapeError>, which: &str| match r {
        Err(ShapeError::InvalidParameter { name, .. }) => assert_eq!(name, which),
        Ok(_) => panic!("expected {} to be rejected", which),
    };
    is_invalid(regular_polygon(0.0, 0.0, 10.0, 2, 0.0), "sides");
    is_invalid(star(0.0, 0.0, 10.0, 5.0, 1, 0.0), "points");
    is_invalid(rectangle(0.0, 0.0, -1.0, 10.0, 0.0), "width");
    is_invalid(ellipse(0.0, 0.0, 10.0, -2.0, EllipseArc::default()), "ry");
    is_invalid(rectangle(f64::NAN, 0.0, 1.0, 1.0, 0.0), "x");
    let ring = EllipseArc { inner_radius: 1.0, ..EllipseArc::default() };
    is_invalid(ellipse(0.0, 0.0, 10.0, 10.0, ring), "inner_radius");
}
