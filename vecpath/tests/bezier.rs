//! Bezier evaluation and subdivision properties.

use proptest::prelude::*;
use vecpath::geometry::bezier::{
    cubic_bezier_point, quadratic_bezier_point, split_cubic, CubicBezier,
};
use vecpath::Point;

fn point() -> impl Strategy<Value = Point> {
    (-1.0e4..1.0e4f64, -1.0e4..1.0e4f64).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn end_points_are_exact(p0 in point(), p1 in point(), p2 in point(), p3 in point()) {
        prop_assert_eq!(cubic_bezier_point(p0, p1, p2, p3, 0.0), p0);
        prop_assert_eq!(cubic_bezier_point(p0, p1, p2, p3, 1.0), p3);
        prop_assert_eq!(quadratic_bezier_point(p0, p1, p2, 0.0), p0);
        prop_assert_eq!(quadratic_bezier_point(p0, p1, p2, 1.0), p2);
    }

    #[test]
    fn halves_meet_on_the_curve(
        p0 in point(), p1 in point(), p2 in point(), p3 in point(),
        t in 0.001..0.999f64,
    ) {
        let split = split_cubic(p0, p1, p2, p3, t);
        let [l0, l1, l2, l3] = split.left;
        let [r0, r1, r2, r3] = split.right;
        let left_end = cubic_bezier_point(l0, l1, l2, l3, 1.0);
        let right_start = cubic_bezier_point(r0, r1, r2, r3, 0.0);
        let on_curve = cubic_bezier_point(p0, p1, p2, p3, t);
        // Scale the tolerance with the control polygon's magnitude
        let tol = 1e-9 * (1.0 + [p0, p1, p2, p3].iter().map(|p| p.length()).fold(0.0, f64::max));
        prop_assert!(left_end.distance(right_start) <= tol);
        prop_assert!(left_end.distance(on_curve) <= tol);
    }

    #[test]
    fn halves_trace_the_original(p0 in point(), p1 in point(), p2 in point(), p3 in point(), t in 0.1..0.9f64) {
        let curve = CubicBezier::new(p0, p1, p2, p3);
        let (left, right) = curve.split_at(t);
        let tol = 1e-9 * (1.0 + [p0, p1, p2, p3].iter().map(|p| p.length()).fold(0.0, f64::max));
        for i in 0..=8 {
            let s = i as f64 / 8.0;
            prop_assert!(left.eval(s).distance(curve.eval(s * t)) <= tol);
            prop_assert!(right.eval(s).distance(curve.eval(t + s * (1.0 - t))) <= tol);
        }
    }
}

#[test]
fn midpoint_of_symmetric_curve() {
    let p = cubic_bezier_point(
        Point::new(0.0, 0.0),
        Point::new(0.0, 10.0),
        Point::new(10.0, 10.0),
        Point::new(10.0, 0.0),
        0.5,
    );
    assert_eq!(p, Point::new(5.0, 7.5));
}
