//! Cubic and quadratic Bézier evaluation and subdivision.
//!
//! Evaluation uses the Bernstein form, so `t = 0` and `t = 1` reproduce the
//! end points exactly.

use super::math::Point;

/// Control points of a cubic Bézier curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub p0: Point, // Start point
    pub p1: Point, // First control point
    pub p2: Point, // Second control point
    pub p3: Point, // End point
}

impl CubicBezier {
    pub fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Evaluate the curve at parameter t ∈ [0, 1].
    pub fn eval(&self, t: f64) -> Point {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        Point {
            x: mt3 * self.p0.x + 3.0 * mt2 * t * self.p1.x + 3.0 * mt * t2 * self.p2.x + t3 * self.p3.x,
            y: mt3 * self.p0.y + 3.0 * mt2 * t * self.p1.y + 3.0 * mt * t2 * self.p2.y + t3 * self.p3.y,
        }
    }

    /// First derivative with respect to t.
    pub fn derivative(&self, t: f64) -> Point {
        let t2 = t * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;

        Point {
            x: 3.0 * mt2 * (self.p1.x - self.p0.x)
                + 6.0 * mt * t * (self.p2.x - self.p1.x)
                + 3.0 * t2 * (self.p3.x - self.p2.x),
            y: 3.0 * mt2 * (self.p1.y - self.p0.y)
                + 6.0 * mt * t * (self.p2.y - self.p1.y)
                + 3.0 * t2 * (self.p3.y - self.p2.y),
        }
    }

    /// Split the curve at parameter t using de Casteljau subdivision.
    ///
    /// Returns two cubic curves: the first from 0..t, the second from t..1.
    pub fn split_at(&self, t: f64) -> (CubicBezier, CubicBezier) {
        let p01 = self.p0.lerp(self.p1, t);
        let p12 = self.p1.lerp(self.p2, t);
        let p23 = self.p2.lerp(self.p3, t);

        let p012 = p01.lerp(p12, t);
        let p123 = p12.lerp(p23, t);

        let p0123 = p012.lerp(p123, t); // The split point

        (
            CubicBezier::new(self.p0, p01, p012, p0123),
            CubicBezier::new(p0123, p123, p23, self.p3),
        )
    }

    pub fn points(&self) -> [Point; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }
}

/// Control points of a quadratic Bézier curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadraticBezier {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
}

impl QuadraticBezier {
    pub fn new(p0: Point, p1: Point, p2: Point) -> Self {
        Self { p0, p1, p2 }
    }

    pub fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        Point {
            x: mt * mt * self.p0.x + 2.0 * mt * t * self.p1.x + t * t * self.p2.x,
            y: mt * mt * self.p0.y + 2.0 * mt * t * self.p1.y + t * t * self.p2.y,
        }
    }

    pub fn derivative(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        (self.p1 - self.p0) * (2.0 * mt) + (self.p2 - self.p1) * (2.0 * t)
    }

    /// Exact degree elevation.
    pub fn to_cubic(&self) -> CubicBezier {
        let c1 = self.p0 + (self.p1 - self.p0) * (2.0 / 3.0);
        let c2 = self.p2 + (self.p1 - self.p2) * (2.0 / 3.0);
        CubicBezier::new(self.p0, c1, c2, self.p2)
    }
}

/// Both halves of a cubic split, as control-point arrays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitCubic {
    pub left: [Point; 4],
    pub right: [Point; 4],
}

#[inline]
pub fn cubic_bezier_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    CubicBezier::new(p0, p1, p2, p3).eval(t)
}

#[inline]
pub fn cubic_bezier_derivative(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    CubicBezier::new(p0, p1, p2, p3).derivative(t)
}

#[inline]
pub fn quadratic_bezier_point(p0: Point, p1: Point, p2: Point, t: f64) -> Point {
    QuadraticBezier::new(p0, p1, p2).eval(t)
}

/// Split a cubic bezier at parameter t.
///
/// `left` is `[p0, p01, p012, p0123]` and `right` is `[p0123, p123, p23, p3]`.
pub fn split_cubic(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> SplitCubic {
    let (first, second) = CubicBezier::new(p0, p1, p2, p3).split_at(t);
    SplitCubic {
        left: first.points(),
        right: second.points(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    #[test]
    fn test_eval_endpoints_exact() {
        let curve = CubicBezier::new(pt(0.3, 0.7), pt(1.0, 2.0), pt(3.0, 2.0), pt(4.1, -0.9));
        assert_eq!(curve.eval(0.0), pt(0.3, 0.7));
        assert_eq!(curve.eval(1.0), pt(4.1, -0.9));

        let q = QuadraticBezier::new(pt(0.1, 0.2), pt(5.0, 5.0), pt(9.7, 0.3));
        assert_eq!(q.eval(0.0), pt(0.1, 0.2));
        assert_eq!(q.eval(1.0), pt(9.7, 0.3));
    }

    #[test]
    fn test_split_at_midpoint() {
        let curve = CubicBezier::new(pt(0.0, 0.0), pt(1.0, 2.0), pt(3.0, 2.0), pt(4.0, 0.0));
        let (first, second) = curve.split_at(0.5);

        let mid = curve.eval(0.5);
        assert!((first.p3.x - mid.x).abs() < 1e-12);
        assert!((first.p3.y - mid.y).abs() < 1e-12);
        assert_eq!(first.p3, second.p0);
        assert_eq!(first.p0, curve.p0);
        assert_eq!(second.p3, curve.p3);
    }

    #[test]
    fn test_split_continuity() {
        let curve = CubicBezier::new(pt(0.0, 0.0), pt(0.0, 10.0), pt(10.0, 10.0), pt(10.0, 0.0));
        let (first, second) = curve.split_at(0.3);

        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let a = curve.eval(t * 0.3);
            let b = first.eval(t);
            assert!((a.x - b.x).abs() < 1e-9, "x mismatch at t={}: {} vs {}", t, a.x, b.x);
            assert!((a.y - b.y).abs() < 1e-9, "y mismatch at t={}: {} vs {}", t, a.y, b.y);

            let c = curve.eval(0.3 + t * 0.7);
            let d = second.eval(t);
            assert!((c.x - d.x).abs() < 1e-9);
            assert!((c.y - d.y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let curve = CubicBezier::new(pt(0.0, 0.0), pt(2.0, 5.0), pt(6.0, -1.0), pt(8.0, 3.0));
        let h = 1e-6;
        for &t in &[0.1, 0.5, 0.9] {
            let d = curve.derivative(t);
            let fd = (curve.eval(t + h) - curve.eval(t - h)) * (0.5 / h);
            assert!((d.x - fd.x).abs() < 1e-4);
            assert!((d.y - fd.y).abs() < 1e-4);
        }
        let q = QuadraticBezier::new(pt(0.0, 0.0), pt(1.0, 2.0), pt(2.0, 0.0));
        assert_eq!(q.derivative(0.5), pt(2.0, 0.0));
    }

    #[test]
    fn test_quadratic_elevation_is_exact() {
        let q = QuadraticBezier::new(pt(0.0, 0.0), pt(3.0, 6.0), pt(9.0, 0.0));
        let c = q.to_cubic();
        for i in 0..=8 {
            let t = i as f64 / 8.0;
            let a = q.eval(t);
            let b = c.eval(t);
            assert!((a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9);
        }
    }
}
