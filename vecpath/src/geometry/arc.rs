//! Elliptical arcs in SVG endpoint form.
//!
//! Path data stores arcs the way SVG does (radii, rotation, flags, end
//! point). Sampling and cubic conversion need the center form, computed
//! with the standard endpoint-to-center conversion. Radii that are too small
//! to span the end points are scaled up uniformly, as SVG renderers do.

use super::bezier::CubicBezier;
use super::math::Point;
use super::tolerance::{EPS_LEN, EPS_POS};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// An arc in center parametrisation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CenterArc {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
    /// X-axis rotation in radians.
    pub phi: f64,
    pub start_angle: f64,
    /// Signed sweep in radians. Positive follows increasing angle.
    pub sweep_angle: f64,
}

/// Parameters of an `A` segment together with its start point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EndpointArc {
    pub from: Point,
    pub to: Point,
    pub rx: f64,
    pub ry: f64,
    /// X-axis rotation in degrees.
    pub x_axis_rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
}

impl EndpointArc {
    /// Convert to center form. `None` means the arc degenerates to a straight
    /// line (zero radius) or to nothing (coincident end points).
    pub fn to_center(&self) -> Option<CenterArc> {
        if self.from.distance(self.to) <= EPS_POS {
            return None;
        }
        let mut rx = self.rx.abs();
        let mut ry = self.ry.abs();
        if rx <= EPS_LEN || ry <= EPS_LEN {
            return None;
        }
        let phi = self.x_axis_rotation.to_radians();
        let (sin_phi, cos_phi) = phi.sin_cos();

        let hx = (self.from.x - self.to.x) * 0.5;
        let hy = (self.from.y - self.to.y) * 0.5;
        let x1p = cos_phi * hx + sin_phi * hy;
        let y1p = -sin_phi * hx + cos_phi * hy;

        let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
        if lambda > 1.0 {
            let s = lambda.sqrt();
            rx *= s;
            ry *= s;
        }

        let rx2 = rx * rx;
        let ry2 = ry * ry;
        let num = rx2 * ry2 - rx2 * y1p * y1p - ry2 * x1p * x1p;
        let den = rx2 * y1p * y1p + ry2 * x1p * x1p;
        let mut coef = if den > 0.0 { (num / den).max(0.0).sqrt() } else { 0.0 };
        if self.large_arc == self.sweep {
            coef = -coef;
        }
        let cxp = coef * rx * y1p / ry;
        let cyp = -coef * ry * x1p / rx;

        let center = Point::new(
            cos_phi * cxp - sin_phi * cyp + (self.from.x + self.to.x) * 0.5,
            sin_phi * cxp + cos_phi * cyp + (self.from.y + self.to.y) * 0.5,
        );

        let u = Point::new((x1p - cxp) / rx, (y1p - cyp) / ry);
        let v = Point::new((-x1p - cxp) / rx, (-y1p - cyp) / ry);
        let start_angle = angle_between(Point::new(1.0, 0.0), u);
        let mut sweep_angle = angle_between(u, v) % TAU;
        if !self.sweep && sweep_angle > 0.0 {
            sweep_angle -= TAU;
        } else if self.sweep && sweep_angle < 0.0 {
            sweep_angle += TAU;
        }

        Some(CenterArc { center, rx, ry, phi, start_angle, sweep_angle })
    }
}

impl CenterArc {
    /// Point at normalized parameter t ∈ [0, 1] along the sweep.
    pub fn point_at(&self, t: f64) -> Point {
        let theta = self.start_angle + self.sweep_angle * t;
        self.point_at_angle(theta)
    }

    fn point_at_angle(&self, theta: f64) -> Point {
        let local = Point::new(self.rx * theta.cos(), self.ry * theta.sin());
        local.rotate_about_origin(self.phi) + self.center
    }

    /// Approximate the arc with cubics, one per quarter turn or less.
    pub fn to_cubics(&self) -> Vec<CubicBezier> {
        let pieces = (self.sweep_angle.abs() / FRAC_PI_2).ceil().max(1.0) as usize;
        let step = self.sweep_angle / pieces as f64;
        let k = 4.0 / 3.0 * (step / 4.0).tan();
        let map = |p: Point| Point::new(self.rx * p.x, self.ry * p.y).rotate_about_origin(self.phi) + self.center;

        let mut out = Vec::with_capacity(pieces);
        for i in 0..pieces {
            let a = self.start_angle + step * i as f64;
            let b = a + step;
            let (sa, ca) = a.sin_cos();
            let (sb, cb) = b.sin_cos();
            let p0 = Point::new(ca, sa);
            let p3 = Point::new(cb, sb);
            let p1 = p0 + Point::new(-sa, ca) * k;
            let p2 = p3 - Point::new(-sb, cb) * k;
            out.push(CubicBezier::new(map(p0), map(p1), map(p2), map(p3)));
        }
        out
    }
}

/// Signed angle from `u` to `v`.
fn angle_between(u: Point, v: Point) -> f64 {
    let a = u.cross(v).atan2(u.dot(v));
    // atan2 yields (-π, π]; -π and π describe the same half turn
    if a <= -PI { a + TAU } else { a }
}
