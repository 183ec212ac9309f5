//! Path sampler.
//!
//! Curves are flattened into `ceil(chord / resolution)` uniformly spaced
//! parametric samples, where `chord` is the straight distance from the
//! segment start to its end point. This is not arc length: a tightly curled
//! segment whose end points nearly coincide gets few samples.

use super::arc::EndpointArc;
use super::bezier::{CubicBezier, QuadraticBezier};
use super::limits::DEFAULT_MAX_POINTS;
use super::math::Point;
use super::tolerance::{effective_resolution, DEFAULT_RESOLUTION};
use crate::model::{PathSegment, VectorPath};
use serde::{Deserialize, Serialize};

/// Sampling knobs for callers that flatten on an interactive budget.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlattenOptions {
    /// Target chord length per sample, in path units.
    pub resolution: f64,
    /// Upper bound on the total number of sampled points.
    pub max_points: usize,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self { resolution: DEFAULT_RESOLUTION, max_points: DEFAULT_MAX_POINTS }
    }
}

impl FlattenOptions {
    /// Resolution to use for `paths` so that their combined sample count
    /// stays within `max_points`. The requested resolution is doubled until
    /// the estimate fits.
    pub fn resolution_for(&self, paths: &[&VectorPath]) -> f64 {
        let mut res = effective_resolution(self.resolution);
        let budget = self.max_points.max(1);
        let estimate = |res: f64| paths.iter().map(|p| estimate_points(p, res)).sum::<usize>();
        let requested = res;
        let mut n = estimate(res);
        let mut rounds = 0;
        while n > budget && rounds < 64 {
            res *= 2.0;
            n = estimate(res);
            rounds += 1;
        }
        if res != requested {
            log::warn!(
                "flatten budget of {} points exceeded; resolution coarsened from {} to {}",
                budget,
                requested,
                res
            );
        }
        res
    }
}

#[inline]
fn steps(chord: f64, res: f64) -> usize {
    let n = (chord / res).ceil();
    if n.is_finite() && n >= 1.0 { n as usize } else { 1 }
}

fn arc_sweep_length(rx: f64, ry: f64, sweep: f64) -> f64 {
    rx.abs().max(ry.abs()) * sweep.abs()
}

/// Flatten a path into one polyline per subpath.
pub fn path_to_contours(path: &VectorPath, resolution: f64) -> Vec<Vec<Point>> {
    let res = effective_resolution(resolution);
    let mut contours: Vec<Vec<Point>> = Vec::new();
    let mut cur = Point::ORIGIN;
    let mut start = Point::ORIGIN;

    for seg in &path.segments {
        if let PathSegment::MoveTo { to } = *seg {
            contours.push(vec![to]);
            cur = to;
            start = to;
            continue;
        }
        let Some(out) = contours.last_mut() else { continue };
        match *seg {
            PathSegment::LineTo { to } => {
                out.push(to);
                cur = to;
            }
            PathSegment::CubicTo { ctrl1, ctrl2, to } => {
                let curve = CubicBezier::new(cur, ctrl1, ctrl2, to);
                let n = steps(cur.distance(to), res);
                for i in 1..=n {
                    out.push(curve.eval(i as f64 / n as f64));
                }
                cur = to;
            }
            PathSegment::QuadTo { ctrl, to } => {
                let curve = QuadraticBezier::new(cur, ctrl, to);
                let n = steps(cur.distance(to), res);
                for i in 1..=n {
                    out.push(curve.eval(i as f64 / n as f64));
                }
                cur = to;
            }
            PathSegment::ArcTo { rx, ry, x_axis_rotation, large_arc, sweep, to } => {
                let arc = EndpointArc { from: cur, to, rx, ry, x_axis_rotation, large_arc, sweep };
                if let Some(c) = arc.to_center() {
                    let n = steps(arc_sweep_length(c.rx, c.ry, c.sweep_angle), res);
                    for i in 1..n {
                        out.push(c.point_at(i as f64 / n as f64));
                    }
                }
                out.push(to);
                cur = to;
            }
            PathSegment::Close => cur = start,
            PathSegment::MoveTo { .. } => {}
        }
    }
    contours
}

/// Flatten a path into a single point sequence; subpaths are concatenated.
pub fn path_to_points(path: &VectorPath, resolution: f64) -> Vec<Point> {
    path_to_contours(path, resolution).into_iter().flatten().collect()
}

/// Number of points `path_to_points` would produce, without evaluating.
pub fn estimate_points(path: &VectorPath, resolution: f64) -> usize {
    let res = effective_resolution(resolution);
    let mut cur = Point::ORIGIN;
    let mut start = Point::ORIGIN;
    let mut n = 0usize;
    for seg in &path.segments {
        match *seg {
            PathSegment::MoveTo { to } => {
                n += 1;
                start = to;
            }
            PathSegment::LineTo { .. } => n += 1,
            PathSegment::CubicTo { to, .. } | PathSegment::QuadTo { to, .. } => {
                n = n.saturating_add(steps(cur.distance(to), res));
            }
            PathSegment::ArcTo { rx, ry, x_axis_rotation, large_arc, sweep, to } => {
                let arc = EndpointArc { from: cur, to, rx, ry, x_axis_rotation, large_arc, sweep };
                n = n.saturating_add(match arc.to_center() {
                    Some(c) => steps(arc_sweep_length(c.rx, c.ry, c.sweep_angle), res),
                    None => 1,
                });
            }
            PathSegment::Close => {
                cur = start;
                continue;
            }
        }
        if let Some(p) = seg.end_point() {
            cur = p;
        }
    }
    n
}
