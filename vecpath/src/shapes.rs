//! Procedural shape generators.
//!
//! Every generator returns a closed `VectorPath` with a fresh id. Invalid
//! counts, negative sizes and non-finite input are rejected; corner radii are
//! clamped to the largest value the shape can hold.

use crate::error::ShapeError;
use crate::geometry::math::Point;
use crate::geometry::tolerance::{KAPPA, RECT_CORNER_FRACTION};
use crate::model::{PathSegment, VectorPath, WindingRule};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Corner radii for `rectangle`, either one value or `[tl, tr, br, bl]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CornerRadii {
    Uniform(f64),
    PerCorner([f64; 4]),
}

impl CornerRadii {
    fn as_array(self) -> [f64; 4] {
        match self {
            CornerRadii::Uniform(r) => [r; 4],
            CornerRadii::PerCorner(r) => r,
        }
    }
}

impl Default for CornerRadii {
    fn default() -> Self {
        CornerRadii::Uniform(0.0)
    }
}

impl From<f64> for CornerRadii {
    fn from(r: f64) -> Self {
        CornerRadii::Uniform(r)
    }
}

impl From<[f64; 4]> for CornerRadii {
    fn from(r: [f64; 4]) -> Self {
        CornerRadii::PerCorner(r)
    }
}

/// Angular extent and hole of an ellipse. Angles are radians measured from
/// +x towards +y; `inner_radius` is a ratio of the outer radii.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EllipseArc {
    pub start_angle: f64,
    pub end_angle: f64,
    pub inner_radius: f64,
}

impl Default for EllipseArc {
    fn default() -> Self {
        Self { start_angle: 0.0, end_angle: TAU, inner_radius: 0.0 }
    }
}

fn finite(name: &'static str, v: f64) -> Result<f64, ShapeError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ShapeError::invalid(name, v, "must be finite"))
    }
}

fn non_negative(name: &'static str, v: f64) -> Result<f64, ShapeError> {
    if finite(name, v)? < 0.0 {
        return Err(ShapeError::invalid(name, v, "must not be negative"));
    }
    Ok(v)
}

/// Pushes `L to` unless the pen is already there.
fn line_to(segments: &mut Vec<PathSegment>, cur: &mut Point, to: Point) {
    if *cur != to {
        segments.push(PathSegment::LineTo { to });
        *cur = to;
    }
}

/// Axis-aligned rectangle with optional rounded corners.
///
/// Each rounded corner is a single cubic whose controls sit
/// `0.448·r` from the corner point along the adjacent sides.
pub fn rectangle(
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    corner_radius: impl Into<CornerRadii>,
) -> Result<VectorPath, ShapeError> {
    finite("x", x)?;
    finite("y", y)?;
    non_negative("width", w)?;
    non_negative("height", h)?;

    let max_r = w.min(h) / 2.0;
    let raw = corner_radius.into().as_array();
    let mut r = [0.0f64; 4];
    for (dst, src) in r.iter_mut().zip(raw) {
        let src = finite("corner_radius", src)?;
        *dst = src.max(0.0).min(max_r);
    }
    let [tl, tr, br, bl] = r;
    let f = RECT_CORNER_FRACTION;

    // (corner point, entry on the incoming side, exit on the outgoing side, radius)
    let corners = [
        (Point::new(x + w, y), Point::new(x + w - tr, y), Point::new(x + w, y + tr), tr),
        (Point::new(x + w, y + h), Point::new(x + w, y + h - br), Point::new(x + w - br, y + h), br),
        (Point::new(x, y + h), Point::new(x + bl, y + h), Point::new(x, y + h - bl), bl),
        (Point::new(x, y), Point::new(x, y + tl), Point::new(x + tl, y), tl),
    ];

    let start = Point::new(x + tl, y);
    let mut segments = vec![PathSegment::MoveTo { to: start }];
    let mut cur = start;
    for (corner, entry, exit, radius) in corners {
        line_to(&mut segments, &mut cur, entry);
        if radius > 0.0 {
            segments.push(PathSegment::CubicTo {
                ctrl1: entry.lerp(corner, 1.0 - f),
                ctrl2: exit.lerp(corner, 1.0 - f),
                to: exit,
            });
            cur = exit;
        }
    }
    // A sharp top-left corner would otherwise end with a line back to the start
    if segments.last() == Some(&PathSegment::LineTo { to: start }) {
        segments.pop();
    }
    segments.push(PathSegment::Close);
    Ok(VectorPath::build(segments, true, WindingRule::NonZero))
}

/// Ellipse, elliptical arc (pie wedge) or ring.
///
/// A full sweep without a hole is four kappa cubics starting at angle 0.
/// Anything else is drawn with `A` segments: a wedge is center, start, arc,
/// close; a ring is outer arc, a line inwards, and the inner arc traced back
/// in the opposite direction, all as one contour.
pub fn ellipse(cx: f64, cy: f64, rx: f64, ry: f64, arc: EllipseArc) -> Result<VectorPath, ShapeError> {
    finite("cx", cx)?;
    finite("cy", cy)?;
    non_negative("rx", rx)?;
    non_negative("ry", ry)?;
    let start = finite("start_angle", arc.start_angle)?;
    let end = finite("end_angle", arc.end_angle)?;
    let ratio = non_negative("inner_radius", arc.inner_radius)?;
    if ratio >= 1.0 {
        return Err(ShapeError::invalid("inner_radius", ratio, "must be below 1"));
    }

    let sweep = end - start;
    let full = sweep.abs() >= TAU;
    if full && ratio == 0.0 {
        return Ok(full_ellipse(cx, cy, rx, ry));
    }

    let center = Point::new(cx, cy);
    let at = |rx: f64, ry: f64, a: f64| Point::new(cx + rx * a.cos(), cy + ry * a.sin());
    let sweep_flag = sweep > 0.0;
    let arc_seg = |rx: f64, ry: f64, large_arc: bool, sweep: bool, to: Point| PathSegment::ArcTo {
        rx,
        ry,
        x_axis_rotation: 0.0,
        large_arc,
        sweep,
        to,
    };

    // A single SVG arc cannot close on itself, so full sweeps use two halves.
    let (end, mid) = if full { (start + TAU.copysign(sweep), Some(start + PI.copysign(sweep))) } else { (end, None) };
    let large_arc = (end - start).abs() > PI;

    let mut segments = Vec::new();
    if ratio == 0.0 {
        segments.push(PathSegment::MoveTo { to: center });
        segments.push(PathSegment::LineTo { to: at(rx, ry, start) });
        segments.push(arc_seg(rx, ry, large_arc, sweep_flag, at(rx, ry, end)));
    } else {
        let (irx, iry) = (rx * ratio, ry * ratio);
        segments.push(PathSegment::MoveTo { to: at(rx, ry, start) });
        match mid {
            Some(mid) => {
                segments.push(arc_seg(rx, ry, false, sweep_flag, at(rx, ry, mid)));
                segments.push(arc_seg(rx, ry, false, sweep_flag, at(rx, ry, end)));
                segments.push(PathSegment::LineTo { to: at(irx, iry, end) });
                segments.push(arc_seg(irx, iry, false, !sweep_flag, at(irx, iry, mid)));
                segments.push(arc_seg(irx, iry, false, !sweep_flag, at(irx, iry, start)));
            }
            None => {
                segments.push(arc_seg(rx, ry, large_arc, sweep_flag, at(rx, ry, end)));
                segments.push(PathSegment::LineTo { to: at(irx, iry, end) });
                segments.push(arc_seg(irx, iry, large_arc, !sweep_flag, at(irx, iry, start)));
            }
        }
    }
    segments.push(PathSegment::Close);
    Ok(VectorPath::build(segments, true, WindingRule::NonZero))
}

fn full_ellipse(cx: f64, cy: f64, rx: f64, ry: f64) -> VectorPath {
    let kx = KAPPA * rx;
    let ky = KAPPA * ry;

    let right = Point::new(cx + rx, cy);
    let bottom = Point::new(cx, cy + ry);
    let left = Point::new(cx - rx, cy);
    let top = Point::new(cx, cy - ry);

    let segments = vec![
        PathSegment::MoveTo { to: right },
        PathSegment::CubicTo { ctrl1: Point::new(cx + rx, cy + ky), ctrl2: Point::new(cx + kx, cy + ry), to: bottom },
        PathSegment::CubicTo { ctrl1: Point::new(cx - kx, cy + ry), ctrl2: Point::new(cx - rx, cy + ky), to: left },
        PathSegment::CubicTo { ctrl1: Point::new(cx - rx, cy - ky), ctrl2: Point::new(cx - kx, cy - ry), to: top },
        PathSegment::CubicTo { ctrl1: Point::new(cx + kx, cy - ry), ctrl2: Point::new(cx + rx, cy - ky), to: right },
        PathSegment::Close,
    ];
    VectorPath::build(segments, true, WindingRule::NonZero)
}

/// Vertex `i` of `n` evenly spaced around a circle, starting at the top.
fn ring_vertex(cx: f64, cy: f64, radius: f64, i: usize, n: usize) -> Point {
    let a = -FRAC_PI_2 + i as f64 * TAU / n as f64;
    Point::new(cx + radius * a.cos(), cy + radius * a.sin())
}

/// Regular polygon with the first vertex at the top.
///
/// With `corner_radius > 0` every corner becomes a quadratic whose control
/// is the original vertex and whose ends are inset along both adjacent
/// edges. The radius is clamped to `radius·sin(π/sides)`, half a side.
pub fn regular_polygon(
    cx: f64,
    cy: f64,
    radius: f64,
    sides: u32,
    corner_radius: f64,
) -> Result<VectorPath, ShapeError> {
    if sides < 3 {
        return Err(ShapeError::invalid("sides", sides as f64, "need at least 3"));
    }
    finite("cx", cx)?;
    finite("cy", cy)?;
    non_negative("radius", radius)?;
    let corner_radius = finite("corner_radius", corner_radius)?;

    let n = sides as usize;
    let verts: Vec<Point> = (0..n).map(|i| ring_vertex(cx, cy, radius, i, n)).collect();

    let mut segments = Vec::with_capacity(2 * n + 1);
    if corner_radius > 0.0 {
        let cr = corner_radius.min(radius * (PI / n as f64).sin());
        for i in 0..n {
            let v = verts[i];
            let prev = verts[(i + n - 1) % n];
            let next = verts[(i + 1) % n];
            let entry = v + (prev - v).normalize() * cr;
            let exit = v + (next - v).normalize() * cr;
            segments.push(if i == 0 { PathSegment::MoveTo { to: entry } } else { PathSegment::LineTo { to: entry } });
            segments.push(PathSegment::QuadTo { ctrl: v, to: exit });
        }
    } else {
        segments.push(PathSegment::MoveTo { to: verts[0] });
        segments.extend(verts[1..].iter().map(|&to| PathSegment::LineTo { to }));
    }
    segments.push(PathSegment::Close);
    Ok(VectorPath::build(segments, true, WindingRule::NonZero))
}

/// Star with `points` tips, alternating outer and inner radius.
///
/// Known limitation: `corner_radius` is accepted but not applied; tips and
/// valleys are always sharp.
pub fn star(
    cx: f64,
    cy: f64,
    outer_radius: f64,
    inner_radius: f64,
    points: u32,
    corner_radius: f64,
) -> Result<VectorPath, ShapeError> {
    if points < 2 {
        return Err(ShapeError::invalid("points", points as f64, "need at least 2"));
    }
    finite("cx", cx)?;
    finite("cy", cy)?;
    non_negative("outer_radius", outer_radius)?;
    non_negative("inner_radius", inner_radius)?;
    if corner_radius != 0.0 {
        log::debug!("star: corner_radius {} ignored", corner_radius);
    }

    let n = 2 * points as usize;
    let mut segments = Vec::with_capacity(n + 1);
    for i in 0..n {
        let r = if i % 2 == 0 { outer_radius } else { inner_radius };
        let to = ring_vertex(cx, cy, r, i, n);
        segments.push(if i == 0 { PathSegment::MoveTo { to } } else { PathSegment::LineTo { to } });
    }
    segments.push(PathSegment::Close);
    Ok(VectorPath::build(segments, true, WindingRule::NonZero))
}
