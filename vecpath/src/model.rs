use crate::geometry::arc::EndpointArc;
use crate::geometry::bounds::Bounds;
use crate::geometry::math::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_PATH_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a path. Every operation that yields a path mints a new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathId(pub u64);

impl PathId {
    pub fn fresh() -> PathId {
        PathId(NEXT_PATH_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for PathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "path#{}", self.0)
    }
}

/// Index of a vertex in an authoring session or a network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(pub u32);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vertex#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WindingRule {
    #[default]
    NonZero,
    EvenOdd,
}

/// One path command with exactly the points it needs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum PathSegment {
    #[serde(rename = "M")]
    MoveTo { to: Point },
    #[serde(rename = "L")]
    LineTo { to: Point },
    #[serde(rename = "C")]
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
    #[serde(rename = "Q")]
    QuadTo { ctrl: Point, to: Point },
    #[serde(rename = "A")]
    ArcTo {
        rx: f64,
        ry: f64,
        /// Degrees, as in SVG.
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    #[serde(rename = "Z")]
    Close,
}

impl PathSegment {
    pub fn command(&self) -> char {
        match self {
            PathSegment::MoveTo { .. } => 'M',
            PathSegment::LineTo { .. } => 'L',
            PathSegment::CubicTo { .. } => 'C',
            PathSegment::QuadTo { .. } => 'Q',
            PathSegment::ArcTo { .. } => 'A',
            PathSegment::Close => 'Z',
        }
    }

    /// The point the pen rests on after this segment; `None` for `Close`,
    /// whose end is the subpath start.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathSegment::MoveTo { to }
            | PathSegment::LineTo { to }
            | PathSegment::CubicTo { to, .. }
            | PathSegment::QuadTo { to, .. }
            | PathSegment::ArcTo { to, .. } => Some(to),
            PathSegment::Close => None,
        }
    }

    pub(crate) fn points(&self) -> impl Iterator<Item = Point> {
        let arr: [Option<Point>; 3] = match *self {
            PathSegment::MoveTo { to } | PathSegment::LineTo { to } => [Some(to), None, None],
            PathSegment::CubicTo { ctrl1, ctrl2, to } => [Some(ctrl1), Some(ctrl2), Some(to)],
            PathSegment::QuadTo { ctrl, to } => [Some(ctrl), Some(to), None],
            PathSegment::ArcTo { to, .. } => [Some(to), None, None],
            PathSegment::Close => [None, None, None],
        };
        arr.into_iter().flatten()
    }

    pub(crate) fn is_finite(&self) -> bool {
        let scalars_ok = match *self {
            PathSegment::ArcTo { rx, ry, x_axis_rotation, .. } => {
                rx.is_finite() && ry.is_finite() && x_axis_rotation.is_finite()
            }
            _ => true,
        };
        scalars_ok && self.points().all(Point::is_finite)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VectorPath {
    pub id: PathId,
    pub segments: Vec<PathSegment>,
    pub closed: bool,
    pub winding_rule: WindingRule,
}

impl VectorPath {
    /// Build a path from segments. Returns `None` when a non-empty segment
    /// list does not start with `MoveTo`. `closed` follows the last segment.
    pub fn new(segments: Vec<PathSegment>, winding_rule: WindingRule) -> Option<VectorPath> {
        match segments.first() {
            None | Some(PathSegment::MoveTo { .. }) => {}
            Some(_) => return None,
        }
        let closed = matches!(segments.last(), Some(PathSegment::Close));
        Some(Self::build(segments, closed, winding_rule))
    }

    pub(crate) fn build(segments: Vec<PathSegment>, closed: bool, winding_rule: WindingRule) -> VectorPath {
        VectorPath { id: PathId::fresh(), segments, closed, winding_rule }
    }

    pub fn empty() -> VectorPath {
        Self::build(Vec::new(), false, WindingRule::NonZero)
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Same geometry under a new identity.
    pub fn fresh_id(&self) -> VectorPath {
        VectorPath { id: PathId::fresh(), ..self.clone() }
    }

    pub fn subpath_count(&self) -> usize {
        self.segments.iter().filter(|s| matches!(s, PathSegment::MoveTo { .. })).count()
    }

    pub fn start_point(&self) -> Option<Point> {
        match self.segments.first() {
            Some(PathSegment::MoveTo { to }) => Some(*to),
            _ => None,
        }
    }

    /// Bounding box of anchors and control points. Arcs contribute the
    /// control points of their cubic approximation, so the box is
    /// conservative for curves.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut pts = Vec::new();
        let mut cur = Point::ORIGIN;
        let mut start = Point::ORIGIN;
        for seg in &self.segments {
            match *seg {
                PathSegment::ArcTo { rx, ry, x_axis_rotation, large_arc, sweep, to } => {
                    let arc = EndpointArc { from: cur, to, rx, ry, x_axis_rotation, large_arc, sweep };
                    if let Some(c) = arc.to_center() {
                        for cubic in c.to_cubics() {
                            pts.extend(cubic.points());
                        }
                    }
                    pts.push(to);
                }
                PathSegment::MoveTo { to } => {
                    start = to;
                    pts.push(to);
                }
                PathSegment::Close => {
                    cur = start;
                    continue;
                }
                _ => pts.extend(seg.points()),
            }
            if let Some(p) = seg.end_point() {
                cur = p;
            }
        }
        Bounds::from_points(pts)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HandleMirroring {
    #[default]
    None,
    Angle,
    AngleAndLength,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrokeCap {
    None,
    Round,
    Square,
    ArrowLines,
    ArrowEquilateral,
}

/// Anchor used while authoring and in vector networks. Handles are
/// absolute positions, not offsets.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VectorVertex {
    pub id: VertexId,
    pub position: Point,
    pub handle_in: Option<Point>,
    pub handle_out: Option<Point>,
    pub corner_radius: f64,
    pub handle_mirroring: HandleMirroring,
    pub stroke_cap: Option<StrokeCap>,
}

impl VectorVertex {
    pub fn corner(id: VertexId, position: Point) -> VectorVertex {
        VectorVertex {
            id,
            position,
            handle_in: None,
            handle_out: None,
            corner_radius: 0.0,
            handle_mirroring: HandleMirroring::None,
            stroke_cap: None,
        }
    }

    pub fn has_handles(&self) -> bool {
        self.handle_in.is_some() || self.handle_out.is_some()
    }
}
