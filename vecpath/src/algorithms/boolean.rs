//! Approximate boolean operations on paths (union, subtract, intersect, exclude).
//!
//! This is a point-set approximation, not a polygon clipper:
//! 1. Bounding boxes are compared. Disjoint inputs take a fixed shortcut per
//!    operation.
//! 2. Otherwise both paths are flattened and every sample of each path is
//!    classified against the other path's polyline by ray-cast parity.
//! 3. The qualifying samples become a closed polyline (`M L… Z`).
//!
//! UNION keeps only the convex envelope of the qualifying samples, so a
//! concave union (an L-shape, say) comes back convex. SUBTRACT, INTERSECT
//! and EXCLUDE keep samples in their original order with no reordering.
//! Curves never survive: every result is straight-line segments.

use crate::algorithms::hull::convex_hull;
use crate::algorithms::winding::point_in_polygon_evenodd;
use crate::geometry::flatten::{path_to_points, FlattenOptions};
use crate::geometry::math::Point;
use crate::model::{PathSegment, VectorPath, WindingRule};
use serde::{Deserialize, Serialize};

/// Boolean operation type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoolOp {
    /// A ∪ B - areas in A or B or both
    Union,
    /// A - B - areas in A but not in B
    Subtract,
    /// A ∩ B - areas in both A and B
    Intersect,
    /// A ⊕ B - areas in A or B but not both
    Exclude,
}

/// Combine two paths with the default flatten options.
pub fn boolean_operation(a: &VectorPath, b: &VectorPath, op: BoolOp) -> VectorPath {
    boolean_operation_with(a, b, op, &FlattenOptions::default())
}

/// Combine two paths. Inputs are never modified; the result is a new path,
/// except for the disjoint SUBTRACT shortcut which returns A as-is.
///
/// Classification is O(n·m) in the sample counts, bounded by
/// `opts.max_points`.
pub fn boolean_operation_with(
    a: &VectorPath,
    b: &VectorPath,
    op: BoolOp,
    opts: &FlattenOptions,
) -> VectorPath {
    if a.segments.len() < 2 || b.segments.len() < 2 {
        log::debug!("boolean {:?}: operand too short, empty result", op);
        return VectorPath::empty();
    }

    let (Some(bounds_a), Some(bounds_b)) = (a.bounds(), b.bounds()) else {
        return VectorPath::empty();
    };

    if !bounds_a.overlaps(&bounds_b) {
        log::debug!("boolean {:?}: disjoint bounds, shortcut", op);
        return match op {
            BoolOp::Union => concat_contours(a, b, WindingRule::NonZero),
            BoolOp::Subtract => a.clone(),
            BoolOp::Intersect => VectorPath::empty(),
            BoolOp::Exclude => concat_contours(a, b, WindingRule::EvenOdd),
        };
    }

    let res = opts.resolution_for(&[a, b]);
    let points_a = path_to_points(a, res);
    let points_b = path_to_points(b, res);

    let points = match op {
        BoolOp::Union => {
            let mut candidates = outside(&points_a, &points_b);
            candidates.extend(outside(&points_b, &points_a));
            convex_hull(&candidates)
        }
        BoolOp::Subtract => outside(&points_a, &points_b),
        BoolOp::Intersect => inside(&points_a, &points_b),
        BoolOp::Exclude => {
            let mut pts = outside(&points_a, &points_b);
            pts.extend(outside(&points_b, &points_a));
            pts
        }
    };

    let rule = if op == BoolOp::Exclude { WindingRule::EvenOdd } else { WindingRule::NonZero };
    polyline_path(&points, rule)
}

/// A's segments without its `Close` commands, followed by all of B's.
fn concat_contours(a: &VectorPath, b: &VectorPath, rule: WindingRule) -> VectorPath {
    let mut segments: Vec<PathSegment> = a
        .segments
        .iter()
        .copied()
        .filter(|s| !matches!(s, PathSegment::Close))
        .collect();
    segments.extend(b.segments.iter().copied());
    VectorPath::build(segments, b.closed, rule)
}

fn outside(points: &[Point], polygon: &[Point]) -> Vec<Point> {
    points.iter().copied().filter(|p| !point_in_polygon_evenodd(*p, polygon)).collect()
}

fn inside(points: &[Point], polygon: &[Point]) -> Vec<Point> {
    points.iter().copied().filter(|p| point_in_polygon_evenodd(*p, polygon)).collect()
}

/// Closed polyline through `points`; empty input gives an empty path.
fn polyline_path(points: &[Point], rule: WindingRule) -> VectorPath {
    let Some((first, rest)) = points.split_first() else {
        return VectorPath::empty();
    };
    let mut segments = Vec::with_capacity(points.len() + 1);
    segments.push(PathSegment::MoveTo { to: *first });
    segments.extend(rest.iter().map(|&to| PathSegment::LineTo { to }));
    segments.push(PathSegment::Close);
    VectorPath::build(segments, true, rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, size: f64) -> VectorPath {
        VectorPath::new(
            vec![
                PathSegment::MoveTo { to: Point::new(x, y) },
                PathSegment::LineTo { to: Point::new(x + size, y) },
                PathSegment::LineTo { to: Point::new(x + size, y + size) },
                PathSegment::LineTo { to: Point::new(x, y + size) },
                PathSegment::Close,
            ],
            WindingRule::NonZero,
        )
        .unwrap()
    }

    #[test]
    fn polyline_of_nothing_is_empty() {
        let p = polyline_path(&[], WindingRule::NonZero);
        assert!(p.is_empty());
        assert!(!p.closed);
    }

    #[test]
    fn subtract_keeps_sample_order() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(5.0, -5.0, 20.0);
        let r = boolean_operation(&a, &b, BoolOp::Subtract);
        // A's left corners survive, in A's order: (0,0) first, then (0,10)
        let pts: Vec<Point> = r.segments.iter().filter_map(PathSegment::end_point).collect();
        assert_eq!(pts, vec![Point::new(0.0, 0.0), Point::new(0.0, 10.0)]);
        assert!(r.closed);
    }

    #[test]
    fn intersect_keeps_inside_samples() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(-1.0, -1.0, 5.0);
        let r = boolean_operation(&a, &b, BoolOp::Intersect);
        assert_eq!(r.segments.first(), Some(&PathSegment::MoveTo { to: Point::new(0.0, 0.0) }));
        assert_eq!(r.segments.len(), 2);
        assert_eq!(r.segments[1], PathSegment::Close);
    }

    #[test]
    fn exclude_is_evenodd() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(5.0, 5.0, 10.0);
        let r = boolean_operation(&a, &b, BoolOp::Exclude);
        assert_eq!(r.winding_rule, WindingRule::EvenOdd);
        assert!(r.closed);
    }
}
