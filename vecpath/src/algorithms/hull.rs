//! Convex hull by gift wrapping (Jarvis march).
//!
//! O(n·h). Used by the boolean engine's union, where point counts are
//! already bounded by the flatten budget.

use crate::geometry::math::Point;
use std::cmp::Ordering;

// Relative slack for treating three points as collinear.
const COLLINEAR_EPS: f64 = 1e-12;

/// Hull vertices without repeats or collinear interior points.
///
/// Starts at the lowest x (lowest y on ties) and proceeds counter-clockwise in a
/// y-up frame. Fewer than three distinct inputs come back as-is.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut pts: Vec<Point> = points.iter().copied().filter(|p| p.is_finite()).collect();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup();
    let n = pts.len();
    if n < 3 {
        return pts;
    }

    let start = 0usize;
    let mut hull = Vec::new();
    let mut current = start;
    loop {
        hull.push(pts[current]);
        let origin = pts[current];
        let mut candidate = if current == 0 { 1 } else { 0 };
        for i in 0..n {
            if i == current || i == candidate {
                continue;
            }
            let a = pts[candidate] - origin;
            let b = pts[i] - origin;
            let c = a.cross(b);
            let slack = COLLINEAR_EPS * a.length() * b.length();
            let take = if c < -slack {
                true
            } else if c <= slack {
                // Collinear: keep the farthest so interior points are skipped
                b.dot(b).partial_cmp(&a.dot(a)) == Some(Ordering::Greater)
            } else {
                false
            };
            if take {
                candidate = i;
            }
        }
        current = candidate;
        if current == start || hull.len() > n {
            break;
        }
    }
    hull
}
