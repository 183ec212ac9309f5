//! Point-in-polygon classification.
//!
//! Uses a horizontal ray cast from the test point towards +x. The crossing
//! count gives the even-odd answer; signed crossings give the winding number.

use crate::geometry::flatten::path_to_contours;
use crate::geometry::math::Point;
use crate::model::{VectorPath, WindingRule};

/// Compute the winding number of a point relative to a polygon.
///
/// The polygon is implicitly closed. Positive means counter-clockwise in a
/// y-up frame.
pub fn winding_number(p: Point, polygon: &[Point]) -> i32 {
    if polygon.len() < 3 {
        return 0;
    }

    let mut winding = 0i32;
    let n = polygon.len();

    for i in 0..n {
        let p1 = polygon[i];
        let p2 = polygon[(i + 1) % n];

        if p1.y <= p.y {
            if p2.y > p.y && (p1 - p).cross(p2 - p) > 0.0 {
                // Upward crossing
                winding += 1;
            }
        } else if p2.y <= p.y && (p1 - p).cross(p2 - p) < 0.0 {
            // Downward crossing
            winding -= 1;
        }
    }

    winding
}

/// Number of polygon edges crossed by the ray from `p` towards +x.
pub fn crossing_number(p: Point, polygon: &[Point]) -> u32 {
    if polygon.len() < 3 {
        return 0;
    }

    let mut crossings = 0u32;
    let n = polygon.len();

    for i in 0..n {
        let p1 = polygon[i];
        let p2 = polygon[(i + 1) % n];

        // Half-open in y so a vertex on the ray is counted once
        let y_crosses = (p1.y <= p.y && p2.y > p.y) || (p2.y <= p.y && p1.y > p.y);

        if y_crosses {
            let t = (p.y - p1.y) / (p2.y - p1.y);
            let x_intersect = p1.x + t * (p2.x - p1.x);

            if p.x < x_intersect {
                crossings += 1;
            }
        }
    }

    crossings
}

/// Odd crossing count means inside.
#[inline]
pub fn point_in_polygon_evenodd(p: Point, polygon: &[Point]) -> bool {
    crossing_number(p, polygon) % 2 == 1
}

#[inline]
pub fn point_in_polygon_nonzero(p: Point, polygon: &[Point]) -> bool {
    winding_number(p, polygon) != 0
}

/// Hit test against a path, each subpath closed implicitly, using the
/// path's own winding rule.
pub fn path_contains(path: &VectorPath, p: Point, resolution: f64) -> bool {
    let contours = path_to_contours(path, resolution);
    match path.winding_rule {
        WindingRule::NonZero => contours.iter().map(|c| winding_number(p, c)).sum::<i32>() != 0,
        WindingRule::EvenOdd => contours.iter().map(|c| crossing_number(p, c)).sum::<u32>() % 2 == 1,
    }
}
