//! 2D point arithmetic.
//!
//! `Point` doubles as a vector; all operations are total. `normalize` of a
//! zero-length input yields `(0, 0)` rather than NaN.

use super::tolerance::EPS_LEN;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn scale(self, s: f64) -> Point {
        Point::new(self.x * s, self.y * s)
    }

    #[inline]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    #[inline]
    pub fn dot(self, o: Point) -> f64 {
        self.x * o.x + self.y * o.y
    }

    /// z component of the 3D cross product.
    #[inline]
    pub fn cross(self, o: Point) -> f64 {
        self.x * o.y - self.y * o.x
    }

    pub fn normalize(self) -> Point {
        let len = self.length();
        if len > EPS_LEN {
            Point::new(self.x / len, self.y / len)
        } else {
            Point::ORIGIN
        }
    }

    /// Rotate by `angle` radians around `center`.
    pub fn rotate(self, angle: f64, center: Point) -> Point {
        let (s, c) = angle.sin_cos();
        let d = self - center;
        Point::new(center.x + d.x * c - d.y * s, center.y + d.x * s + d.y * c)
    }

    #[inline]
    pub fn rotate_about_origin(self, angle: f64) -> Point {
        self.rotate(angle, Point::ORIGIN)
    }

    #[inline]
    pub fn lerp(self, to: Point, t: f64) -> Point {
        Point::new(self.x + t * (to.x - self.x), self.y + t * (to.y - self.y))
    }

    #[inline]
    pub fn distance(self, o: Point) -> f64 {
        (o - self).length()
    }

    /// Reflection of `self` through `pivot`.
    #[inline]
    pub fn reflect_through(self, pivot: Point) -> Point {
        Point::new(2.0 * pivot.x - self.x, 2.0 * pivot.y - self.y)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, o: Point) -> Point {
        Point::new(self.x + o.x, self.y + o.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, o: Point) -> Point {
        Point::new(self.x - o.x, self.y - o.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, s: f64) -> Point {
        self.scale(s)
    }
}

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}
