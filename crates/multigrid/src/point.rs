//! Immutable 2D point used throughout the arrangement and the tiling.
//!
//! `-0.0` is normalized to `+0.0` on construction so that equal coordinates
//! hash equally; points are used as map keys for intersections and tile
//! vertices.

use std::hash::{Hash, Hasher};

use nalgebra::Vector2;

use crate::error::{MultigridError, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct Point {
    x: f64,
    y: f64,
}

#[inline]
fn positive_zero(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: positive_zero(x),
            y: positive_zero(y),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn from_vector(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }

    /// Distance to the origin.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.to_vector().norm()
    }

    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        (other.to_vector() - self.to_vector()).norm()
    }

    #[inline]
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// The point `distance` away from `self` in the direction of `target`.
    pub fn toward(&self, target: &Point, distance: f64) -> Result<Point> {
        let delta = target.to_vector() - self.to_vector();
        let length = delta.norm();
        if length == 0.0 {
            return Err(MultigridError::ZeroLengthDirection);
        }
        Ok(Point::from_vector(self.to_vector() + delta * (distance / length)))
    }

    /// Rotate about the origin by `angle`, then shift by `offset` along the
    /// rotated y axis. Maps the x axis onto `Line::new(angle, offset)`.
    pub fn rotate_and_shift(&self, angle: f64, offset: f64) -> Point {
        let (sin, cos) = angle.sin_cos();
        let rx = self.x * cos - self.y * sin;
        let ry = self.x * sin + self.y * cos;
        Point::new(rx - offset * sin, ry + offset * cos)
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl From<Vector2<f64>> for Point {
    fn from(v: Vector2<f64>) -> Self {
        Point::from_vector(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn negative_zero_hashes_like_zero() {
        let mut set = HashSet::new();
        set.insert(Point::new(-0.0, 1.0));
        assert!(set.contains(&Point::new(0.0, 1.0)));
        assert!(Point::new(-0.0, -0.0).x().is_sign_positive());
    }

    #[test]
    fn distance_and_midpoint() {
        let a = Point::new(1.0, 0.0);
        let b = Point::new(5.0, 3.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
        assert_eq!(a.midpoint(&b), Point::new(3.0, 1.5));
        assert!((Point::new(3.0, 4.0).norm() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn toward_walks_along_direction() {
        let c = Point::new(0.0, 0.0);
        let a = Point::new(0.0, 2.0);
        let p = c.toward(&a, 1.0).unwrap();
        assert!((p.x()).abs() < 1e-12 && (p.y() - 1.0).abs() < 1e-12);
        assert_eq!(c.toward(&c, 1.0), Err(MultigridError::ZeroLengthDirection));
    }

    #[test]
    fn rotate_and_shift_preserves_distance() {
        let angle = std::f64::consts::FRAC_PI_4;
        let p1 = Point::new(1.0, 0.0).rotate_and_shift(angle, 3.0);
        let p2 = Point::new(5.0, 0.0).rotate_and_shift(angle, 3.0);
        assert!((p1.distance(&p2) - 4.0).abs() < 1e-12);
        // Both land on the line with normal (-sin, cos) at offset 3.
        let (s, c) = angle.sin_cos();
        for p in [p1, p2] {
            assert!((-p.x() * s + p.y() * c - 3.0).abs() < 1e-12);
        }
    }
}
