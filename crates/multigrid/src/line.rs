//! Oriented lines in angle / signed-offset form.
//!
//! `Line { angle: θ, offset: d }` is the set `{p : −p.x·sin θ + p.y·cos θ = d}`.
//! Its direction is `(cos θ, sin θ)` and its unit normal `(−sin θ, cos θ)`;
//! `d` is the signed distance of the line from the origin along that normal.

use nalgebra::{Matrix2, Vector2};

use crate::error::{MultigridError, Result};
use crate::point::Point;
use crate::tol::{approx_eq, SMALL_EPS};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    angle: f64,
    offset: f64,
    sin: f64,
    cos: f64,
}

impl Line {
    pub fn new(angle: f64, offset: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            angle,
            offset,
            sin,
            cos,
        }
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        Vector2::new(self.cos, self.sin)
    }

    #[inline]
    pub fn normal(&self) -> Vector2<f64> {
        Vector2::new(-self.sin, self.cos)
    }

    /// Signed distance of `p` from the parallel line through the origin.
    #[inline]
    pub fn project_normal(&self, p: &Point) -> f64 {
        self.normal().dot(&p.to_vector())
    }

    /// Intersection point, or `None` for equal angles and (near-)parallel lines.
    pub fn intersect(&self, other: &Line) -> Option<Point> {
        if self.angle == other.angle {
            return None;
        }
        let n1 = self.normal();
        let n2 = other.normal();
        let m = Matrix2::new(n1.x, n1.y, n2.x, n2.y);
        if m.determinant().abs() < SMALL_EPS {
            return None;
        }
        let inv = m.try_inverse()?;
        Some(Point::from_vector(inv * Vector2::new(self.offset, other.offset)))
    }

    /// True when `p` lies within `eps` of the line.
    #[inline]
    pub fn on_line(&self, p: &Point, eps: f64) -> bool {
        approx_eq(self.project_normal(p), self.offset, eps)
    }

    /// Signed position of `p` along the line; sorts the points incident to it.
    ///
    /// `p` must lie on the line. A point off the line means the caller mixed up
    /// incidences, which is an engine bug rather than an input problem.
    pub fn ordering_key(&self, p: &Point) -> Result<f64> {
        let residual = self.project_normal(p) - self.offset;
        if !approx_eq(residual, 0.0, SMALL_EPS) {
            return Err(MultigridError::PointOffLine {
                x: p.x(),
                y: p.y(),
                angle: self.angle,
                offset: self.offset,
                residual,
            });
        }
        let along = self.direction().dot(&p.to_vector());
        Ok(if approx_eq(along, 0.0, SMALL_EPS) {
            0.0
        } else {
            along
        })
    }
}
