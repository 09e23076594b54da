//! One line family of the multigrid.
//!
//! A pencil with angle θ, base offset o and radius r holds the `2r + 1` lines
//! at offsets `o − r ..= o + r`. Two extra boundary lines at
//! `o ± (r + 1 − inset)` bound the family; they are never intersected, only
//! used by [`Pencil::contains`] to cull arrangement vertices near the rim.

use crate::line::Line;
use crate::point::Point;

#[derive(Clone, Debug)]
pub struct Pencil {
    family: usize,
    angle: f64,
    offset: f64,
    radius: usize,
    lines: Vec<Line>,
    lower: Line,
    upper: Line,
}

impl Pencil {
    pub fn new(family: usize, angle: f64, offset: f64, radius: usize, inset: f64) -> Self {
        let r = radius as i64;
        let lines: Vec<Line> = (-r..=r).map(|j| Line::new(angle, offset + j as f64)).collect();
        let reach = radius as f64 + (1.0 - inset);
        Self {
            family,
            angle,
            offset,
            radius,
            lines,
            lower: Line::new(angle, offset - reach),
            upper: Line::new(angle, offset + reach),
        }
    }

    #[inline]
    pub fn family(&self) -> usize {
        self.family
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
    pub fn radius(&self) -> usize {
        self.radius
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// The two boundary lines `(lower, upper)`.
    pub fn boundary(&self) -> (Line, Line) {
        (self.lower, self.upper)
    }

    /// True iff `p` projects between the boundary lines (inclusive).
    pub fn contains(&self, p: &Point) -> bool {
        let v = self.lower.project_normal(p);
        let lo = self.lower.offset().min(self.upper.offset());
        let hi = self.lower.offset().max(self.upper.offset());
        v >= lo && v <= hi
    }
}
