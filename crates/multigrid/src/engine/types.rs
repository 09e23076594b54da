//! Data types of a built tiling.
//!
//! Everything here is immutable after `build` returns.

use std::collections::{BTreeSet, HashMap};

use crate::line::Line;
use crate::params::Params;
use crate::pencil::Pencil;
use crate::point::Point;
use crate::tile::Tile;

/// Index of a line in [`Tiling::lines`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineId(pub usize);

/// One vertex of the line arrangement.
#[derive(Clone, Debug)]
pub struct Intersection {
    /// First-seen coordinate of the cluster of pairwise solutions.
    pub point: Point,
    /// Lines through `point`; always at least two.
    pub lines: BTreeSet<LineId>,
    /// Dual polygon, present iff every pencil contains `point`.
    pub dual: Option<Vec<Point>>,
}

/// Immutable result of one multigrid build.
#[derive(Clone, Debug)]
pub struct Tiling {
    pub(crate) params: Params,
    pub(crate) pencils: Vec<Pencil>,
    pub(crate) lines: Vec<Line>,
    pub(crate) intersections: Vec<Intersection>,
    pub(crate) by_point: HashMap<Point, usize>,
    pub(crate) line_points: Vec<Vec<Point>>,
    pub(crate) tiles: Vec<Tile>,
    pub(crate) areas: Vec<f64>,
    pub(crate) signatures: BTreeSet<[u32; 4]>,
    pub(crate) radius: f64,
}

impl Tiling {
    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn symmetry(&self) -> usize {
        self.params.symmetry
    }

    pub fn pencils(&self) -> &[Pencil] {
        &self.pencils
    }

    /// All grid lines, pencil by pencil.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.get(id.0)
    }

    /// Arrangement vertices in discovery order.
    pub fn intersections(&self) -> &[Intersection] {
        &self.intersections
    }

    pub fn intersection(&self, point: &Point) -> Option<&Intersection> {
        self.by_point.get(point).map(|&k| &self.intersections[k])
    }

    /// Lines incident to an arrangement vertex.
    pub fn incident_lines(&self, point: &Point) -> Option<&BTreeSet<LineId>> {
        self.intersection(point).map(|i| &i.lines)
    }

    /// Arrangement vertices on a line, sorted along its direction.
    pub fn line_points(&self, id: LineId) -> &[Point] {
        self.line_points.get(id.0).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Dual polygon of a retained arrangement vertex, accepted or not.
    pub fn dual(&self, point: &Point) -> Option<&[Point]> {
        self.intersection(point)?.dual.as_deref()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Distinct tile areas, ascending.
    pub fn areas(&self) -> &[f64] {
        &self.areas
    }

    /// Distinct sorted grid-index signatures of accepted tiles.
    pub fn signatures(&self) -> &BTreeSet<[u32; 4]> {
        &self.signatures
    }

    /// Largest absolute vertex coordinate over accepted tiles.
    pub fn tiling_radius(&self) -> f64 {
        self.radius
    }

    /// True iff every pencil contains `point`.
    pub fn contains(&self, point: &Point) -> bool {
        self.pencils.iter().all(|p| p.contains(point))
    }
}
