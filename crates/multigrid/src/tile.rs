//! Accepted tiles: unit rhombi with a canonical corner order.

use serde::Serialize;

use crate::engine::canonical::reference_corner;
use crate::error::Result;
use crate::point::Point;
use crate::tol::{round_to, COARSE_EPS};

/// A validated rhombus of the tiling.
///
/// Vertices follow the wedge order around the source vertex, starting at the
/// reference corner chosen by [`reference_corner`], so decorations that care
/// about orientation line up across tiles of the same shape. `labels[k]` is the
/// grid index of `vertices[k]`: the lane sum of that vertex reduced modulo the
/// symmetry (absolute truncated remainder, so negative sums map to `|s % n|`).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tile {
    source: Point,
    vertices: [Point; 4],
    labels: [u32; 4],
    lane_sums: [i64; 4],
    area: f64,
}

impl Tile {
    pub(crate) fn new(
        source: Point,
        mut vertices: [Point; 4],
        mut labels: [u32; 4],
        mut lane_sums: [i64; 4],
        symmetry: usize,
    ) -> Result<Self> {
        let shift = reference_corner(&labels, &lane_sums, symmetry)?;
        vertices.rotate_left(shift);
        labels.rotate_left(shift);
        lane_sums.rotate_left(shift);
        let d1 = vertices[0].distance(&vertices[2]);
        let d2 = vertices[1].distance(&vertices[3]);
        Ok(Self {
            source,
            vertices,
            labels,
            lane_sums,
            area: round_to(0.5 * d1 * d2, COARSE_EPS),
        })
    }

    /// The arrangement vertex this tile is dual to.
    #[inline]
    pub fn source(&self) -> Point {
        self.source
    }

    #[inline]
    pub fn vertices(&self) -> &[Point; 4] {
        &self.vertices
    }

    /// Half the product of the diagonals, rounded to `COARSE_EPS`.
    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }

    #[inline]
    pub fn labels(&self) -> &[u32; 4] {
        &self.labels
    }

    /// Unreduced lane sums per vertex.
    #[inline]
    pub fn lane_sums(&self) -> &[i64; 4] {
        &self.lane_sums
    }

    /// Grid index of one of this tile's vertices.
    pub fn grid_index(&self, vertex: &Point) -> Option<u32> {
        self.vertices
            .iter()
            .position(|v| v == vertex)
            .map(|k| self.labels[k])
    }

    /// Sorted grid-index multiset; identifies the tile's shape class.
    pub fn signature(&self) -> [u32; 4] {
        let mut sig = self.labels;
        sig.sort_unstable();
        sig
    }

    pub fn index_sum(&self) -> u32 {
        self.labels.iter().sum()
    }
}
