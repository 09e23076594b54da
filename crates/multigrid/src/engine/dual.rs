//! de Bruijn dual of one arrangement vertex.
//!
//! The lines through a vertex `p` cut a small disc around it into wedges. One
//! probe per wedge (the midpoint of two probes placed on consecutive bounding
//! rays) sits strictly inside that wedge. Its lane index in every pencil,
//! `k_i = ⌊m·n_i − o_i⌋`, gives the dual vertex `Σ k_i·(cos θ_i, sin θ_i)` and
//! the lane sum `Σ k_i`.

use std::f64::consts::{PI, TAU};

use nalgebra::Vector2;

use crate::error::Result;
use crate::line::Line;
use crate::params::Params;
use crate::point::Point;
use crate::tile::Tile;
use crate::tol::{approx_eq, round_to, COARSE_EPS, PROBE_EPS, SMALL_EPS};

/// Per-pencil lane frame (the sin/cos table of the pencil directions).
#[derive(Clone, Copy, Debug)]
pub(crate) struct Frame {
    normal: Vector2<f64>,
    step: Vector2<f64>,
    offset: f64,
}

pub(crate) fn frames(params: &Params) -> Vec<Frame> {
    let step = TAU / params.symmetry as f64;
    params
        .offsets
        .iter()
        .enumerate()
        .map(|(i, &offset)| {
            let (sin, cos) = (i as f64 * step).sin_cos();
            Frame {
                normal: Vector2::new(-sin, cos),
                step: Vector2::new(cos, sin),
                offset,
            }
        })
        .collect()
}

/// Candidate polygon around one arrangement vertex, one entry per wedge.
#[derive(Clone, Debug)]
pub(crate) struct DualPolygon {
    pub vertices: Vec<Point>,
    pub labels: Vec<u32>,
    pub lane_sums: Vec<i64>,
}

impl DualPolygon {
    /// The accepted tile, or `None` when this is not a unit rhombus.
    pub fn into_tile(self, source: Point, symmetry: usize) -> Result<Option<Tile>> {
        if !is_unit_rhombus(&self.vertices) {
            return Ok(None);
        }
        let (Ok(vertices), Ok(labels), Ok(lane_sums)) = (
            <[Point; 4]>::try_from(self.vertices),
            <[u32; 4]>::try_from(self.labels),
            <[i64; 4]>::try_from(self.lane_sums),
        ) else {
            return Ok(None);
        };
        Tile::new(source, vertices, labels, lane_sums, symmetry).map(Some)
    }
}

/// Directions of the incident lines and their opposites, sorted on `[0, 2π)`.
pub(crate) fn wedge_angles<'a>(lines: impl IntoIterator<Item = &'a Line>) -> Vec<f64> {
    let mut angles: Vec<f64> = lines
        .into_iter()
        .flat_map(|l| [l.angle(), (l.angle() + PI) % TAU])
        .collect();
    angles.sort_by(f64::total_cmp);
    // Antiparallel pencils contribute the same directions.
    angles.dedup_by(|a, b| approx_eq(*a, *b, SMALL_EPS));
    if angles.len() > 1 {
        let first = angles[0];
        let last = angles[angles.len() - 1];
        if approx_eq(first + TAU, last, SMALL_EPS) {
            angles.pop();
        }
    }
    angles
}

pub(crate) fn dual_polygon(p: &Point, angles: &[f64], frames: &[Frame]) -> DualPolygon {
    let n = frames.len() as i64;
    let probes: Vec<Vector2<f64>> = angles
        .iter()
        .map(|a| {
            let (sin, cos) = a.sin_cos();
            p.to_vector() + Vector2::new(cos, sin) * PROBE_EPS
        })
        .collect();

    let count = probes.len();
    let mut out = DualPolygon {
        vertices: Vec::with_capacity(count),
        labels: Vec::with_capacity(count),
        lane_sums: Vec::with_capacity(count),
    };
    for k in 0..count {
        let median = (probes[k] + probes[(k + 1) % count]) / 2.0;
        let mut dual = Vector2::zeros();
        let mut sum = 0i64;
        for f in frames {
            let lane = (f.normal.dot(&median) - f.offset).floor();
            dual += f.step * lane;
            sum += lane as i64;
        }
        out.vertices.push(Point::new(
            round_to(dual.x, SMALL_EPS),
            round_to(dual.y, SMALL_EPS),
        ));
        out.labels.push((sum % n).unsigned_abs() as u32);
        out.lane_sums.push(sum);
    }
    out
}

/// Four vertices, every side of unit length within `COARSE_EPS`.
pub(crate) fn is_unit_rhombus(vertices: &[Point]) -> bool {
    vertices.len() == 4
        && (0..4).all(|k| {
            let side = vertices[k].distance(&vertices[(k + 1) % 4]);
            approx_eq(side, 1.0, COARSE_EPS)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn square_frames() -> Vec<Frame> {
        frames(&Params::uniform(4, 1, 0.2, 0.0).unwrap())
    }

    #[test]
    fn two_lines_give_four_wedges() {
        let lines = [Line::new(0.0, 0.2), Line::new(FRAC_PI_2, 0.2)];
        let angles = wedge_angles(&lines);
        assert_eq!(angles.len(), 4);
        assert!(angles.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn antiparallel_directions_are_deduplicated() {
        let lines = [
            Line::new(0.0, 0.0),
            Line::new(FRAC_PI_2, 0.0),
            Line::new(PI, 0.0),
            Line::new(3.0 * FRAC_PI_2, 0.0),
        ];
        assert_eq!(wedge_angles(&lines).len(), 4);
    }

    #[test]
    fn square_grid_vertex_dualizes_to_unit_square() {
        let a = Line::new(0.0, 0.2);
        let b = Line::new(FRAC_PI_2, 0.2);
        let p = a.intersect(&b).unwrap();
        let poly = dual_polygon(&p, &wedge_angles(&[a, b]), &square_frames());
        assert_eq!(poly.vertices.len(), 4);
        assert!(is_unit_rhombus(&poly.vertices));
        // Lane sums run s, s+1, s+2, s+1 around the vertex.
        let min = *poly.lane_sums.iter().min().unwrap();
        let mut sorted = poly.lane_sums.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![min, min + 1, min + 1, min + 2]);
        let tile = poly.into_tile(p, 4).unwrap().unwrap();
        assert_eq!(tile.area(), 1.0);
    }

    #[test]
    fn rejects_non_rhombi() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        assert!(is_unit_rhombus(&square));
        let big = square.map(|p| Point::new(p.x() * 2.0, p.y() * 2.0));
        assert!(!is_unit_rhombus(&big));
        assert!(!is_unit_rhombus(&square[..3]));
    }
}
