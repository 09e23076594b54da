//! Line arrangement: pencils, the flattened line list, and intersections.
//!
//! Pairwise solves of lines through one true vertex land a few ulps apart.
//! Each solution is keyed by its cell on the `SMALL_EPS` grid; the first point
//! seen in a cell becomes the canonical coordinate and later solutions only
//! add their lines to its incidence set.

use std::collections::{BTreeSet, HashMap};
use std::f64::consts::PI;

use super::types::{Intersection, LineId};
use crate::error::Result;
use crate::line::Line;
use crate::params::Params;
use crate::pencil::Pencil;
use crate::point::Point;
use crate::tol::{grid_cell, SMALL_EPS};

type PointKey = (i64, i64);

#[inline]
fn point_key(p: &Point) -> PointKey {
    (grid_cell(p.x(), SMALL_EPS), grid_cell(p.y(), SMALL_EPS))
}

pub(crate) struct Arrangement {
    pub pencils: Vec<Pencil>,
    pub lines: Vec<Line>,
    pub intersections: Vec<Intersection>,
    pub line_points: Vec<Vec<Point>>,
}

/// Pencil `i` at angle `2πi / symmetry`.
pub(crate) fn pencils(params: &Params) -> Vec<Pencil> {
    let n = params.symmetry;
    (0..n)
        .map(|i| {
            let angle = (2 * i) as f64 * PI / n as f64;
            Pencil::new(i, angle, params.offsets[i], params.radius, params.inset)
        })
        .collect()
}

/// Intersect every pair of lines (O(L²)) and merge coincident solutions.
pub(crate) fn arrange(pencils: Vec<Pencil>) -> Result<Arrangement> {
    let lines: Vec<Line> = pencils
        .iter()
        .flat_map(|p| p.lines().iter().copied())
        .collect();

    let mut canonical: HashMap<PointKey, usize> = HashMap::new();
    let mut intersections: Vec<Intersection> = Vec::new();
    // intersection indices incident to each line
    let mut incident: Vec<Vec<usize>> = vec![Vec::new(); lines.len()];

    for i in 0..lines.len() {
        for j in (i + 1)..lines.len() {
            let Some(p) = lines[i].intersect(&lines[j]) else {
                continue;
            };
            let k = *canonical.entry(point_key(&p)).or_insert_with(|| {
                intersections.push(Intersection {
                    point: p,
                    lines: BTreeSet::new(),
                    dual: None,
                });
                intersections.len() - 1
            });
            for id in [i, j] {
                if intersections[k].lines.insert(LineId(id)) {
                    incident[id].push(k);
                }
            }
        }
    }

    let line_points = lines
        .iter()
        .zip(&incident)
        .map(|(line, ks)| sort_along(line, ks, &intersections))
        .collect::<Result<Vec<_>>>()?;

    Ok(Arrangement {
        pencils,
        lines,
        intersections,
        line_points,
    })
}

fn sort_along(line: &Line, ks: &[usize], intersections: &[Intersection]) -> Result<Vec<Point>> {
    let mut keyed = ks
        .iter()
        .map(|&k| {
            let p = intersections[k].point;
            line.ordering_key(&p).map(|key| (key, p))
        })
        .collect::<Result<Vec<_>>>()?;
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    Ok(keyed.into_iter().map(|(_, p)| p).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pencils_are_evenly_spaced() {
        let params = Params::uniform(5, 1, 0.2, 0.0).unwrap();
        let ps = pencils(&params);
        assert_eq!(ps.len(), 5);
        for (i, p) in ps.iter().enumerate() {
            assert!((p.angle() - i as f64 * 2.0 * PI / 5.0).abs() < 1e-12);
            assert_eq!(p.lines().len(), 3);
        }
    }

    #[test]
    fn concurrent_lines_merge_into_one_vertex() {
        // Three lines through the origin at 0, 60 and 120 degrees.
        let params = Params::uniform(3, 0, 0.0, 0.0).unwrap();
        let arr = arrange(pencils(&params)).unwrap();
        assert_eq!(arr.lines.len(), 3);
        assert_eq!(arr.intersections.len(), 1);
        assert_eq!(arr.intersections[0].lines.len(), 3);
        for pts in &arr.line_points {
            assert_eq!(pts.len(), 1);
        }
    }

    #[test]
    fn generic_pairs_stay_separate_and_sorted() {
        let params = Params::uniform(3, 1, 0.3, 0.0).unwrap();
        let arr = arrange(pencils(&params)).unwrap();
        // 3 lines per pencil, 3 pairs of pencils, no triple points.
        assert_eq!(arr.intersections.len(), 27);
        assert!(arr.intersections.iter().all(|i| i.lines.len() == 2));
        for (line, pts) in arr.lines.iter().zip(&arr.line_points) {
            assert_eq!(pts.len(), 6);
            let keys: Vec<f64> = pts.iter().map(|p| line.ordering_key(p).unwrap()).collect();
            assert!(keys.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
