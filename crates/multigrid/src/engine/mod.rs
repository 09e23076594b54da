//! Multigrid engine: parameters in, immutable tiling out.
//!
//! Pipeline (single shot, phase ordered)
//! 1. Pencil assembly: `symmetry` pencils at angles `2πi / symmetry`, flattened
//!    into one line list.
//! 2. Intersection discovery: all line pairs, parallel pairs skipped,
//!    near-identical solutions merged on the `SMALL_EPS` grid.
//! 3. Dual construction for every vertex all pencils contain; vertices outside
//!    any pencil's boundary lines are "hanging" and skipped.
//! 4. Acceptance: only unit rhombi become tiles; area, signature and tiling
//!    radius summaries are accumulated.
//! 5. Canonicalization: each tile starts at its reference corner (see
//!    [`canonical`]).
//!
//! Cost is O(L²) in the line count `L = symmetry · (2·radius + 1)`.
//! Degenerate geometry (parallel lines, points on three or more lines,
//! non-rhombic duals) is absorbed silently; only broken invariants error.

mod arrangement;
pub mod canonical;
mod dual;
mod types;

use std::collections::BTreeSet;

pub use types::{Intersection, LineId, Tiling};

use crate::error::Result;
use crate::params::Params;

/// Build the tiling for `params`.
///
/// Invalid parameters fail before any work is done; no partial tiling is ever
/// returned.
pub fn build(params: &Params) -> Result<Tiling> {
    params.validate()?;
    let _span = tracing::debug_span!(
        "build",
        symmetry = params.symmetry,
        radius = params.radius,
        inset = params.inset
    )
    .entered();

    let arrangement::Arrangement {
        pencils,
        lines,
        mut intersections,
        line_points,
    } = arrangement::arrange(arrangement::pencils(params))?;
    tracing::debug!(
        lines = lines.len(),
        intersections = intersections.len(),
        "arrangement"
    );

    let frames = dual::frames(params);
    let mut tiles = Vec::new();
    let mut areas: Vec<f64> = Vec::new();
    let mut signatures = BTreeSet::new();
    let mut radius = 0.0_f64;
    let (mut hanging, mut rejected) = (0usize, 0usize);

    for hit in intersections.iter_mut() {
        if !pencils.iter().all(|p| p.contains(&hit.point)) {
            hanging += 1;
            continue;
        }
        let angles = dual::wedge_angles(hit.lines.iter().map(|id| &lines[id.0]));
        let candidate = dual::dual_polygon(&hit.point, &angles, &frames);
        hit.dual = Some(candidate.vertices.clone());
        let Some(tile) = candidate.into_tile(hit.point, params.symmetry)? else {
            rejected += 1;
            continue;
        };
        if !areas.contains(&tile.area()) {
            areas.push(tile.area());
        }
        signatures.insert(tile.signature());
        for v in tile.vertices() {
            radius = radius.max(v.x().abs()).max(v.y().abs());
        }
        tiles.push(tile);
    }
    areas.sort_by(f64::total_cmp);
    tracing::debug!(tiles = tiles.len(), hanging, rejected, "tiles");

    let by_point = intersections
        .iter()
        .enumerate()
        .map(|(k, hit)| (hit.point, k))
        .collect();

    Ok(Tiling {
        params: params.clone(),
        pencils,
        lines,
        intersections,
        by_point,
        line_points,
        tiles,
        areas,
        signatures,
        radius,
    })
}

impl Tiling {
    /// Validate the four parameters and build.
    pub fn build(symmetry: usize, radius: usize, offsets: &[f64], inset: f64) -> Result<Tiling> {
        build(&Params::new(symmetry, radius, offsets.to_vec(), inset)?)
    }
}
