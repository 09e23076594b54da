//! Precision contract for the multigrid engine.
//!
//! Policy
//! - Two fixed tolerances, kept as constants so results stay reproducible
//!   across builds. Changing either changes which points merge and which
//!   candidates are accepted.

/// Point clustering, incidence and on-line tests.
pub const SMALL_EPS: f64 = 1e-10;
/// Rhombus side check and tile-area rounding.
pub const COARSE_EPS: f64 = 1e-6;

/// Distance from an arrangement vertex to the wedge probes of the dual
/// construction; a non-incident line closer than this to the vertex is
/// crossed by its probes.
pub(crate) const PROBE_EPS: f64 = SMALL_EPS;

/// `|a - b| <= eps`.
#[inline]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

/// Round `v` to the nearest multiple of `eps` (halves away from zero).
#[inline]
pub fn round_to(v: f64, eps: f64) -> f64 {
    let scale = 1.0 / eps;
    (v * scale).round() / scale
}

/// Integer cell of `v` on a grid of spacing `eps`.
#[inline]
pub(crate) fn grid_cell(v: f64, eps: f64) -> i64 {
    (v * (1.0 / eps)).round() as i64
}
