//! Rhombus tilings from de Bruijn multigrids.
//!
//! A multigrid is `symmetry` pencils of equally spaced parallel lines at evenly
//! spaced angles. Every vertex of the resulting line arrangement dualizes into
//! one polygon of the tiling; the unit rhombi among those polygons form the
//! tiling itself. For `symmetry = 5` this is the Penrose rhombus tiling.
//!
//! Layout
//! - `point`, `line`, `pencil`: immutable geometry primitives.
//! - `engine`: the single-shot pipeline `build(params) -> Tiling`.
//! - `tile`: the validated, canonically oriented rhombus handed to renderers.
//! - `classify`: pure helpers renderers use to pick a decoration per tile.
//! - `params`, `offsets`: the parameter surface and offset generators.
//!
//! A `Tiling` is immutable once built and is `Send + Sync`; rebuild it from
//! scratch when any parameter changes.

pub mod classify;
pub mod engine;
pub mod error;
pub mod line;
pub mod offsets;
pub mod params;
pub mod pencil;
pub mod point;
pub mod tile;
pub mod tol;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use engine::{build, Intersection, LineId, Tiling};
pub use error::{MultigridError, Result};
pub use line::Line;
pub use params::Params;
pub use pencil::Pencil;
pub use point::Point;
pub use tile::Tile;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::classify::{Corners, PenroseKind, ShapeClasses};
    pub use crate::engine::{build, Intersection, LineId, Tiling};
    pub use crate::offsets::{random_offsets, uniform_offsets, ReplayToken};
    pub use crate::tol::{COARSE_EPS, SMALL_EPS};
    pub use crate::{Line, MultigridError, Params, Pencil, Point, Tile};
}
