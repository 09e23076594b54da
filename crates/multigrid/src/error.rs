use thiserror::Error;

/// Errors surfaced by the multigrid engine.
///
/// Parameter variants are user errors caught before any work is done. The
/// remaining variants report broken engine invariants; they abort the build
/// that hit them and are never retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MultigridError {
    #[error("symmetry must be at least 1, got {symmetry}")]
    InvalidSymmetry { symmetry: usize },

    #[error("expected {expected} offsets (one per pencil), got {actual}")]
    OffsetCountMismatch { expected: usize, actual: usize },

    #[error("offset of pencil {family} is not finite: {value}")]
    NonFiniteOffset { family: usize, value: f64 },

    #[error("inset {inset} is out of range [0, 1)")]
    InsetOutOfRange { inset: f64 },

    #[error("zero-length direction: reference points coincide")]
    ZeroLengthDirection,

    #[error("point ({x}, {y}) is not on line (angle {angle}, offset {offset}); residual {residual:e}")]
    PointOffLine {
        x: f64,
        y: f64,
        angle: f64,
        offset: f64,
        residual: f64,
    },

    #[error("expected two unpaired grid indices, got {labels:?}")]
    UnpairedIndices { labels: [u32; 4] },

    #[error("no reference corner for grid index pair ({min}, {max})")]
    UnknownIndexPair { min: u32, max: u32 },
}

/// Convenience type alias for results using [`MultigridError`].
pub type Result<T> = std::result::Result<T, MultigridError>;
