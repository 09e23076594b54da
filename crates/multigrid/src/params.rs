//! Parameter surface of a multigrid build.
//!
//! One canonical form: per-pencil offsets plus an inset. The older
//! single-offset, no-inset surface is `Params::uniform(.., 0.0)`.

use serde::{Deserialize, Serialize};

use crate::error::{MultigridError, Result};
use crate::offsets::uniform_offsets;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Number of pencils; pencil `i` has angle `2πi / symmetry`.
    pub symmetry: usize,
    /// Each pencil holds `2 * radius + 1` lines.
    pub radius: usize,
    /// Base offset of each pencil, `offsets.len() == symmetry`.
    pub offsets: Vec<f64>,
    /// Shrinks the boundary lines toward the outermost grid lines, in `[0, 1)`.
    #[serde(default)]
    pub inset: f64,
}

impl Default for Params {
    /// The classic Penrose setting.
    fn default() -> Self {
        Self {
            symmetry: 5,
            radius: 3,
            offsets: uniform_offsets(5, 0.2),
            inset: 0.0,
        }
    }
}

impl Params {
    pub fn new(symmetry: usize, radius: usize, offsets: Vec<f64>, inset: f64) -> Result<Self> {
        let params = Self {
            symmetry,
            radius,
            offsets,
            inset,
        };
        params.validate()?;
        Ok(params)
    }

    /// Same offset for every pencil.
    pub fn uniform(symmetry: usize, radius: usize, offset: f64, inset: f64) -> Result<Self> {
        Self::new(symmetry, radius, uniform_offsets(symmetry, offset), inset)
    }

    pub fn validate(&self) -> Result<()> {
        if self.symmetry < 1 {
            return Err(MultigridError::InvalidSymmetry {
                symmetry: self.symmetry,
            });
        }
        if self.offsets.len() != self.symmetry {
            return Err(MultigridError::OffsetCountMismatch {
                expected: self.symmetry,
                actual: self.offsets.len(),
            });
        }
        let non_finite = self.offsets.iter().enumerate().find(|(_, o)| !o.is_finite());
        if let Some((family, &value)) = non_finite {
            return Err(MultigridError::NonFiniteOffset { family, value });
        }
        if !(0.0..1.0).contains(&self.inset) {
            return Err(MultigridError::InsetOutOfRange { inset: self.inset });
        }
        Ok(())
    }

    /// Total number of grid lines, `symmetry * (2 * radius + 1)`.
    pub fn line_count(&self) -> usize {
        self.symmetry * (2 * self.radius + 1)
    }
}
