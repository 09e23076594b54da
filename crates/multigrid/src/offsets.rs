//! Per-pencil offset generators.
//!
//! Model
//! - `uniform_offsets`: every pencil shares one offset (the classic pentagrid
//!   with offset 0.2 gives the Penrose tiling).
//! - `random_offsets`: independent offsets in `[0, 1)` per pencil, drawn
//!   reproducibly from a replay token `(seed, index)`.
//!
//! Offsets that put three or more lines through one point give degenerate
//! arrangement vertices; those dualize to polygons with more than four sides
//! and are dropped by the engine.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

pub fn uniform_offsets(symmetry: usize, offset: f64) -> Vec<f64> {
    vec![offset; symmetry]
}

/// One offset in `[0, 1)` per pencil.
pub fn random_offsets(symmetry: usize, tok: ReplayToken) -> Vec<f64> {
    let mut rng = tok.to_std_rng();
    (0..symmetry).map(|_| rng.gen::<f64>()).collect()
}
