//! Reference corner of a tile.
//!
//! Around a two-line arrangement vertex the four dual vertices carry lane sums
//! `s, s+1, s+2, s+1` in cyclic order. Reducing to grid indices, the repeated
//! middle value cancels and two unpaired indices remain.
//!
//! - Five-fold: the unpaired `(min, max)` pair is looked up in
//!   [`PENROSE_REFERENCE`], a closed table of the pairs the pentagrid
//!   produces. A pair outside the table is an engine bug, not a fallback case.
//!   Labels are `|s % 5|` (truncated remainder, then absolute value), so for
//!   `s = -1` the window `-1, 0, 1, 0` reduces to `1, 0, 1, 0` and nothing is
//!   left unpaired. That window takes the corner with lane sum `-1`.
//! - Other symmetries: the reference corner is the vertex with the smallest
//!   lane sum.

use crate::error::{MultigridError, Result};

/// `((min, max), reference label)` for the five-fold tiling.
///
/// Keys are the labels of the lane sums `s` and `s + 2`. Every `{t, t + 2}`
/// mod 5 appears once, so the table is closed for all `s` except `-1`. With
/// uniform offset 0.2 the pentagrid yields (0, 3), (1, 3) and (2, 4); other
/// offsets shift which pairs appear. For negative `s` the absolute remainder
/// mirrors the labels, so the same label sits at the opposite end of the
/// window.
pub const PENROSE_REFERENCE: [((u32, u32), u32); 5] = [
    ((0, 2), 2),
    ((0, 3), 0),
    ((1, 3), 1),
    ((2, 4), 2),
    ((1, 4), 4),
];

/// Labels occurring an odd number of times, in first-seen order.
fn unpaired(labels: &[u32; 4]) -> Vec<u32> {
    let mut out: Vec<u32> = Vec::with_capacity(4);
    for &label in labels {
        match out.iter().position(|&l| l == label) {
            Some(k) => {
                out.remove(k);
            }
            None => out.push(label),
        }
    }
    out
}

fn min_lane_sum(lane_sums: &[i64; 4]) -> usize {
    let min = lane_sums.iter().copied().min().unwrap_or_default();
    lane_sums.iter().position(|&s| s == min).unwrap_or(0)
}

/// Lane sums `-1, 0, 1, 0` in some rotation: the one window whose labels
/// `|s % 5|` pair up completely.
fn straddles_zero(lane_sums: &[i64; 4]) -> bool {
    let mut sorted = *lane_sums;
    sorted.sort_unstable();
    sorted == [-1, 0, 0, 1]
}

/// Position of the reference corner in a tile's vertex list.
///
/// Rotating the list left by the returned amount puts the reference corner
/// first; on an already canonical list this returns 0.
pub fn reference_corner(
    labels: &[u32; 4],
    lane_sums: &[i64; 4],
    symmetry: usize,
) -> Result<usize> {
    if symmetry != 5 {
        return Ok(min_lane_sum(lane_sums));
    }
    let pair = unpaired(labels);
    if pair.is_empty() && straddles_zero(lane_sums) {
        return Ok(min_lane_sum(lane_sums));
    }
    if pair.len() != 2 {
        return Err(MultigridError::UnpairedIndices { labels: *labels });
    }
    let (min, max) = (pair[0].min(pair[1]), pair[0].max(pair[1]));
    let reference = PENROSE_REFERENCE
        .iter()
        .find(|(key, _)| *key == (min, max))
        .map(|&(_, label)| label)
        .ok_or(MultigridError::UnknownIndexPair { min, max })?;
    labels
        .iter()
        .position(|&l| l == reference)
        .ok_or(MultigridError::UnknownIndexPair { min, max })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpaired_cancels_duplicates() {
        assert_eq!(unpaired(&[0, 4, 3, 4]), vec![0, 3]);
        assert_eq!(unpaired(&[1, 0, 1, 0]), Vec::<u32>::new());
    }

    #[test]
    fn penrose_pairs_pick_documented_corner() {
        // s = -5: 0, 4, 3, 4 -> (0, 3) -> corner label 0.
        assert_eq!(reference_corner(&[4, 3, 4, 0], &[-4, -3, -4, -5], 5), Ok(3));
        // s = -3: 3, 2, 1, 2 -> (1, 3) -> corner label 1.
        assert_eq!(reference_corner(&[3, 2, 1, 2], &[-3, -2, -1, -2], 5), Ok(2));
        // s = 0: 0, 1, 2, 1 -> (0, 2) -> corner label 2.
        assert_eq!(reference_corner(&[1, 2, 1, 0], &[1, 2, 1, 0], 5), Ok(1));
    }

    #[test]
    fn canonical_lists_are_fixed_points() {
        let labels = [1, 2, 3, 2];
        assert_eq!(reference_corner(&labels, &[-3, -2, -1, -2], 5), Ok(0));
        assert_eq!(reference_corner(&[2, 3, 4, 3], &[2, 3, 4, 3], 7), Ok(0));
    }

    #[test]
    fn unknown_pairs_are_errors() {
        assert_eq!(
            reference_corner(&[1, 0, 1, 0], &[4, 5, 6, 5], 5),
            Err(MultigridError::UnpairedIndices {
                labels: [1, 0, 1, 0]
            })
        );
        assert_eq!(
            reference_corner(&[1, 2, 1, 1], &[0, 0, 0, 0], 5),
            Err(MultigridError::UnknownIndexPair { min: 1, max: 2 })
        );
    }

    #[test]
    fn window_around_zero_takes_negative_corner() {
        // s = -1: labels 1, 0, 1, 0 cancel completely.
        assert_eq!(reference_corner(&[0, 1, 0, 1], &[0, 1, 0, -1], 5), Ok(3));
        assert_eq!(reference_corner(&[1, 0, 1, 0], &[-1, 0, 1, 0], 5), Ok(0));
    }

    #[test]
    fn other_symmetries_use_smallest_lane_sum() {
        assert_eq!(reference_corner(&[0, 1, 2, 1], &[6, 7, 8, 7], 3), Ok(0));
        assert_eq!(reference_corner(&[1, 2, 1, 0], &[7, 8, 7, 6], 3), Ok(3));
    }
}
