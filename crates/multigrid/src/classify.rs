//! Tile classification for decoration layers.
//!
//! Purpose
//! - Give renderers everything they need to pick a decoration per tile without
//!   re-deriving geometry: Penrose shape kind, named corners, and colour class
//!   indices.
//!
//! Why
//! - Decorations (kite/dart split, arrows, fills) must agree on orientation
//!   across all tiles of one shape; they all read the canonical vertex order
//!   through [`Corners`].
//!
//! Everything here is pure and allocation-light; nothing draws.

use serde::Serialize;

use crate::engine::Tiling;
use crate::error::Result;
use crate::point::Point;
use crate::tile::Tile;
use crate::tol::{approx_eq, SMALL_EPS};

/// Rounded area of the thin Penrose rhombus, `sin 36°`.
pub const THIN_AREA: f64 = 0.587785;
/// Rounded area of the thick Penrose rhombus, `sin 72°`.
pub const THICK_AREA: f64 = 0.951057;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PenroseKind {
    Thin,
    Thick,
}

impl PenroseKind {
    /// Kind from a rounded tile area; `None` for any other area.
    pub fn from_area(area: f64) -> Option<Self> {
        if approx_eq(area, THIN_AREA, SMALL_EPS) {
            Some(Self::Thin)
        } else if approx_eq(area, THICK_AREA, SMALL_EPS) {
            Some(Self::Thick)
        } else {
            None
        }
    }

    pub fn of(tile: &Tile) -> Option<Self> {
        Self::from_area(tile.area())
    }
}

/// Named corners handed to decorations.
///
/// Forward: `a = v0, b = v3, c = v2, d = v1`. Reversed: `a = v2, b = v1,
/// c = v0, d = v3`, i.e. the same rhombus seen from the opposite corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Corners {
    pub a: Point,
    pub b: Point,
    pub c: Point,
    pub d: Point,
}

impl Corners {
    pub fn of(tile: &Tile, reversed: bool) -> Self {
        let [v0, v1, v2, v3] = *tile.vertices();
        if reversed {
            Self {
                a: v2,
                b: v1,
                c: v0,
                d: v3,
            }
        } else {
            Self {
                a: v0,
                b: v3,
                c: v2,
                d: v1,
            }
        }
    }

    /// Point at unit distance from `c` toward `a`; the split vertex of the
    /// kite/dart decoration of a thick rhombus.
    pub fn kite_apex(&self) -> Result<Point> {
        self.c.toward(&self.a, 1.0)
    }

    pub fn outline(&self) -> [Point; 4] {
        [self.a, self.b, self.c, self.d]
    }
}

/// Colour classes over one tiling.
///
/// `area_class` is the position of a tile's area among the distinct areas;
/// `signature_class` the position of its grid-index sum among the distinct
/// signature sums (first occurrence in signature order).
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeClasses {
    areas: Vec<f64>,
    index_sums: Vec<u32>,
}

impl ShapeClasses {
    pub fn of(tiling: &Tiling) -> Self {
        let mut index_sums: Vec<u32> = Vec::new();
        for sig in tiling.signatures() {
            let sum: u32 = sig.iter().sum();
            if !index_sums.contains(&sum) {
                index_sums.push(sum);
            }
        }
        Self {
            areas: tiling.areas().to_vec(),
            index_sums,
        }
    }

    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    pub fn signature_count(&self) -> usize {
        self.index_sums.len()
    }

    pub fn area_class(&self, tile: &Tile) -> Option<usize> {
        self.areas.iter().position(|&a| a == tile.area())
    }

    pub fn signature_class(&self, tile: &Tile) -> Option<usize> {
        let sum = tile.index_sum();
        self.index_sums.iter().position(|&s| s == sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn penrose() -> Tiling {
        Tiling::build(5, 2, &[0.2; 5], 0.0).unwrap()
    }

    #[test]
    fn penrose_tiles_are_thin_or_thick() {
        let t = penrose();
        let kinds: Vec<PenroseKind> = t.tiles().iter().filter_map(PenroseKind::of).collect();
        assert_eq!(kinds.len(), t.tiles().len());
        assert!(kinds.contains(&PenroseKind::Thin));
        assert!(kinds.contains(&PenroseKind::Thick));
        assert_eq!(PenroseKind::from_area(1.0), None);
    }

    #[test]
    fn corners_name_the_canonical_vertices() {
        let t = penrose();
        let tile = &t.tiles()[0];
        let v = tile.vertices();
        let fwd = Corners::of(tile, false);
        assert_eq!(fwd.outline(), [v[0], v[3], v[2], v[1]]);
        let rev = Corners::of(tile, true);
        assert_eq!(rev.outline(), [v[2], v[1], v[0], v[3]]);
        assert_eq!(fwd.a, rev.c);
        assert_eq!(fwd.c, rev.a);
    }

    #[test]
    fn kite_apex_sits_on_the_ac_diagonal() {
        let t = penrose();
        for tile in t.tiles() {
            if PenroseKind::of(tile) != Some(PenroseKind::Thick) {
                continue;
            }
            let corners = Corners::of(tile, false);
            let apex = corners.kite_apex().unwrap();
            assert!((corners.c.distance(&apex) - 1.0).abs() < 1e-9);
            let ca = corners.a.to_vector() - corners.c.to_vector();
            let ci = apex.to_vector() - corners.c.to_vector();
            assert!((ca.x * ci.y - ca.y * ci.x).abs() < 1e-9);
            assert!(ca.dot(&ci) > 0.0);
        }
    }

    #[test]
    fn classes_cover_every_tile() {
        let t = penrose();
        let classes = ShapeClasses::of(&t);
        assert_eq!(classes.area_count(), 2);
        assert!(classes.signature_count() >= 1);
        assert!(classes.signature_count() <= t.signatures().len());
        for tile in t.tiles() {
            let area = classes.area_class(tile).unwrap();
            assert_eq!(t.areas()[area], tile.area());
            assert!(classes.signature_class(tile).unwrap() < classes.signature_count());
        }
    }
}
