//! Tile census of the classic Penrose pentagrid.
//!
//! Purpose
//! - Show the engine end to end: build, classify, count thin vs thick rhombi
//!   per radius. The thick/thin ratio tends to the golden ratio as the patch
//!   grows.
//!
//! Engine debug events go to stderr, the census to stdout:
//!   cargo run -p multigrid --example penrose_census

use multigrid::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() {
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    for radius in 1..=6 {
        let params = Params::uniform(5, radius, 0.2, 0.0).expect("valid params");
        let tiling = build(&params).expect("penrose build");
        let (mut thin, mut thick) = (0usize, 0usize);
        for tile in tiling.tiles() {
            match PenroseKind::of(tile) {
                Some(PenroseKind::Thin) => thin += 1,
                Some(PenroseKind::Thick) => thick += 1,
                None => unreachable!("non-Penrose area {}", tile.area()),
            }
        }
        let ratio = thick as f64 / thin.max(1) as f64;
        println!(
            "radius={radius} tiles={} thin={thin} thick={thick} ratio={ratio:.4} extent={:.3}",
            tiling.tiles().len(),
            tiling.tiling_radius()
        );
    }
}
