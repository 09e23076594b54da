use anyhow::Result;
use clap::{Parser, Subcommand};
use multigrid::{build, Tiling};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

mod config;
mod provenance;

use config::ParamArgs;

#[derive(Parser)]
#[command(name = "multigrid")]
#[command(about = "Build de Bruijn multigrid rhombus tilings and report on them")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build a tiling and print a JSON summary to stdout
    Summary {
        #[command(flatten)]
        params: ParamArgs,
    },
    /// Print a small provenance JSON block for the resolved parameters
    Report {
        #[command(flatten)]
        params: ParamArgs,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Summary { params } => summary(&params),
        Action::Report { params } => report(&params),
    }
}

fn summary(args: &ParamArgs) -> Result<()> {
    let params = args.resolve()?;
    tracing::info!(
        symmetry = params.symmetry,
        radius = params.radius,
        inset = params.inset,
        "summary"
    );
    let tiling = build(&params)?;
    let mut doc = summarize(&tiling)?;
    doc["code_rev"] = json!(provenance::current_git_rev());
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn report(args: &ParamArgs) -> Result<()> {
    let params = args.resolve()?;
    tracing::info!(symmetry = params.symmetry, radius = params.radius, "report");
    println!("{}", serde_json::to_string_pretty(&provenance::block(&params)?)?);
    Ok(())
}

/// Counts and distinct shape data of one tiling.
fn summarize(tiling: &Tiling) -> Result<Value> {
    let areas: Vec<Value> = tiling
        .areas()
        .iter()
        .map(|&area| {
            let tiles = tiling.tiles().iter().filter(|t| t.area() == area).count();
            json!({ "area": area, "tiles": tiles })
        })
        .collect();
    Ok(json!({
        "params": serde_json::to_value(tiling.params())?,
        "lines": tiling.lines().len(),
        "intersections": tiling.intersections().len(),
        "tiles": tiling.tiles().len(),
        "areas": areas,
        "signatures": serde_json::to_value(tiling.signatures())?,
        "tiling_radius": tiling.tiling_radius(),
    }))
}
