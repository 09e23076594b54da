//! Parameter resolution for the CLI: optional JSON file, then flag overrides.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use multigrid::offsets::{random_offsets, uniform_offsets, ReplayToken};
use multigrid::Params;

#[derive(Args, Debug, Default, Clone)]
pub struct ParamArgs {
    /// JSON file holding a serialized `Params`; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Number of pencils
    #[arg(long)]
    pub symmetry: Option<usize>,
    /// Lines per pencil are 2 * radius + 1
    #[arg(long)]
    pub radius: Option<usize>,
    /// One offset shared by every pencil
    #[arg(long, conflicts_with_all = ["offsets", "seed"])]
    pub offset: Option<f64>,
    /// Comma-separated per-pencil offsets
    #[arg(long, value_delimiter = ',', conflicts_with = "seed")]
    pub offsets: Option<Vec<f64>>,
    /// Draw per-pencil offsets in [0, 1) from this seed
    #[arg(long)]
    pub seed: Option<u64>,
    /// Boundary inset in [0, 1)
    #[arg(long)]
    pub inset: Option<f64>,
}

pub fn load(path: &Path) -> Result<Params> {
    let raw = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("parsing config {}", path.display()))
}

impl ParamArgs {
    /// File (or the Penrose default), then overrides, then validation.
    pub fn resolve(&self) -> Result<Params> {
        let mut params = match &self.config {
            Some(path) => load(path)?,
            None => Params::default(),
        };
        if let Some(radius) = self.radius {
            params.radius = radius;
        }
        if let Some(inset) = self.inset {
            params.inset = inset;
        }
        if let Some(symmetry) = self.symmetry {
            if symmetry != params.symmetry {
                // Keep a uniform base offset when only the symmetry changes.
                let base = params.offsets.first().copied().unwrap_or(0.2);
                params.offsets = uniform_offsets(symmetry, base);
            }
            params.symmetry = symmetry;
        }
        if let Some(offset) = self.offset {
            params.offsets = uniform_offsets(params.symmetry, offset);
        }
        if let Some(offsets) = &self.offsets {
            params.offsets = offsets.clone();
        }
        if let Some(seed) = self.seed {
            params.offsets = random_offsets(params.symmetry, ReplayToken { seed, index: 0 });
        }
        params.validate()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_to_penrose() {
        let params = ParamArgs::default().resolve().unwrap();
        assert_eq!(params, Params::default());
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("params.json");
        fs::write(
            &path,
            r#"{"symmetry": 4, "radius": 2, "offsets": [0.1, 0.2, 0.3, 0.4], "inset": 0.5}"#,
        )
        .unwrap();
        let args = ParamArgs {
            config: Some(path.clone()),
            radius: Some(1),
            ..Default::default()
        };
        let params = args.resolve().unwrap();
        assert_eq!(params.symmetry, 4);
        assert_eq!(params.radius, 1);
        assert_eq!(params.offsets, vec![0.1, 0.2, 0.3, 0.4]);
        assert_eq!(params.inset, 0.5);

        let args = ParamArgs {
            config: Some(path),
            offset: Some(0.3),
            ..Default::default()
        };
        assert_eq!(args.resolve().unwrap().offsets, vec![0.3; 4]);
    }

    #[test]
    fn symmetry_change_regenerates_offsets() {
        let args = ParamArgs {
            symmetry: Some(7),
            ..Default::default()
        };
        let params = args.resolve().unwrap();
        assert_eq!(params.offsets, vec![0.2; 7]);
    }

    #[test]
    fn seed_draws_reproducible_offsets() {
        let args = ParamArgs {
            seed: Some(9),
            ..Default::default()
        };
        let a = args.resolve().unwrap();
        let b = args.resolve().unwrap();
        assert_eq!(a.offsets, b.offsets);
        assert!(a.offsets.iter().all(|o| (0.0..1.0).contains(o)));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let args = ParamArgs {
            offsets: Some(vec![0.2, 0.2]),
            ..Default::default()
        };
        assert!(args.resolve().is_err());

        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parsing config"));
        assert!(load(&dir.path().join("missing.json")).is_err());
    }
}
