use std::panic::Location;
use std::process::Command;

use anyhow::Result;
use multigrid::Params;
use serde_json::{json, Value};

/// Provenance block: code revision, engine version, callsite and resolved params.
#[track_caller]
pub fn block(params: &Params) -> Result<Value> {
    let callsite = Location::caller();
    Ok(json!({
        "code_rev": current_git_rev(),
        "engine_version": multigrid::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "params": serde_json::to_value(params)?,
    }))
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".to_string())
}
