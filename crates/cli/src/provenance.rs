//! `<stem>.provenance.json` sidecars: which command produced an artifact, from what.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::io;

/// Per-command record: the knobs that were set and what came out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Run {
    Hull {
        base_case_max: usize,
        verified: bool,
        input_points: usize,
        vertices: usize,
        area: f64,
    },
    Gen {
        kind: String,
        count: usize,
        radius: f64,
        seed: u64,
        index: u64,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Sidecar {
    pub code_rev: String,
    pub dchull_version: String,
    #[serde(flatten)]
    pub run: Run,
    pub inputs: Vec<String>,
    pub output: String,
}

impl Sidecar {
    pub fn new(run: Run, output: &Path) -> Self {
        Self {
            code_rev: current_git_rev(),
            dchull_version: dchull::VERSION.to_string(),
            run,
            inputs: Vec::new(),
            output: output.to_string_lossy().into_owned(),
        }
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.inputs.push(input.into());
        self
    }
}

/// `hull.json` → `hull.provenance.json`, next to the artifact.
pub fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Record `run` for `artifact`; returns the sidecar path.
pub fn record(artifact: impl AsRef<Path>, run: Run, inputs: &[&str]) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let sidecar = inputs
        .iter()
        .fold(Sidecar::new(run, artifact), |s, i| s.with_input(*i));
    let path = sidecar_path(artifact);
    io::write_json(&path, &sidecar)?;
    tracing::debug!(path = %path.display(), "provenance_written");
    Ok(path)
}

/// `GIT_COMMIT` if set (at build or run time), else `git rev-parse --short HEAD`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".into())
}

fn git_head() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    Some(rev.trim().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_artifact() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/out/hull.json")),
            Path::new("/tmp/out/hull.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("cloud")),
            Path::new("cloud.provenance.json")
        );
    }

    #[test]
    fn hull_run_is_tagged_and_typed() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("h.json");
        let run = Run::Hull {
            base_case_max: 5,
            verified: true,
            input_points: 6,
            vertices: 4,
            area: 41.0,
        };
        let path = record(&artifact, run.clone(), &["pts.csv"]).unwrap();
        let back: Sidecar = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(back.run, run);
        assert_eq!(back.inputs, vec!["pts.csv".to_string()]);
        assert_eq!(back.output, artifact.to_string_lossy());
        assert_eq!(back.dchull_version, dchull::VERSION);

        let raw: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(raw["command"], "hull");
        assert_eq!(raw["vertices"], 4);
    }
}
