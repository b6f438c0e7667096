//! Virtual environment creation and install stamps.

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::Command;

use crate::platform::Platform;

/// Outcome of [`ensure_venv`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VenvState {
    Created,
    AlreadyPresent,
}

/// Create the venv with `python -m venv` unless its interpreter already
/// exists. `force` removes an existing venv first; repairing a corrupted
/// venv is otherwise left to the venv module's own semantics.
pub fn ensure_venv(
    system_python: &Path,
    venv_dir: &Path,
    platform: Platform,
    force: bool,
) -> Result<VenvState> {
    let venv_python = platform.venv_python(venv_dir);
    if venv_python.exists() {
        if !force {
            return Ok(VenvState::AlreadyPresent);
        }
        tracing::debug!("--force: removing existing venv at {}", venv_dir.display());
        std::fs::remove_dir_all(venv_dir)
            .with_context(|| format!("Failed to remove {}", venv_dir.display()))?;
    }

    let out = Command::new(system_python)
        .arg("-m")
        .arg("venv")
        .arg(venv_dir)
        .output()
        .with_context(|| format!("Failed to run {} -m venv", system_python.display()))?;
    if !out.status.success() {
        anyhow::bail!("venv creation failed: {}", String::from_utf8_lossy(&out.stderr));
    }

    Ok(VenvState::Created)
}

/// What was last installed into the venv. Written after a successful
/// dependency install; read on re-runs to skip an unchanged install.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallStamp {
    pub manifest_hash: String,
    pub python_version: String,
    pub installed_at: String,
}

impl InstallStamp {
    pub fn new(manifest_hash: String, python_version: String) -> Self {
        Self {
            manifest_hash,
            python_version,
            installed_at: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        }
    }
}

/// Read the stamp; any unreadable or unparsable stamp reads as absent.
pub fn read_stamp(path: &Path) -> Option<InstallStamp> {
    let content = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

pub fn write_stamp(path: &Path, stamp: &InstallStamp) -> Result<()> {
    let json = serde_json::to_string_pretty(stamp).context("Serialize install stamp")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Whether the last install still covers the current manifest.
pub fn is_fresh(stamp: Option<&InstallStamp>, manifest_hash: &str) -> bool {
    stamp.map_or(false, |s| s.manifest_hash == manifest_hash)
}
