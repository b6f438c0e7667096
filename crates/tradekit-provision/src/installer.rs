//! pip invocations through the venv's interpreter.
//!
//! Both calls block until pip returns; there is no timeout or retry layer.
//! Failures carry pip's stderr and abort the provisioning run.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// `<venv python> -m pip install --upgrade pip`. Output is captured and
/// surfaced only on failure.
pub fn upgrade_pip(venv_python: &Path) -> Result<()> {
    let out = Command::new(venv_python)
        .args(["-m", "pip", "install", "--upgrade", "pip"])
        .output()
        .with_context(|| format!("Failed to run {} -m pip", venv_python.display()))?;
    if !out.status.success() {
        anyhow::bail!(
            "pip self-upgrade failed: {}",
            String::from_utf8_lossy(&out.stderr)
        );
    }
    tracing::debug!(
        "pip self-upgrade: {}",
        String::from_utf8_lossy(&out.stdout).trim()
    );
    Ok(())
}

/// `<venv python> -m pip install -r <manifest>`. pip's own progress streams
/// to the terminal; installs can be long and the operator should see them.
pub fn install_requirements(venv_python: &Path, manifest: &Path, cwd: &Path) -> Result<()> {
    let status = Command::new(venv_python)
        .args(["-m", "pip", "install", "-r"])
        .arg(manifest)
        .current_dir(cwd)
        .status()
        .with_context(|| format!("Failed to run {} -m pip", venv_python.display()))?;
    if !status.success() {
        anyhow::bail!("pip install -r {} failed ({})", manifest.display(), status);
    }
    Ok(())
}
