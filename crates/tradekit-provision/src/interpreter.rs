//! Resolve the system Python interpreter and report its version.
//!
//! This is a reporting step, not a gate: the detected version is shown to
//! the operator but no minimum is enforced.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// A resolved system interpreter: executable path plus reported version.
#[derive(Debug, Clone)]
pub struct PythonInterpreter {
    pub path: PathBuf,
    pub version: String,
}

/// Candidate names probed on PATH, in order.
const CANDIDATES: &[&str] = &["python3", "python"];

/// Resolve the interpreter: an explicit path or name first (from `--python`
/// or `TRADEKIT_PYTHON`), then the PATH candidates.
pub fn resolve_python(explicit: Option<&str>) -> Result<PythonInterpreter> {
    if let Some(p) = explicit {
        let path = which::which(p)
            .with_context(|| format!("Python interpreter not found: {}", p))?;
        let version = probe_version(&path)?;
        return Ok(PythonInterpreter { path, version });
    }

    for name in CANDIDATES {
        if let Ok(path) = which::which(name) {
            if let Ok(version) = probe_version(&path) {
                return Ok(PythonInterpreter { path, version });
            }
        }
    }
    anyhow::bail!("python3 or python not found in PATH")
}

/// Run `<python> --version` and return the bare version number.
fn probe_version(python: &Path) -> Result<String> {
    let out = Command::new(python)
        .arg("--version")
        .output()
        .with_context(|| format!("Failed to run {} --version", python.display()))?;
    if !out.status.success() {
        anyhow::bail!(
            "{} --version failed: {}",
            python.display(),
            String::from_utf8_lossy(&out.stderr)
        );
    }
    // Old interpreters printed the banner to stderr
    let banner = if out.stdout.is_empty() {
        String::from_utf8_lossy(&out.stderr).to_string()
    } else {
        String::from_utf8_lossy(&out.stdout).to_string()
    };
    Ok(parse_version(&banner))
}

/// Extract "3.11.4" from a "Python 3.11.4" banner; unknown banners are
/// returned trimmed rather than rejected.
pub fn parse_version(banner: &str) -> String {
    let trimmed = banner.trim();
    trimmed.strip_prefix("Python ").unwrap_or(trimmed).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version_strips_prefix() {
        assert_eq!(parse_version("Python 3.11.4\n"), "3.11.4");
        assert_eq!(parse_version("Python 3.12.0rc1"), "3.12.0rc1");
    }

    #[test]
    fn test_parse_version_unknown_banner_passthrough() {
        assert_eq!(parse_version("PyPy 7.3.12\n"), "PyPy 7.3.12");
    }

    #[test]
    fn test_resolve_explicit_missing_is_error() {
        let err = resolve_python(Some("definitely-not-a-python-binary")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
