//! Dependency manifest (`requirements.txt`) parsing.
//!
//! The manifest format is pip's own dependency-list syntax. pip reads the
//! file itself during install; parsing here exists only for reporting and
//! for hashing the manifest into the install stamp. Comments, blank lines,
//! and option lines (`-r`, `--index-url`, ...) are skipped.

use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("dependency manifest not found: {0}")]
    Missing(PathBuf),
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One declared requirement, exactly as pip will see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub spec: String,
}

impl Requirement {
    /// Package name without version specifier, extras, or markers.
    pub fn name(&self) -> &str {
        let end = self
            .spec
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.'))
            .unwrap_or(self.spec.len());
        &self.spec[..end]
    }
}

/// Parse the manifest into its declared requirements.
pub fn parse_requirements(path: &Path) -> Result<Vec<Requirement>, ManifestError> {
    let content = read_manifest(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#') && !l.starts_with('-'))
        .map(|l| Requirement { spec: l.to_string() })
        .collect())
}

/// SHA-256 over the manifest bytes, hex-encoded. Keys the install stamp:
/// an unchanged hash means the last install still covers the manifest.
pub fn manifest_hash(path: &Path) -> Result<String, ManifestError> {
    let content = read_manifest(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

fn read_manifest(path: &Path) -> Result<String, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::Missing(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })
}
