//! `tradekit clean-env` — remove the virtual environment.
//!
//! The venv (including its install stamp) is the only artifact this removes;
//! scaffolded files and working directories are never touched.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use tradekit_provision::layout::ProjectLayout;

use crate::commands::resolve_path;

/// `tradekit clean-env`
pub fn cmd_clean(
    project_dir: &str,
    venv_dir: Option<&str>,
    dry_run: bool,
    force: bool,
) -> Result<()> {
    let root = resolve_path(project_dir);
    let layout = ProjectLayout::resolve(&root, venv_dir, None);

    if !layout.venv_dir.exists() {
        eprintln!("No virtual environment found at {}", layout.venv_dir.display());
        return Ok(());
    }

    let size = dir_size(&layout.venv_dir);
    eprintln!(
        "🗂  Virtual environment at {} ({})",
        layout.venv_dir.display(),
        format_size(size)
    );

    if dry_run {
        eprintln!();
        eprintln!("(Dry run — nothing removed. Remove --dry-run to delete.)");
        return Ok(());
    }

    if !force {
        eprint!("\nRemove the virtual environment? [y/N] ");
        let mut answer = String::new();
        std::io::stdin().read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            eprintln!("Cancelled.");
            return Ok(());
        }
    }

    fs::remove_dir_all(&layout.venv_dir)
        .with_context(|| format!("Failed to remove {}", layout.venv_dir.display()))?;

    eprintln!();
    eprintln!("✓ Removed virtual environment, freed {}", format_size(size));
    Ok(())
}

/// Compute total size of a directory recursively.
fn dir_size(path: &Path) -> u64 {
    let mut total: u64 = 0;
    if let Ok(entries) = fs::read_dir(path) {
        for entry in entries.flatten() {
            let p = entry.path();
            if p.is_dir() {
                total += dir_size(&p);
            } else if let Ok(meta) = p.metadata() {
                total += meta.len();
            }
        }
    }
    total
}

/// Format byte size to human-readable string.
fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.2} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_units() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn test_dir_size_sums_nested_files() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("a"), vec![0u8; 100]).unwrap();
        fs::create_dir_all(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub/b"), vec![0u8; 50]).unwrap();
        assert_eq!(dir_size(tmp.path()), 150);
    }
}
