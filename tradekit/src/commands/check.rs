//! `tradekit check` — report the provisioned state without changing it.
//!
//! Prints one line per artifact and bails when a required one is missing,
//! so the exit code is usable from CI and shell scripts.

use anyhow::Result;

use tradekit_provision::layout::ProjectLayout;
use tradekit_provision::platform::Platform;
use tradekit_provision::{interpreter, manifest, venv};

use crate::commands::resolve_path;

/// `tradekit check`
pub fn cmd_check(
    project_dir: &str,
    venv_dir: Option<&str>,
    requirements: Option<&str>,
) -> Result<()> {
    let root = resolve_path(project_dir);
    anyhow::ensure!(root.is_dir(), "Project directory not found: {}", root.display());
    let layout = ProjectLayout::resolve(&root, venv_dir, requirements);
    let platform = Platform::current();

    eprintln!("🔍 Checking development environment in {}", root.display());
    eprintln!();

    let mut issues: Vec<String> = Vec::new();

    match interpreter::resolve_python(None) {
        Ok(py) => eprintln!("  ✓ Python {} ({})", py.version, py.path.display()),
        Err(e) => {
            eprintln!("  ✗ Python interpreter: {}", e);
            issues.push("Python interpreter not found on PATH".to_string());
        }
    }

    issues.extend(collect_issues(&layout, platform));

    eprintln!();
    if issues.is_empty() {
        eprintln!("✅ Environment looks good!");
        return Ok(());
    }

    eprintln!("⚠ {} issue(s) found:", issues.len());
    for issue in &issues {
        eprintln!("   • {}", issue);
    }
    anyhow::bail!("environment check failed ({} issue(s))", issues.len())
}

/// Filesystem-only checks, factored out of [`cmd_check`] so they run
/// without spawning an interpreter.
fn collect_issues(layout: &ProjectLayout, platform: Platform) -> Vec<String> {
    let mut issues = Vec::new();

    let venv_python = platform.venv_python(&layout.venv_dir);
    if venv_python.exists() {
        eprintln!("  ✓ Virtual environment at {}", layout.venv_dir.display());
    } else {
        eprintln!("  ✗ Virtual environment missing at {}", layout.venv_dir.display());
        issues.push("virtual environment missing (run `tradekit setup`)".to_string());
    }

    match manifest::manifest_hash(&layout.requirements) {
        Ok(hash) => {
            let stamp = venv::read_stamp(&layout.stamp_path());
            if venv::is_fresh(stamp.as_ref(), &hash) {
                eprintln!("  ✓ Dependencies up to date");
            } else {
                eprintln!("  ✗ Dependencies stale or never installed");
                issues.push("dependencies not installed (run `tradekit setup`)".to_string());
            }
        }
        Err(e) => {
            eprintln!("  ✗ Dependency manifest: {}", e);
            issues.push(format!("dependency manifest unreadable: {}", e));
        }
    }

    let missing_markers: Vec<String> = layout
        .marker_files()
        .iter()
        .filter(|m| !m.exists())
        .map(|m| m.display().to_string())
        .collect();
    if missing_markers.is_empty() {
        eprintln!("  ✓ Package markers in place");
    } else {
        eprintln!("  ✗ {} package marker(s) missing", missing_markers.len());
        issues.push(format!("{} package marker(s) missing", missing_markers.len()));
    }

    if layout.env_file.exists() {
        eprintln!("  ✓ .env present");
    } else {
        eprintln!("  ✗ .env missing");
        issues.push(".env missing (run `tradekit setup`)".to_string());
    }

    let missing_dirs: Vec<&str> = tradekit_provision::layout::WORKING_DIRS
        .iter()
        .copied()
        .filter(|d| !layout.root.join(d).is_dir())
        .collect();
    if missing_dirs.is_empty() {
        eprintln!("  ✓ Working directories present");
    } else {
        eprintln!("  ✗ Working directories missing: {}", missing_dirs.join(", "));
        issues.push(format!("working directories missing: {}", missing_dirs.join(", ")));
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tradekit_provision::scaffold;

    #[test]
    fn test_fresh_checkout_reports_all_issues() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::resolve(tmp.path(), None, None);
        fs::write(&layout.requirements, "flask\n").unwrap();

        let issues = collect_issues(&layout, Platform::Posix);
        assert_eq!(issues.len(), 5);
    }

    #[test]
    fn test_provisioned_checkout_is_clean() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::resolve(tmp.path(), None, None);
        fs::write(&layout.requirements, "flask\n").unwrap();

        // Fake the venv interpreter; check only looks at existence.
        let venv_python = Platform::Posix.venv_python(&layout.venv_dir);
        fs::create_dir_all(venv_python.parent().unwrap()).unwrap();
        fs::write(&venv_python, "").unwrap();

        let hash = manifest::manifest_hash(&layout.requirements).unwrap();
        venv::write_stamp(
            &layout.stamp_path(),
            &venv::InstallStamp::new(hash, "3.11.4".to_string()),
        )
        .unwrap();

        scaffold::ensure_package_markers(&layout).unwrap();
        scaffold::ensure_env_file(&layout).unwrap();
        scaffold::ensure_working_dirs(&layout).unwrap();

        let issues = collect_issues(&layout, Platform::Posix);
        assert!(issues.is_empty(), "unexpected issues: {:?}", issues);
    }

    #[test]
    fn test_manifest_change_marks_deps_stale() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::resolve(tmp.path(), None, None);
        fs::write(&layout.requirements, "flask\n").unwrap();

        let venv_python = Platform::Posix.venv_python(&layout.venv_dir);
        fs::create_dir_all(venv_python.parent().unwrap()).unwrap();
        fs::write(&venv_python, "").unwrap();

        let hash = manifest::manifest_hash(&layout.requirements).unwrap();
        venv::write_stamp(
            &layout.stamp_path(),
            &venv::InstallStamp::new(hash, "3.11.4".to_string()),
        )
        .unwrap();

        scaffold::ensure_package_markers(&layout).unwrap();
        scaffold::ensure_env_file(&layout).unwrap();
        scaffold::ensure_working_dirs(&layout).unwrap();

        fs::write(&layout.requirements, "flask\nyfinance\n").unwrap();
        let issues = collect_issues(&layout, Platform::Posix);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("dependencies"));
    }
}
