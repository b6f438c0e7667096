//! Fixed filesystem layout of a provisioned checkout.
//!
//! All artifact paths are relative to the project root; overrides for the
//! venv directory and the dependency manifest come from the CLI / env config.

use std::path::{Path, PathBuf};

/// Package marker files the application's module system expects.
/// Their mere presence marks the containing directory as an importable package.
pub const PACKAGE_MARKERS: &[&str] = &[
    "src/__init__.py",
    "src/agents/__init__.py",
    "src/data/__init__.py",
    "src/orchestration/__init__.py",
    "src/backtesting/__init__.py",
];

/// Working directories populated later by the application, never by us.
pub const WORKING_DIRS: &[&str] = &["data", "logs", "notebooks"];

/// Resolved paths for one project checkout.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub venv_dir: PathBuf,
    pub requirements: PathBuf,
    pub env_file: PathBuf,
    pub env_template: PathBuf,
}

impl ProjectLayout {
    /// Resolve the layout from a project root plus optional overrides.
    /// Relative overrides are joined onto the root; absolute ones win as-is.
    pub fn resolve(root: &Path, venv_dir: Option<&str>, requirements: Option<&str>) -> Self {
        let join = |p: &str| {
            let pb = PathBuf::from(p);
            if pb.is_absolute() {
                pb
            } else {
                root.join(pb)
            }
        };
        Self {
            root: root.to_path_buf(),
            venv_dir: join(venv_dir.unwrap_or("venv")),
            requirements: join(requirements.unwrap_or("requirements.txt")),
            env_file: root.join(".env"),
            env_template: root.join(".env.template"),
        }
    }

    /// Absolute paths of the package marker files.
    pub fn marker_files(&self) -> Vec<PathBuf> {
        PACKAGE_MARKERS.iter().map(|m| self.root.join(m)).collect()
    }

    /// Absolute paths of the working directories.
    pub fn working_dirs(&self) -> Vec<PathBuf> {
        WORKING_DIRS.iter().map(|d| self.root.join(d)).collect()
    }

    /// Install stamp location. Lives inside the venv so a recreated venv
    /// always reads as never-installed.
    pub fn stamp_path(&self) -> PathBuf {
        self.venv_dir.join(".tradekit-stamp.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let root = Path::new("/work/checkout");
        let layout = ProjectLayout::resolve(root, None, None);
        assert_eq!(layout.venv_dir, root.join("venv"));
        assert_eq!(layout.requirements, root.join("requirements.txt"));
        assert_eq!(layout.env_file, root.join(".env"));
        assert_eq!(layout.env_template, root.join(".env.template"));
    }

    #[test]
    fn test_resolve_relative_overrides_join_root() {
        let root = Path::new("/work/checkout");
        let layout = ProjectLayout::resolve(root, Some(".venv"), Some("deps/requirements.txt"));
        assert_eq!(layout.venv_dir, root.join(".venv"));
        assert_eq!(layout.requirements, root.join("deps/requirements.txt"));
    }

    #[test]
    fn test_resolve_absolute_override_wins() {
        let root = Path::new("/work/checkout");
        let layout = ProjectLayout::resolve(root, Some("/tmp/venv"), None);
        assert_eq!(layout.venv_dir, PathBuf::from("/tmp/venv"));
    }

    #[test]
    fn test_marker_files_cover_all_packages() {
        let layout = ProjectLayout::resolve(Path::new("/p"), None, None);
        let markers = layout.marker_files();
        assert_eq!(markers.len(), 5);
        assert!(markers.iter().all(|m| m.ends_with("__init__.py")));
    }

    #[test]
    fn test_stamp_lives_inside_venv() {
        let layout = ProjectLayout::resolve(Path::new("/p"), Some("env"), None);
        assert!(layout.stamp_path().starts_with(&layout.venv_dir));
    }
}
