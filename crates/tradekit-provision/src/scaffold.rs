//! Filesystem scaffolding: package markers, working directories, `.env`.
//!
//! Every operation here is idempotent and non-destructive: existing files
//! are never truncated and an existing `.env` is never overwritten.

use anyhow::{Context, Result};
use std::fs;

use crate::layout::ProjectLayout;

/// Fallback `.env` content used when the checkout has no `.env.template`.
/// OPENAI_API_KEY is required by the application; the rest are optional.
pub const DEFAULT_ENV_TEMPLATE: &str = "\
# Trading agents configuration
OPENAI_API_KEY=
NEWS_API_KEY=
ALPHA_VANTAGE_KEY=
MODEL_NAME=gpt-4o
TEMPERATURE=0.2
";

/// How `.env` was materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvFileOutcome {
    CopiedFromTemplate,
    WroteDefault,
    AlreadyPresent,
}

/// Create the package marker files, empty, when absent. Returns how many
/// were created. A marker that already exists is left untouched whatever
/// its contents.
pub fn ensure_package_markers(layout: &ProjectLayout) -> Result<usize> {
    let mut created = 0;
    for marker in layout.marker_files() {
        if marker.exists() {
            continue;
        }
        if let Some(parent) = marker.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&marker, b"")
            .with_context(|| format!("Failed to create {}", marker.display()))?;
        created += 1;
    }
    Ok(created)
}

/// Ensure the working directories exist.
pub fn ensure_working_dirs(layout: &ProjectLayout) -> Result<()> {
    for dir in layout.working_dirs() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    Ok(())
}

/// Materialize `.env`: copy from the template when absent, fall back to the
/// built-in defaults when the checkout has no template either. An existing
/// `.env` wins unconditionally.
pub fn ensure_env_file(layout: &ProjectLayout) -> Result<EnvFileOutcome> {
    if layout.env_file.exists() {
        return Ok(EnvFileOutcome::AlreadyPresent);
    }
    if layout.env_template.exists() {
        fs::copy(&layout.env_template, &layout.env_file).with_context(|| {
            format!(
                "Failed to copy {} to {}",
                layout.env_template.display(),
                layout.env_file.display()
            )
        })?;
        return Ok(EnvFileOutcome::CopiedFromTemplate);
    }
    fs::write(&layout.env_file, DEFAULT_ENV_TEMPLATE)
        .with_context(|| format!("Failed to write {}", layout.env_file.display()))?;
    Ok(EnvFileOutcome::WroteDefault)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn layout_for(root: &Path) -> ProjectLayout {
        ProjectLayout::resolve(root, None, None)
    }

    #[test]
    fn test_markers_created_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = layout_for(tmp.path());

        let created = ensure_package_markers(&layout).unwrap();
        assert_eq!(created, 5);
        for marker in layout.marker_files() {
            assert!(marker.exists());
            assert_eq!(fs::read(&marker).unwrap().len(), 0);
        }
    }

    #[test]
    fn test_existing_marker_never_truncated() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = layout_for(tmp.path());
        let first = &layout.marker_files()[0];
        fs::create_dir_all(first.parent().unwrap()).unwrap();
        fs::write(first, "# hand-written init\n").unwrap();

        let created = ensure_package_markers(&layout).unwrap();
        assert_eq!(created, 4);
        assert_eq!(fs::read_to_string(first).unwrap(), "# hand-written init\n");
    }

    #[test]
    fn test_rerun_leaves_marker_set_unchanged() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = layout_for(tmp.path());

        ensure_package_markers(&layout).unwrap();
        let second = ensure_package_markers(&layout).unwrap();
        assert_eq!(second, 0);
        assert!(layout.marker_files().iter().all(|m| m.exists()));
    }

    #[test]
    fn test_working_dirs_created_empty_and_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = layout_for(tmp.path());

        ensure_working_dirs(&layout).unwrap();
        for dir in layout.working_dirs() {
            assert!(dir.is_dir());
            assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
        }

        ensure_working_dirs(&layout).unwrap();
    }

    #[test]
    fn test_env_copied_from_template() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = layout_for(tmp.path());
        fs::write(&layout.env_template, "OPENAI_API_KEY=sk-test\n").unwrap();

        let outcome = ensure_env_file(&layout).unwrap();
        assert_eq!(outcome, EnvFileOutcome::CopiedFromTemplate);
        assert_eq!(
            fs::read_to_string(&layout.env_file).unwrap(),
            "OPENAI_API_KEY=sk-test\n"
        );
    }

    #[test]
    fn test_existing_env_never_overwritten() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = layout_for(tmp.path());
        fs::write(&layout.env_template, "OPENAI_API_KEY=\n").unwrap();
        fs::write(&layout.env_file, "OPENAI_API_KEY=sk-real\n").unwrap();

        let outcome = ensure_env_file(&layout).unwrap();
        assert_eq!(outcome, EnvFileOutcome::AlreadyPresent);
        assert_eq!(
            fs::read_to_string(&layout.env_file).unwrap(),
            "OPENAI_API_KEY=sk-real\n"
        );
    }

    #[test]
    fn test_env_default_when_template_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = layout_for(tmp.path());

        let outcome = ensure_env_file(&layout).unwrap();
        assert_eq!(outcome, EnvFileOutcome::WroteDefault);
        let content = fs::read_to_string(&layout.env_file).unwrap();
        assert!(content.contains("OPENAI_API_KEY="));
        assert!(content.contains("NEWS_API_KEY="));
    }
}
