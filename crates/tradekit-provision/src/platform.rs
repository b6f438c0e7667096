//! Platform-specific venv layout: POSIX `bin/` vs Windows `Scripts\`.
//!
//! The activation entry point differs between the two shell families, so the
//! choice is an explicit two-variant enum rather than a string match on an
//! environment-type flag.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Posix,
    Windows,
}

impl Platform {
    /// Platform of the running process.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    /// Subdirectory of the venv holding executables.
    pub fn scripts_dir(&self) -> &'static str {
        match self {
            Platform::Posix => "bin",
            Platform::Windows => "Scripts",
        }
    }

    /// Interpreter file name inside the scripts directory.
    pub fn python_name(&self) -> &'static str {
        match self {
            Platform::Posix => "python",
            Platform::Windows => "python.exe",
        }
    }

    /// Interpreter path inside a venv.
    pub fn venv_python(&self, venv_dir: &Path) -> PathBuf {
        venv_dir.join(self.scripts_dir()).join(self.python_name())
    }

    /// Shell command an operator runs to activate the venv. We only print
    /// this; a child process cannot mutate the invoking shell.
    pub fn activate_command(&self, venv_dir: &Path) -> String {
        match self {
            Platform::Posix => format!("source {}/bin/activate", venv_dir.display()),
            Platform::Windows => format!("{}\\Scripts\\activate", venv_dir.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posix_layout() {
        let p = Platform::Posix;
        assert_eq!(p.scripts_dir(), "bin");
        assert_eq!(
            p.venv_python(Path::new("/p/venv")),
            PathBuf::from("/p/venv/bin/python")
        );
        assert_eq!(
            p.activate_command(Path::new("venv")),
            "source venv/bin/activate"
        );
    }

    #[test]
    fn test_windows_layout() {
        let p = Platform::Windows;
        assert_eq!(p.scripts_dir(), "Scripts");
        assert!(p
            .venv_python(Path::new("venv"))
            .ends_with("Scripts/python.exe"));
        assert_eq!(p.activate_command(Path::new("venv")), "venv\\Scripts\\activate");
    }

    #[test]
    fn test_current_matches_build_target() {
        let p = Platform::current();
        if cfg!(windows) {
            assert_eq!(p, Platform::Windows);
        } else {
            assert_eq!(p, Platform::Posix);
        }
    }
}
