use clap::{Parser, Subcommand};

use crate::config::env_keys::provision;

/// tradekit - development-environment provisioner for the trading agents app
#[derive(Parser, Debug)]
#[command(name = "tradekit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Provision the development environment
    ///
    /// Runs the full sequence: interpreter detection, virtual environment
    /// creation, pip self-upgrade, dependency installation, package markers,
    /// .env materialization, working directories, completion report.
    ///
    /// Examples:
    ///   tradekit setup
    ///   tradekit setup --skip-deps
    ///   tradekit setup --force
    ///   tradekit setup --python /usr/bin/python3.12
    Setup {
        /// Project root to provision (default: current directory)
        #[arg(long, short = 'p', default_value = ".")]
        project_dir: String,

        /// Explicit Python interpreter (path or name on PATH)
        #[arg(long, env = provision::TRADEKIT_PYTHON)]
        python: Option<String>,

        /// Virtual environment directory (default: venv)
        #[arg(long, env = provision::TRADEKIT_VENV_DIR)]
        venv_dir: Option<String>,

        /// Dependency manifest path (default: requirements.txt)
        #[arg(long, env = provision::TRADEKIT_REQUIREMENTS)]
        requirements: Option<String>,

        /// Skip pip self-upgrade and dependency installation
        #[arg(long)]
        skip_deps: bool,

        /// Recreate the venv and reinstall even when up to date
        #[arg(long, short)]
        force: bool,
    },

    /// Check the provisioned environment without changing it
    ///
    /// Reports interpreter, venv, dependency freshness, package markers,
    /// .env, and working directories. Exits nonzero when something required
    /// is missing.
    Check {
        /// Project root to check (default: current directory)
        #[arg(long, short = 'p', default_value = ".")]
        project_dir: String,

        /// Virtual environment directory (default: venv)
        #[arg(long, env = provision::TRADEKIT_VENV_DIR)]
        venv_dir: Option<String>,

        /// Dependency manifest path (default: requirements.txt)
        #[arg(long, env = provision::TRADEKIT_REQUIREMENTS)]
        requirements: Option<String>,
    },

    /// Remove the virtual environment
    #[command(name = "clean-env")]
    CleanEnv {
        /// Project root (default: current directory)
        #[arg(long, short = 'p', default_value = ".")]
        project_dir: String,

        /// Virtual environment directory (default: venv)
        #[arg(long, env = provision::TRADEKIT_VENV_DIR)]
        venv_dir: Option<String>,

        /// Dry run - show what would be removed without deleting
        #[arg(long)]
        dry_run: bool,

        /// Force removal without confirmation
        #[arg(long, short)]
        force: bool,
    },
}
