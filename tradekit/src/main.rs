mod cli;
mod commands;
mod config;
mod observability;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    observability::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Setup {
            project_dir,
            python,
            venv_dir,
            requirements,
            skip_deps,
            force,
        } => {
            commands::setup::cmd_setup(
                &project_dir,
                python.as_deref(),
                venv_dir.as_deref(),
                requirements.as_deref(),
                skip_deps,
                force,
            )?;
        }
        Commands::Check {
            project_dir,
            venv_dir,
            requirements,
        } => {
            commands::check::cmd_check(&project_dir, venv_dir.as_deref(), requirements.as_deref())?;
        }
        Commands::CleanEnv {
            project_dir,
            venv_dir,
            dry_run,
            force,
        } => {
            commands::env::cmd_clean(&project_dir, venv_dir.as_deref(), dry_run, force)?;
        }
    }

    Ok(())
}
