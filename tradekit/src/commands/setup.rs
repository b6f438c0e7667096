//! `tradekit setup` — provision the development environment.
//!
//! Flow:
//!   1. Detect the Python interpreter (reported, not gated)
//!   2. Create the virtual environment
//!   3. pip self-upgrade through the venv interpreter
//!   4. Install dependencies from requirements.txt (stamped for re-runs)
//!   5. Package marker files
//!   6. .env from .env.template (never overwritten)
//!   7. data/, logs/, notebooks/
//!   8. Completion report with next manual steps
//!
//! Installer failures abort the run; the completion banner only prints when
//! every step succeeded.

use anyhow::Result;

use tradekit_provision::layout::ProjectLayout;
use tradekit_provision::platform::Platform;
use tradekit_provision::scaffold::EnvFileOutcome;
use tradekit_provision::venv::VenvState;
use tradekit_provision::{installer, interpreter, manifest, scaffold, venv};

use crate::commands::resolve_path;
use crate::observability;

/// `tradekit setup`
pub fn cmd_setup(
    project_dir: &str,
    python: Option<&str>,
    venv_dir: Option<&str>,
    requirements: Option<&str>,
    skip_deps: bool,
    force: bool,
) -> Result<()> {
    let root = resolve_path(project_dir);
    anyhow::ensure!(root.is_dir(), "Project directory not found: {}", root.display());
    let layout = ProjectLayout::resolve(&root, venv_dir, requirements);
    let platform = Platform::current();

    eprintln!("🚀 Setting up the trading-agents development environment...");
    eprintln!("   Project: {}", root.display());
    eprintln!();

    // Step 1: interpreter detection
    let py = step("detect_interpreter", || interpreter::resolve_python(python))?;
    eprintln!("✅ Step 1/8: Python {} ({})", py.version, py.path.display());

    // Step 2: virtual environment
    let state = step("create_venv", || {
        venv::ensure_venv(&py.path, &layout.venv_dir, platform, force)
    })?;
    match state {
        VenvState::Created => {
            eprintln!("✅ Step 2/8: Created virtual environment at {}", layout.venv_dir.display());
        }
        VenvState::AlreadyPresent => {
            eprintln!("✅ Step 2/8: Virtual environment already present at {}", layout.venv_dir.display());
        }
    }
    // All installer invocations below go through the venv's interpreter;
    // shell activation is the operator's step and is printed in the report.
    let venv_python = platform.venv_python(&layout.venv_dir);

    // Steps 3-4: installer (network-dependent, fail fast)
    if skip_deps {
        eprintln!("⏭  Step 3/8: Skipping pip self-upgrade (--skip-deps)");
        eprintln!("⏭  Step 4/8: Skipping dependency installation (--skip-deps)");
    } else {
        step("upgrade_pip", || installer::upgrade_pip(&venv_python))?;
        eprintln!("✅ Step 3/8: pip upgraded to latest");

        let reqs = step("parse_manifest", || {
            Ok(manifest::parse_requirements(&layout.requirements)?)
        })?;
        let hash = manifest::manifest_hash(&layout.requirements)?;
        let stamp = venv::read_stamp(&layout.stamp_path());
        if !force && venv::is_fresh(stamp.as_ref(), &hash) {
            eprintln!("✅ Step 4/8: Dependencies up to date ({} declared)", reqs.len());
        } else {
            eprintln!(
                "📦 Step 4/8: Installing {} package(s) from {}...",
                reqs.len(),
                layout.requirements.display()
            );
            step("install_requirements", || {
                installer::install_requirements(&venv_python, &layout.requirements, &root)
            })?;
            venv::write_stamp(
                &layout.stamp_path(),
                &venv::InstallStamp::new(hash, py.version.clone()),
            )?;
            eprintln!("   ✓ {} package(s) installed", reqs.len());
        }
    }

    // Step 5: package markers
    let created = step("package_markers", || scaffold::ensure_package_markers(&layout))?;
    if created > 0 {
        eprintln!("✅ Step 5/8: Created {} package marker(s)", created);
    } else {
        eprintln!("✅ Step 5/8: Package markers already in place");
    }

    // Step 6: .env
    let outcome = step("env_file", || scaffold::ensure_env_file(&layout))?;
    match outcome {
        EnvFileOutcome::CopiedFromTemplate => {
            eprintln!("✅ Step 6/8: Created .env from .env.template");
            warn_env_secrets();
        }
        EnvFileOutcome::WroteDefault => {
            eprintln!("✅ Step 6/8: Created .env (no .env.template found, wrote defaults)");
            warn_env_secrets();
        }
        EnvFileOutcome::AlreadyPresent => {
            eprintln!("✅ Step 6/8: .env already present (left untouched)");
        }
    }

    // Step 7: working directories
    step("working_dirs", || scaffold::ensure_working_dirs(&layout))?;
    eprintln!("✅ Step 7/8: Working directories ready (data/, logs/, notebooks/)");

    // Step 8: completion report
    eprintln!("✅ Step 8/8: Setup complete!");
    eprintln!();
    print_summary(&layout, platform);

    Ok(())
}

/// Run one provisioning step with event-log bookkeeping around it.
fn step<T>(name: &str, f: impl FnOnce() -> Result<T>) -> Result<T> {
    observability::provision_step_started(name);
    match f() {
        Ok(v) => {
            observability::provision_step_completed(name);
            Ok(v)
        }
        Err(e) => {
            observability::provision_step_failed(name, &format!("{:#}", e));
            Err(e)
        }
    }
}

fn warn_env_secrets() {
    eprintln!("   ⚠ Edit .env and set OPENAI_API_KEY (required); NEWS_API_KEY is optional");
}

fn print_summary(layout: &ProjectLayout, platform: Platform) {
    eprintln!("{}", "═".repeat(50));
    eprintln!("🎉 Development environment ready!");
    eprintln!();
    eprintln!("Next steps:");
    eprintln!("   1. Edit .env        set OPENAI_API_KEY (required), NEWS_API_KEY (optional)");
    eprintln!("   2. Activate         {}", platform.activate_command(&layout.venv_dir));
    eprintln!("   3. Run the demo     python demo.py");
    eprintln!("   4. Launch web UI    python web/app.py");
    eprintln!("{}", "═".repeat(50));
}
