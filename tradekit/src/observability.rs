//! Observability: tracing init and the provision event log.
//!
//! Uses config::ObservabilityConfig for TRADEKIT_QUIET, LOG_LEVEL, LOG_JSON,
//! and PROVISION_LOG. The provision event log is a JSONL file recording one
//! record per provisioning step; it is off unless TRADEKIT_PROVISION_LOG
//! names a path.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use chrono::Utc;
use serde_json::json;
use tracing_subscriber::{prelude::*, EnvFilter};

static PROVISION_LOG_PATH: Mutex<Option<String>> = Mutex::new(None);

/// Initialize tracing. Call at process startup.
/// When TRADEKIT_QUIET=1, only WARN and above are logged.
pub fn init_tracing() {
    let cfg = crate::config::ObservabilityConfig::from_env();
    let level: String = if cfg.quiet {
        "tradekit=warn".to_string()
    } else {
        cfg.log_level.clone()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    let _ = if cfg.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    };
}

fn get_provision_log_path() -> Option<String> {
    {
        let guard = PROVISION_LOG_PATH.lock().ok()?;
        if let Some(ref p) = *guard {
            return Some(p.clone());
        }
    }
    let path = crate::config::ObservabilityConfig::from_env()
        .provision_log
        .clone()?;
    if let Some(parent) = Path::new(&path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    {
        let mut guard = PROVISION_LOG_PATH.lock().ok()?;
        *guard = Some(path.clone());
    }
    Some(path)
}

fn append_jsonl(path: &str, record: &serde_json::Value) {
    if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(path) {
        if let Ok(line) = serde_json::to_string(record) {
            let _ = writeln!(f, "{}", line);
        }
    }
}

/// Provision event: step started.
pub fn provision_step_started(step: &str) {
    if let Some(path) = get_provision_log_path() {
        let record = json!({
            "ts": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            "event": "step_started",
            "step": step,
        });
        append_jsonl(&path, &record);
    }
}

/// Provision event: step completed.
pub fn provision_step_completed(step: &str) {
    if let Some(path) = get_provision_log_path() {
        let record = json!({
            "ts": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            "event": "step_completed",
            "step": step,
        });
        append_jsonl(&path, &record);
    }
}

/// Provision event: step failed. Recorded before the error propagates.
pub fn provision_step_failed(step: &str, error: &str) {
    tracing::warn!(step = %step, error = %error, "provisioning step failed");
    if let Some(path) = get_provision_log_path() {
        let record = json!({
            "ts": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            "event": "step_failed",
            "step": step,
            "error": error,
        });
        append_jsonl(&path, &record);
    }
}
