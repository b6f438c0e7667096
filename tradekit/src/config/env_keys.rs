//! Environment variable key constants.
//!
//! Tool-owned variables use the `TRADEKIT_` prefix. Application variables
//! (OPENAI_API_KEY, NEWS_API_KEY) appear only in the `.env` template the
//! provisioner writes; the provisioner itself never reads them.

/// Provisioning inputs (also exposed as CLI flags)
pub mod provision {
    pub const TRADEKIT_PYTHON: &str = "TRADEKIT_PYTHON";
    pub const TRADEKIT_VENV_DIR: &str = "TRADEKIT_VENV_DIR";
    pub const TRADEKIT_REQUIREMENTS: &str = "TRADEKIT_REQUIREMENTS";
}

/// Logging and the provision event log
pub mod observability {
    pub const TRADEKIT_QUIET: &str = "TRADEKIT_QUIET";
    pub const TRADEKIT_LOG_LEVEL: &str = "TRADEKIT_LOG_LEVEL";
    pub const TRADEKIT_LOG_JSON: &str = "TRADEKIT_LOG_JSON";
    pub const TRADEKIT_PROVISION_LOG: &str = "TRADEKIT_PROVISION_LOG";
}
