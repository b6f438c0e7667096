//! Domain config structs loaded from environment variables.

use super::env_keys::observability as obv_keys;
use super::loader::{env_bool, env_optional, env_or};

/// Observability: quiet, log_level, log_json, provision event log.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
    pub provision_log: Option<String>,
}

impl ObservabilityConfig {
    pub fn from_env() -> &'static Self {
        use std::sync::OnceLock;
        static CACHE: OnceLock<ObservabilityConfig> = OnceLock::new();
        CACHE.get_or_init(|| {
            super::loader::load_dotenv();
            Self {
                quiet: env_bool(obv_keys::TRADEKIT_QUIET, false),
                log_level: env_or(obv_keys::TRADEKIT_LOG_LEVEL, || "tradekit=info".to_string()),
                log_json: env_bool(obv_keys::TRADEKIT_LOG_JSON, false),
                provision_log: env_optional(obv_keys::TRADEKIT_PROVISION_LOG),
            }
        })
    }
}
