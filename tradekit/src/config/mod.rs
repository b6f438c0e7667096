//! Configuration: `.env` loading, env-var helpers, domain config structs.

pub mod env_keys;
pub mod loader;
pub mod schema;

pub use schema::ObservabilityConfig;
