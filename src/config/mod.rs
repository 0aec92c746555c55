//! Configuration management
//!
//! TOML-backed configuration with `${VAR}` substitution and `DATALEX_*`
//! environment overrides. Every section has working defaults so the tool
//! runs without a config file.

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::{load_config, load_or_default};
pub use schema::{
    ApplicationConfig, DatalexConfig, DictionaryConfig, ExternalConfig, GenerationConfig,
    LoggingConfig, StoreConfig,
};
pub use secret::{ApiKey, ApiKeyValue};
