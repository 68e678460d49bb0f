//! Configuration management
//!
//! Layered configuration: compiled defaults, then the `anr.toml` file,
//! then `ANR_*` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, GenerationConfig, IngestConfig, LoggingConfig, ProviderConfig, ProvidersConfig,
    ServerConfig, VectorStoreConfig,
};
