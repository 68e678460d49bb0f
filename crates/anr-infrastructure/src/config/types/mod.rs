//! Configuration type definitions

pub mod app;
pub mod ingest;
pub mod logging;
pub mod providers;
pub mod server;

pub use app::AppConfig;
pub use ingest::IngestConfig;
pub use logging::LoggingConfig;
pub use providers::{GenerationConfig, ProviderConfig, ProvidersConfig, VectorStoreConfig};
pub use server::ServerConfig;
