//! Main application configuration

use serde::{Deserialize, Serialize};

use super::ingest::IngestConfig;
use super::logging::LoggingConfig;
use super::providers::ProvidersConfig;
use super::server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Provider configurations
    #[serde(default)]
    pub providers: ProvidersConfig,

    /// Catalog ingestion configuration
    #[serde(default)]
    pub ingest: IngestConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
