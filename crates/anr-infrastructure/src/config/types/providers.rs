//! Provider configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use anr_domain::constants::DEFAULT_COLLECTION;

/// Embedding provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider name (e.g., "ollama", "huggingface", "null")
    pub provider: String,

    /// Model name/identifier
    pub model: Option<String>,

    /// Base URL for the provider API
    pub base_url: Option<String>,

    /// API key for authentication
    pub api_key: Option<String>,

    /// Embedding dimensions override
    pub dimensions: Option<usize>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider: "huggingface".to_string(),
            model: None,
            base_url: None,
            api_key: None,
            dimensions: None,
        }
    }
}

/// Vector store provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorStoreConfig {
    /// Provider name (e.g., "memory", "filesystem")
    pub provider: String,

    /// On-disk base path for persistent backends
    pub path: Option<PathBuf>,

    /// Catalog collection name
    pub collection: String,
}

impl Default for VectorStoreConfig {
    fn default() -> Self {
        Self {
            provider: "filesystem".to_string(),
            path: None,
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }
}

/// Generation provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Provider name (e.g., "groq", "null")
    pub provider: String,

    /// Model name/identifier
    pub model: Option<String>,

    /// Base URL for the provider API
    pub base_url: Option<String>,

    /// API key for authentication
    ///
    /// Falls back to the `GROQ_API_KEY` environment variable when unset.
    pub api_key: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: "groq".to_string(),
            model: None,
            base_url: None,
            api_key: None,
        }
    }
}

/// Provider configurations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Embedding provider configuration
    #[serde(default)]
    pub embedding: ProviderConfig,

    /// Vector store provider configuration
    #[serde(default)]
    pub vector_store: VectorStoreConfig,

    /// Generation provider configuration
    #[serde(default)]
    pub generation: GenerationConfig,
}
