//! Vector Store Provider Registry
//!
//! Auto-registration system for vector store providers using linkme
//! distributed slices.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use anr_domain::ports::providers::VectorStoreProvider;

/// Configuration for vector store provider creation
#[derive(Debug, Clone, Default)]
pub struct VectorStoreProviderConfig {
    /// Provider name (e.g., "memory", "filesystem")
    pub provider: String,
    /// On-disk base path for persistent backends
    pub path: Option<PathBuf>,
    /// Collection/index name
    pub collection: Option<String>,
    /// Embedding dimensions
    pub dimensions: Option<usize>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl VectorStoreProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the on-disk path
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the collection name
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    /// Set the dimensions
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = Some(dimensions);
        self
    }
}

/// Registry entry for vector store providers
pub struct VectorStoreProviderEntry {
    /// Unique provider name (e.g., "memory", "filesystem")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instances
    pub factory: fn(&VectorStoreProviderConfig) -> Result<Arc<dyn VectorStoreProvider>, String>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static VECTOR_STORE_PROVIDERS: [VectorStoreProviderEntry] = [..];

/// Resolve vector store provider by name from registry
pub fn resolve_vector_store_provider(
    config: &VectorStoreProviderConfig,
) -> Result<Arc<dyn VectorStoreProvider>, String> {
    for entry in VECTOR_STORE_PROVIDERS {
        if entry.name == config.provider {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = VECTOR_STORE_PROVIDERS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown vector store provider '{}'. Available providers: {:?}",
        config.provider, available
    ))
}

/// List all registered vector store providers as (name, description) pairs
pub fn list_vector_store_providers() -> Vec<(&'static str, &'static str)> {
    VECTOR_STORE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
