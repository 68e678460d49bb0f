//! Generation Provider Registry
//!
//! Auto-registration system for generation providers using linkme
//! distributed slices.

use std::collections::HashMap;
use std::sync::Arc;

use anr_domain::ports::providers::GenerationProvider;

/// Configuration for generation provider creation
#[derive(Debug, Clone, Default)]
pub struct GenerationProviderConfig {
    /// Provider name (e.g., "groq", "null")
    pub provider: String,
    /// Model name/identifier
    pub model: Option<String>,
    /// API key for authentication
    pub api_key: Option<String>,
    /// Base URL for the provider API
    pub base_url: Option<String>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl GenerationProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

/// Registry entry for generation providers
pub struct GenerationProviderEntry {
    /// Unique provider name (e.g., "groq", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instances
    pub factory: fn(&GenerationProviderConfig) -> Result<Arc<dyn GenerationProvider>, String>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static GENERATION_PROVIDERS: [GenerationProviderEntry] = [..];

/// Resolve generation provider by name from registry
pub fn resolve_generation_provider(
    config: &GenerationProviderConfig,
) -> Result<Arc<dyn GenerationProvider>, String> {
    for entry in GENERATION_PROVIDERS {
        if entry.name == config.provider {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = GENERATION_PROVIDERS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown generation provider '{}'. Available providers: {:?}",
        config.provider, available
    ))
}

/// List all registered generation providers as (name, description) pairs
pub fn list_generation_providers() -> Vec<(&'static str, &'static str)> {
    GENERATION_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_provider_lists_available() {
        let err = resolve_generation_provider(&GenerationProviderConfig::new("nope"))
            .map(|_| ())
            .unwrap_err();
        assert!(err.contains("Unknown generation provider 'nope'"));
    }
}
