//! Null generation provider for testing and development
//!
//! Produces deterministic text derived from the prompt. No external
//! dependencies - always works offline.

use async_trait::async_trait;

use anr_domain::ports::providers::GenerationProvider;

use anr_application::registry::{
    GENERATION_PROVIDERS, GenerationProviderConfig, GenerationProviderEntry,
};

/// Null generation provider for testing
///
/// Echoes a short deterministic summary of the prompt instead of calling
/// a hosted model. Useful for unit tests and offline development.
pub struct NullGenerationProvider;

impl NullGenerationProvider {
    /// Create a new null generation provider
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullGenerationProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationProvider for NullGenerationProvider {
    async fn generate(&self, prompt: &str) -> String {
        let excerpt: String = prompt.chars().take(80).collect();
        format!("[null-generation] Based on the provided context: {excerpt}")
    }

    fn model_name(&self) -> &str {
        "null-test"
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

#[linkme::distributed_slice(GENERATION_PROVIDERS)]
static NULL_PROVIDER: GenerationProviderEntry = GenerationProviderEntry {
    name: "null",
    description: "Null provider for testing (deterministic prompt echo)",
    factory: |_config: &GenerationProviderConfig| {
        Ok(std::sync::Arc::new(NullGenerationProvider::new()))
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn output_is_deterministic_and_mentions_prompt() {
        let provider = NullGenerationProvider::new();
        let a = provider.generate("mecha anime with a tragic hero").await;
        let b = provider.generate("mecha anime with a tragic hero").await;
        assert_eq!(a, b);
        assert!(a.contains("mecha anime"));
    }

    #[tokio::test]
    async fn health_check_passes() {
        let provider = NullGenerationProvider::new();
        assert!(provider.health_check().await.is_ok());
    }
}
