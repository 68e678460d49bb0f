//! Embedding provider port

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::value_objects::Embedding;

/// Semantic Embedding Interface
///
/// Business contract for providers that transform text into semantic
/// embeddings. The abstraction covers anything from a local Ollama
/// instance to the Hugging Face Inference API.
///
/// # Default Implementations
///
/// `embed()` delegates to `embed_batch()` with a single item; providers
/// only implement `embed_batch()` unless single-item optimization is
/// needed.
///
/// # Example
///
/// ```ignore
/// use anr_domain::ports::providers::EmbeddingProvider;
///
/// let embedding = provider.embed("mecha anime with a tragic hero").await?;
/// assert_eq!(embedding.dimensions, provider.dimensions());
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get embedding for a single text
    ///
    /// Blank input is rejected with an `Embedding` error so callers can
    /// abort the dependent step gracefully, never with a garbage vector.
    async fn embed(&self, text: &str) -> Result<Embedding> {
        if text.trim().is_empty() {
            return Err(Error::embedding("Cannot embed blank input"));
        }
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| Error::embedding("No embedding returned"))
    }

    /// Get embeddings for multiple texts (must be implemented by provider)
    ///
    /// Empty input returns `Ok(vec![])`.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Dimensionality of embeddings produced by this provider
    fn dimensions(&self) -> usize;

    /// Name/identifier of this provider implementation
    fn provider_name(&self) -> &str;

    /// Health check for the provider
    async fn health_check(&self) -> Result<()> {
        self.embed("health check").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProvider;

    #[async_trait]
    impl EmbeddingProvider for FixedProvider {
        async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
            Ok(texts
                .iter()
                .map(|_| Embedding::new(vec![1.0, 2.0], "fixed"))
                .collect())
        }

        fn dimensions(&self) -> usize {
            2
        }

        fn provider_name(&self) -> &str {
            "fixed"
        }
    }

    #[tokio::test]
    async fn embed_delegates_to_batch() {
        let embedding = FixedProvider.embed("hello").await.unwrap();
        assert_eq!(embedding.dimensions, 2);
    }

    #[tokio::test]
    async fn blank_input_is_rejected() {
        let err = FixedProvider.embed("   ").await.unwrap_err();
        assert!(matches!(err, Error::Embedding { .. }));
    }

    #[tokio::test]
    async fn default_health_check_uses_embed() {
        assert!(FixedProvider.health_check().await.is_ok());
    }
}
