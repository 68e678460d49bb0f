//! Recommendation orchestration
//!
//! The four-stage pipeline wrapping the external systems: embed the query,
//! search the vector index, assemble the prompt, call the generation
//! provider. No branching beyond short-circuit-on-empty; a
//! `Recommendation` is always returned, never an error. HTTP status
//! decisions belong to the server layer.

use std::sync::Arc;

use tracing::{debug, warn};

use anr_domain::constants::{DEFAULT_COLLECTION, GENERATION_APOLOGY, NO_MATCHES_APOLOGY};
use anr_domain::ports::providers::{EmbeddingProvider, GenerationProvider, VectorStoreProvider};
use anr_domain::value_objects::Recommendation;

use crate::prompt::PromptBuilder;

/// Recommendation service - orchestrates the retrieval-augmented pipeline
///
/// Holds explicit references to the three provider ports plus the pure
/// prompt builder; constructed once at process start and shared by
/// reference.
pub struct RecommendationService {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    vector_store_provider: Arc<dyn VectorStoreProvider>,
    generation_provider: Arc<dyn GenerationProvider>,
    prompt_builder: PromptBuilder,
    collection: String,
}

impl RecommendationService {
    /// Create a new recommendation service with injected providers
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        vector_store_provider: Arc<dyn VectorStoreProvider>,
        generation_provider: Arc<dyn GenerationProvider>,
    ) -> Self {
        Self {
            embedding_provider,
            vector_store_provider,
            generation_provider,
            prompt_builder: PromptBuilder::new(),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }

    /// Override the catalog collection queried by this service
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Collection queried by this service
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Provider handles, for health reporting
    pub fn provider_names(&self) -> (String, String, String) {
        (
            self.embedding_provider.provider_name().to_string(),
            self.vector_store_provider.provider_name().to_string(),
            self.generation_provider.provider_name().to_string(),
        )
    }

    /// Number of records currently indexed
    pub async fn indexed_count(&self) -> usize {
        self.vector_store_provider
            .count(&self.collection)
            .await
            .unwrap_or(0)
    }

    /// Generate a recommendation for a user query
    ///
    /// Four sequential stages with fail-soft short circuits:
    /// 1. embed the query - failure yields the generation apology
    /// 2. nearest-neighbor search - empty yields the "no matches" apology
    /// 3. prompt assembly - pure, always succeeds
    /// 4. generation - failures already absorbed by the provider contract
    pub async fn recommend(&self, query: &str, n_results: usize) -> Recommendation {
        let query_embedding = match self.embedding_provider.embed(query).await {
            Ok(embedding) if !embedding.is_empty() => embedding,
            Ok(_) => {
                warn!(query, "Embedding provider returned an empty vector");
                return Recommendation::degraded(GENERATION_APOLOGY);
            }
            Err(err) => {
                warn!(query, error = %err, "Failed to embed user query");
                return Recommendation::degraded(GENERATION_APOLOGY);
            }
        };

        let matches = match self
            .vector_store_provider
            .search_similar(&self.collection, &query_embedding.vector, n_results)
            .await
        {
            Ok(matches) => matches,
            Err(err) => {
                warn!(collection = %self.collection, error = %err, "Vector store query failed");
                Vec::new()
            }
        };

        if matches.is_empty() {
            debug!(query, "No similar records found");
            return Recommendation::degraded(NO_MATCHES_APOLOGY);
        }

        let prompt = self.prompt_builder.build(query, &matches);
        debug!(
            matches = matches.len(),
            prompt_len = prompt.len(),
            "Requesting generation"
        );

        let llm_response = self.generation_provider.generate(&prompt).await;

        Recommendation {
            llm_response,
            source_animes: matches,
        }
    }
}
