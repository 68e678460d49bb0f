//! Application bootstrap
//!
//! Resolves configured providers through the linkme registries and wires
//! them into the application services. Provider resolution failures are
//! fatal configuration errors.

use std::sync::Arc;

use tracing::info;

use anr_domain::error::{Error, Result};
use anr_domain::ports::providers::{EmbeddingProvider, GenerationProvider, VectorStoreProvider};

use anr_application::registry::{
    EmbeddingProviderConfig, GenerationProviderConfig, VectorStoreProviderConfig,
    resolve_embedding_provider, resolve_generation_provider, resolve_vector_store_provider,
};
use anr_application::{IngestService, RecommendationService};

use crate::config::AppConfig;

/// Fully wired application context
///
/// Built once at process start; both the HTTP server and the ingestion
/// CLI hang off this.
pub struct AppContext {
    /// Merged and validated configuration
    pub config: AppConfig,
    /// Serving pipeline
    pub recommendation_service: Arc<RecommendationService>,
    /// Offline ingestion pipeline
    pub ingest_service: Arc<IngestService>,
}

impl AppContext {
    /// Build the application context from validated configuration
    pub fn build(config: AppConfig) -> Result<Self> {
        let embedding_provider = build_embedding_provider(&config)?;
        let vector_store_provider = build_vector_store_provider(&config)?;
        let generation_provider = build_generation_provider(&config)?;

        info!(
            embedding = embedding_provider.provider_name(),
            vector_store = vector_store_provider.provider_name(),
            generation = generation_provider.provider_name(),
            collection = %config.providers.vector_store.collection,
            "Providers resolved"
        );

        let collection = config.providers.vector_store.collection.clone();

        let recommendation_service = Arc::new(
            RecommendationService::new(
                Arc::clone(&embedding_provider),
                Arc::clone(&vector_store_provider),
                generation_provider,
            )
            .with_collection(collection.clone()),
        );

        let ingest_service = Arc::new(
            IngestService::new(embedding_provider, vector_store_provider)
                .with_collection(collection)
                .with_batch_size(config.ingest.batch_size),
        );

        Ok(Self {
            config,
            recommendation_service,
            ingest_service,
        })
    }
}

fn build_embedding_provider(config: &AppConfig) -> Result<Arc<dyn EmbeddingProvider>> {
    let embedding = &config.providers.embedding;
    let mut provider_config = EmbeddingProviderConfig::new(&embedding.provider);
    if let Some(model) = &embedding.model {
        provider_config = provider_config.with_model(model);
    }
    if let Some(base_url) = &embedding.base_url {
        provider_config = provider_config.with_base_url(base_url);
    }
    if let Some(api_key) = &embedding.api_key {
        provider_config = provider_config.with_api_key(api_key);
    }
    if let Some(dimensions) = embedding.dimensions {
        provider_config = provider_config.with_dimensions(dimensions);
    }
    resolve_embedding_provider(&provider_config).map_err(Error::config)
}

fn build_vector_store_provider(config: &AppConfig) -> Result<Arc<dyn VectorStoreProvider>> {
    let vector_store = &config.providers.vector_store;
    let mut provider_config = VectorStoreProviderConfig::new(&vector_store.provider)
        .with_collection(&vector_store.collection);
    if let Some(path) = &vector_store.path {
        provider_config = provider_config.with_path(path);
    }
    resolve_vector_store_provider(&provider_config).map_err(Error::config)
}

fn build_generation_provider(config: &AppConfig) -> Result<Arc<dyn GenerationProvider>> {
    let generation = &config.providers.generation;
    let mut provider_config = GenerationProviderConfig::new(&generation.provider);
    if let Some(model) = &generation.model {
        provider_config = provider_config.with_model(model);
    }
    if let Some(base_url) = &generation.base_url {
        provider_config = provider_config.with_base_url(base_url);
    }
    if let Some(api_key) = &generation.api_key {
        provider_config = provider_config.with_api_key(api_key);
    }
    resolve_generation_provider(&provider_config).map_err(Error::config)
}
