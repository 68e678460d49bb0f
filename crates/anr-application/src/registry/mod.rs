//! Provider registries
//!
//! Auto-registration system for provider adapters using linkme distributed
//! slices. Each adapter submits an entry at compile time; the
//! infrastructure layer resolves providers by the name configured in
//! `anr.toml`.

pub mod embedding;
pub mod generation;
pub mod vector_store;

pub use embedding::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
    list_embedding_providers, resolve_embedding_provider,
};
pub use generation::{
    GENERATION_PROVIDERS, GenerationProviderConfig, GenerationProviderEntry,
    list_generation_providers, resolve_generation_provider,
};
pub use vector_store::{
    VECTOR_STORE_PROVIDERS, VectorStoreProviderConfig, VectorStoreProviderEntry,
    list_vector_store_providers, resolve_vector_store_provider,
};
