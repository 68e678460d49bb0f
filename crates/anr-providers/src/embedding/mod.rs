//! Embedding provider implementations

#[cfg(feature = "embedding-huggingface")]
pub mod huggingface;
pub mod null;
#[cfg(feature = "embedding-ollama")]
pub mod ollama;

#[cfg(feature = "embedding-huggingface")]
pub use huggingface::HuggingFaceEmbeddingProvider;
pub use null::NullEmbeddingProvider;
#[cfg(feature = "embedding-ollama")]
pub use ollama::OllamaEmbeddingProvider;
