//! Provider ports
//!
//! Contracts for the three wrapped external systems: the embedding model,
//! the vector store, and the generation model.

pub mod embedding;
pub mod generation;
pub mod vector_store;

pub use embedding::EmbeddingProvider;
pub use generation::GenerationProvider;
pub use vector_store::VectorStoreProvider;
