//! Provider implementations for the anime recommender
//!
//! Adapters implementing the domain ports: embedding (Ollama, Hugging Face
//! Inference API, null), vector store (in-memory, filesystem), and
//! generation (Groq, null). Each adapter registers itself in the
//! application-layer registry via linkme.

pub mod constants;
pub mod embedding;
pub mod generation;
pub mod utils;
pub mod vector_store;
