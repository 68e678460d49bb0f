//! Provider constants

use std::time::Duration;

/// JSON content type header value
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Default request timeout for API providers
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";

// === Embedding dimensions ===

/// Dimension for the null test provider (matches common MiniLM models)
pub const EMBEDDING_DIMENSION_NULL: usize = 384;

/// Ollama nomic-embed-text
pub const EMBEDDING_DIMENSION_OLLAMA_NOMIC: usize = 768;
/// Ollama all-minilm
pub const EMBEDDING_DIMENSION_OLLAMA_MINILM: usize = 384;
/// Ollama mxbai-embed-large
pub const EMBEDDING_DIMENSION_OLLAMA_MXBAI: usize = 1024;
/// Ollama default for unknown models
pub const EMBEDDING_DIMENSION_OLLAMA_DEFAULT: usize = 768;

/// Hugging Face all-MiniLM-L6-v2
pub const EMBEDDING_DIMENSION_HF_MINILM: usize = 384;
/// Hugging Face all-mpnet-base-v2
pub const EMBEDDING_DIMENSION_HF_MPNET: usize = 768;
/// Hugging Face default for unknown models
pub const EMBEDDING_DIMENSION_HF_DEFAULT: usize = 384;

// === Default endpoints and models ===

/// Default Ollama server URL
pub const OLLAMA_DEFAULT_BASE_URL: &str = "http://localhost:11434";
/// Default Ollama embedding model
pub const OLLAMA_DEFAULT_MODEL: &str = "nomic-embed-text";

/// Default Hugging Face Inference API base URL
pub const HUGGINGFACE_DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";
/// Default Hugging Face embedding model
pub const HUGGINGFACE_DEFAULT_MODEL: &str = "sentence-transformers/all-MiniLM-L6-v2";

/// Default Groq API base URL
pub const GROQ_DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
/// Default Groq chat model
pub const GROQ_DEFAULT_MODEL: &str = "llama3-8b-8192";

// === Filesystem vector store ===

/// Default base directory for the filesystem vector store
pub const FILESYSTEM_DEFAULT_BASE_PATH: &str = "./data/vectors";
