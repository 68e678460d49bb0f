//! Hugging Face Embedding Provider
//!
//! Implements the EmbeddingProvider port using the Hugging Face Inference
//! API feature-extraction pipeline. The API token is optional for public
//! sentence-transformers models.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use anr_domain::error::{Error, Result};
use anr_domain::ports::providers::EmbeddingProvider;
use anr_domain::value_objects::Embedding;

use anr_application::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};

use crate::constants::{
    CONTENT_TYPE_JSON, DEFAULT_REQUEST_TIMEOUT, EMBEDDING_DIMENSION_HF_DEFAULT,
    EMBEDDING_DIMENSION_HF_MINILM, EMBEDDING_DIMENSION_HF_MPNET, ERROR_MSG_REQUEST_TIMEOUT,
    HUGGINGFACE_DEFAULT_BASE_URL, HUGGINGFACE_DEFAULT_MODEL,
};
use crate::utils::HttpResponseUtils;

/// Hugging Face Inference API embedding provider
///
/// Implements the `EmbeddingProvider` domain port against the hosted
/// feature-extraction pipeline. Receives the HTTP client via constructor
/// injection; the bearer token is optional.
pub struct HuggingFaceEmbeddingProvider {
    api_token: Option<String>,
    base_url: String,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl HuggingFaceEmbeddingProvider {
    /// Create a new Hugging Face embedding provider
    ///
    /// # Arguments
    /// * `api_token` - Optional HF API token (required only for gated models)
    /// * `base_url` - Inference API base URL
    /// * `model` - Model id (e.g., "sentence-transformers/all-MiniLM-L6-v2")
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        api_token: Option<String>,
        base_url: String,
        model: String,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        let api_token = api_token.filter(|t| !t.trim().is_empty());
        Self {
            api_token,
            base_url,
            model,
            timeout,
            http_client,
        }
    }

    /// Get the model id for this provider
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/pipeline/feature-extraction/{}",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    /// Fetch embeddings for a batch of texts in one request
    async fn fetch_embeddings(&self, texts: &[String]) -> Result<serde_json::Value> {
        let payload = serde_json::json!({
            "inputs": texts,
            "options": {"wait_for_model": true}
        });

        let mut request = self
            .http_client
            .post(self.endpoint())
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::embedding(format!("{ERROR_MSG_REQUEST_TIMEOUT} {:?}", self.timeout))
            } else {
                Error::embedding(format!("HTTP request failed: {e}"))
            }
        })?;

        HttpResponseUtils::check_and_parse(response, "HuggingFace", Error::embedding).await
    }

    /// Parse the response: an array of one vector per input text
    fn parse_embeddings(&self, response_data: &serde_json::Value) -> Result<Vec<Embedding>> {
        let rows = response_data.as_array().ok_or_else(|| {
            Error::embedding("Invalid response format: expected an array of vectors".to_string())
        })?;

        rows.iter()
            .map(|row| {
                let vector = row
                    .as_array()
                    .ok_or_else(|| {
                        Error::embedding("Invalid response format: row is not a vector".to_string())
                    })?
                    .iter()
                    .map(|v| v.as_f64().unwrap_or(0.0) as f32)
                    .collect::<Vec<f32>>();
                Ok(Embedding::new(vector, self.model.clone()))
            })
            .collect()
    }
}

#[async_trait]
impl EmbeddingProvider for HuggingFaceEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let response_data = self.fetch_embeddings(texts).await?;
        let embeddings = self.parse_embeddings(&response_data)?;

        if embeddings.len() != texts.len() {
            return Err(Error::embedding(format!(
                "HuggingFace returned {} embeddings for {} inputs",
                embeddings.len(),
                texts.len()
            )));
        }
        Ok(embeddings)
    }

    fn dimensions(&self) -> usize {
        match self.model.as_str() {
            "sentence-transformers/all-MiniLM-L6-v2" | "all-MiniLM-L6-v2" => {
                EMBEDDING_DIMENSION_HF_MINILM
            }
            "sentence-transformers/all-mpnet-base-v2" | "all-mpnet-base-v2" => {
                EMBEDDING_DIMENSION_HF_MPNET
            }
            _ => EMBEDDING_DIMENSION_HF_DEFAULT,
        }
    }

    fn provider_name(&self) -> &str {
        "huggingface"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

/// Factory function for creating Hugging Face embedding provider instances.
fn huggingface_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let base_url = config
        .base_url
        .clone()
        .unwrap_or_else(|| HUGGINGFACE_DEFAULT_BASE_URL.to_string());
    let model = config
        .model
        .clone()
        .unwrap_or_else(|| HUGGINGFACE_DEFAULT_MODEL.to_string());
    let http_client = Client::builder()
        .timeout(DEFAULT_REQUEST_TIMEOUT)
        .build()
        .map_err(|e| format!("Failed to create HTTP client: {e}"))?;

    Ok(Arc::new(HuggingFaceEmbeddingProvider::new(
        config.api_key.clone(),
        base_url,
        model,
        DEFAULT_REQUEST_TIMEOUT,
        http_client,
    )))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static HUGGINGFACE_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "huggingface",
    description: "Hugging Face Inference API embedding provider (sentence-transformers models)",
    factory: huggingface_factory,
};
