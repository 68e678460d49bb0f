//! Groq Generation Provider
//!
//! Implements the GenerationProvider port against Groq's OpenAI-compatible
//! chat completions API.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;

use anr_domain::constants::GENERATION_APOLOGY;
use anr_domain::error::{Error, Result};
use anr_domain::ports::providers::GenerationProvider;

use anr_application::registry::{
    GENERATION_PROVIDERS, GenerationProviderConfig, GenerationProviderEntry,
};

use crate::constants::{
    CONTENT_TYPE_JSON, DEFAULT_REQUEST_TIMEOUT, ERROR_MSG_REQUEST_TIMEOUT, GROQ_DEFAULT_BASE_URL,
    GROQ_DEFAULT_MODEL,
};
use crate::utils::{HttpResponseUtils, JsonExt};

/// Groq generation provider
///
/// Talks to Groq's hosted chat completions endpoint. Receives the HTTP
/// client via constructor injection.
pub struct GroqGenerationProvider {
    base_url: String,
    model: String,
    api_key: String,
    timeout: Duration,
    http_client: Client,
}

impl GroqGenerationProvider {
    /// Create a new Groq generation provider
    ///
    /// # Arguments
    /// * `base_url` - API base URL (e.g., "https://api.groq.com/openai/v1")
    /// * `model` - Model name (e.g., "llama3-8b-8192")
    /// * `api_key` - Groq API key
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        base_url: String,
        model: String,
        api_key: String,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            base_url,
            model,
            api_key,
            timeout,
            http_client,
        }
    }

    /// Perform the completion request, surfacing every failure
    ///
    /// `generate` swallows the error per the fail-soft contract; this
    /// inner method keeps the full error for logging and health checks.
    async fn fetch_completion(&self, prompt: &str) -> Result<String> {
        let payload = serde_json::json!({
            "model": self.model,
            "messages": [
                {"role": "user", "content": prompt}
            ]
        });

        let response = self
            .http_client
            .post(format!(
                "{}/chat/completions",
                self.base_url.trim_end_matches('/')
            ))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::generation(format!("{ERROR_MSG_REQUEST_TIMEOUT} {:?}", self.timeout))
                } else {
                    Error::generation(format!("HTTP request failed: {e}"))
                }
            })?;

        let response_data =
            HttpResponseUtils::check_and_parse(response, "Groq", Error::generation).await?;

        let content = response_data
            .opt_array("choices")
            .and_then(|choices| choices.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.opt_str("content"))
            .ok_or_else(|| {
                Error::generation("Invalid response format: missing message content".to_string())
            })?;

        Ok(content.trim().to_string())
    }
}

#[async_trait]
impl GenerationProvider for GroqGenerationProvider {
    async fn generate(&self, prompt: &str) -> String {
        match self.fetch_completion(prompt).await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => {
                warn!(model = %self.model, "Groq returned an empty completion");
                GENERATION_APOLOGY.to_string()
            }
            Err(error) => {
                warn!(model = %self.model, %error, "Groq completion failed");
                GENERATION_APOLOGY.to_string()
            }
        }
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    fn provider_name(&self) -> &str {
        "groq"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

#[linkme::distributed_slice(GENERATION_PROVIDERS)]
static GROQ_PROVIDER: GenerationProviderEntry = GenerationProviderEntry {
    name: "groq",
    description: "Groq hosted LLM (OpenAI-compatible chat completions)",
    factory: |config: &GenerationProviderConfig| {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| "Groq provider requires an API key".to_string())?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| GROQ_DEFAULT_BASE_URL.to_string());
        let model = config
            .model
            .clone()
            .unwrap_or_else(|| GROQ_DEFAULT_MODEL.to_string());

        let http_client = Client::builder()
            .timeout(DEFAULT_REQUEST_TIMEOUT)
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {e}"))?;

        Ok(Arc::new(GroqGenerationProvider::new(
            base_url,
            model,
            api_key,
            DEFAULT_REQUEST_TIMEOUT,
            http_client,
        )))
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use anr_application::registry::resolve_generation_provider;

    #[test]
    fn factory_rejects_missing_api_key() {
        let config = GenerationProviderConfig::new("groq");
        let err = resolve_generation_provider(&config).map(|_| ()).unwrap_err();
        assert!(err.contains("API key"));
    }

    #[test]
    fn factory_applies_defaults() {
        let config = GenerationProviderConfig::new("groq").with_api_key("gsk-test");
        let provider = resolve_generation_provider(&config).unwrap();
        assert_eq!(provider.provider_name(), "groq");
        assert_eq!(provider.model_name(), GROQ_DEFAULT_MODEL);
    }

    #[tokio::test]
    async fn unreachable_endpoint_yields_apology() {
        let client = Client::new();
        let provider = GroqGenerationProvider::new(
            "http://127.0.0.1:1".to_string(),
            "llama3-8b-8192".to_string(),
            "gsk-test".to_string(),
            Duration::from_millis(200),
            client,
        );
        assert_eq!(provider.generate("hello").await, GENERATION_APOLOGY);
    }
}
