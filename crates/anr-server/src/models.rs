//! API request and response models

use serde::{Deserialize, Serialize};
use validator::Validate;

use anr_domain::constants::DEFAULT_TOP_K;
use anr_domain::value_objects::{AnimeMatch, Recommendation};

/// Request body for `POST /recommend`
#[derive(Debug, Deserialize, Validate)]
pub struct RecommendRequest {
    /// Free-text description of what the user wants to watch
    #[validate(length(min = 3, message = "Query must be at least 3 characters"))]
    pub query: String,

    /// Number of catalog matches to retrieve (1-20)
    #[serde(default)]
    #[validate(range(min = 1, max = 20, message = "n_results must be between 1 and 20"))]
    pub n_results: Option<usize>,
}

impl RecommendRequest {
    /// Requested match count, with the documented default applied
    pub fn n_results_or_default(&self) -> usize {
        self.n_results.unwrap_or(DEFAULT_TOP_K)
    }
}

/// Response body for `POST /recommend`
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendResponse {
    /// Generated recommendation text
    pub llm_response: String,
    /// Retrieval matches used as grounding context
    pub source_animes: Vec<AnimeMatch>,
}

impl From<Recommendation> for RecommendResponse {
    fn from(recommendation: Recommendation) -> Self {
        Self {
            llm_response: recommendation.llm_response,
            source_animes: recommendation.source_animes,
        }
    }
}

/// Generic error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error description
    pub error: String,
}

impl ErrorResponse {
    /// Create an error response from any displayable message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Response body for `GET /`
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    /// Service name
    pub service: String,
    /// Service version
    pub version: String,
    /// Short usage hint
    pub message: String,
}

/// Response body for `GET /health`
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status ("ok")
    pub status: String,
    /// Configured embedding provider
    pub embedding_provider: String,
    /// Configured vector store provider
    pub vector_store_provider: String,
    /// Configured generation provider
    pub generation_provider: String,
    /// Catalog collection served
    pub collection: String,
    /// Number of records currently indexed
    pub indexed_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_query_fails_validation() {
        let request = RecommendRequest {
            query: "ab".to_string(),
            n_results: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn out_of_range_n_results_fails_validation() {
        let request = RecommendRequest {
            query: "space opera".to_string(),
            n_results: Some(21),
        };
        assert!(request.validate().is_err());

        let request = RecommendRequest {
            query: "space opera".to_string(),
            n_results: Some(0),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn missing_n_results_uses_default() {
        let request: RecommendRequest =
            serde_json::from_str(r#"{"query": "slice of life"}"#).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.n_results_or_default(), DEFAULT_TOP_K);
    }
}
