//! Recommendation Value Objects
//!
//! Value objects representing retrieval matches and the final
//! recommendation returned to a caller.

use serde::{Deserialize, Serialize};

use crate::value_objects::Anime;

/// Value Object: Ranked Retrieval Match
///
/// A single result from a similarity search: the matched catalog record
/// plus its similarity score. Produced only as a query result, never
/// persisted.
///
/// ## Business Rules
///
/// - Score is in [0.0, 1.0]; higher is more similar
/// - Matches are ordered best-first by the vector store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimeMatch {
    /// The matched catalog record
    #[serde(flatten)]
    pub anime: Anime,
    /// Semantic similarity score (0.0 to 1.0, higher is better)
    pub score: f64,
}

/// Value Object: Recommendation Result
///
/// The unit returned to a caller: generated natural-language text plus the
/// retrieval matches used as grounding context. Always produced, never
/// thrown; degraded pipelines yield an apology text with empty matches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    /// The generated recommendation text
    pub llm_response: String,
    /// Retrieval matches used as grounding context
    pub source_animes: Vec<AnimeMatch>,
}

impl Recommendation {
    /// A degraded result carrying only a fallback message
    pub fn degraded(message: impl Into<String>) -> Self {
        Self {
            llm_response: message.into(),
            source_animes: Vec::new(),
        }
    }

    /// Whether this result carries usable recommendation text
    pub fn is_usable(&self) -> bool {
        !self.llm_response.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degraded_result_has_no_matches() {
        let rec = Recommendation::degraded("sorry");
        assert!(rec.source_animes.is_empty());
        assert!(rec.is_usable());
    }

    #[test]
    fn blank_response_is_not_usable() {
        let rec = Recommendation::degraded("  ");
        assert!(!rec.is_usable());
    }
}
