//! Catalog Value Objects
//!
//! Value objects representing a single validated catalog record.
//! Records are immutable once constructed; they are created during
//! ingestion and only replaced by re-ingestion.

use serde::{Deserialize, Serialize};

/// Value Object: Catalog Record
///
/// A single anime as indexed by the recommender. Constructed from one CSV
/// row during ingestion; numeric fields are coerced with defaults before
/// construction, so a valid instance never carries missing numbers.
///
/// ## Business Rules
///
/// - `anime_id` uniquely identifies the record within the catalog
/// - `genres` is the canonical field name (the historical `genre` CSV
///   column is mapped during ingestion)
/// - `anime_type` is serialized as `"type"` for API compatibility
///
/// ## Example
///
/// ```rust
/// use anr_domain::value_objects::Anime;
///
/// let anime = Anime {
///     anime_id: 5114,
///     name: "Fullmetal Alchemist: Brotherhood".to_string(),
///     genres: vec!["Action".to_string(), "Adventure".to_string()],
///     anime_type: "TV".to_string(),
///     episodes: 64,
///     rating: 9.2,
///     members: 793665,
///     synopsis: None,
/// };
/// assert!(anime.embedding_text().starts_with("Genres: Action, Adventure"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Anime {
    /// Unique identifier for the anime
    pub anime_id: u32,
    /// Official name
    pub name: String,
    /// Genre tags associated with the anime
    pub genres: Vec<String>,
    /// Broadcast type (e.g. TV, Movie, OVA)
    #[serde(rename = "type")]
    pub anime_type: String,
    /// Total number of episodes (0 when unknown)
    pub episodes: u32,
    /// Average community rating out of 10 (0.0 when unknown)
    pub rating: f32,
    /// Number of community members tracking this anime
    pub members: u64,
    /// Free-text synopsis, when the catalog provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synopsis: Option<String>,
}

impl Anime {
    /// Text used to compute this record's embedding.
    ///
    /// Similarity is computed over the genre list, enriched with the
    /// synopsis when one is available.
    pub fn embedding_text(&self) -> String {
        let mut text = format!("Genres: {}", self.genres.join(", "));
        if let Some(synopsis) = &self.synopsis {
            if !synopsis.trim().is_empty() {
                text.push_str("\nSynopsis: ");
                text.push_str(synopsis.trim());
            }
        }
        text
    }

    /// Stable identifier used as the vector store key
    pub fn vector_id(&self) -> String {
        self.anime_id.to_string()
    }
}
