//! Domain-wide constants

/// Default collection name for the anime catalog
pub const DEFAULT_COLLECTION: &str = "anime_catalog";

/// Default number of matches retrieved for a recommendation
pub const DEFAULT_TOP_K: usize = 10;

/// Maximum number of matches a caller may request
pub const MAX_TOP_K: usize = 20;

/// Minimum user query length accepted by the API boundary
pub const MIN_QUERY_LENGTH: usize = 3;

/// Default ingestion batch size
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// Fixed user-facing apology returned when generation fails (fail-soft)
pub const GENERATION_APOLOGY: &str =
    "Sorry, I was unable to generate a recommendation at this time.";

/// Fixed user-facing message returned when retrieval finds nothing
pub const NO_MATCHES_APOLOGY: &str = "I'm sorry, I couldn't find any animes that match your \
     query. Please try being a bit more descriptive!";
