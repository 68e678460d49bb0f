//! Vector store provider port

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{Anime, AnimeMatch, Embedding};

/// Vector Storage Interface
///
/// Business contract for the persistent nearest-neighbor index holding the
/// anime catalog. The index is assumed single-writer (ingestion) /
/// many-reader (serving); concurrency safety is the backend's concern.
///
/// # Example
///
/// ```ignore
/// use anr_domain::ports::providers::VectorStoreProvider;
///
/// provider.reset_collection("anime_catalog", 384).await?;
/// provider.insert_animes("anime_catalog", &animes, &embeddings).await?;
/// let matches = provider
///     .search_similar("anime_catalog", &query.vector, 10)
///     .await?;
/// ```
#[async_trait]
pub trait VectorStoreProvider: Send + Sync {
    /// Check if a collection exists
    async fn collection_exists(&self, name: &str) -> Result<bool>;

    /// Create a new collection with the given vector dimensionality
    async fn create_collection(&self, name: &str, dimensions: usize) -> Result<()>;

    /// Delete a collection
    ///
    /// Deleting a collection that does not exist is a no-op, not an error.
    async fn delete_collection(&self, name: &str) -> Result<()>;

    /// Idempotently drop and recreate a collection
    ///
    /// Never fails on "does not exist"; all other failures surface.
    async fn reset_collection(&self, name: &str, dimensions: usize) -> Result<()> {
        if self.collection_exists(name).await? {
            self.delete_collection(name).await?;
        }
        self.create_collection(name, dimensions).await
    }

    /// Insert catalog records with their embeddings
    ///
    /// `animes` and `embeddings` must have matching lengths; mismatched or
    /// empty input is a warn-level no-op returning no IDs, never an error.
    /// Individual embeddings whose length differs from the collection's
    /// declared dimensionality are skipped with a warning.
    ///
    /// # Returns
    /// IDs assigned to each inserted record
    async fn insert_animes(
        &self,
        collection: &str,
        animes: &[Anime],
        embeddings: &[Embedding],
    ) -> Result<Vec<String>>;

    /// Search for records similar to a query vector
    ///
    /// Results are ordered best-first (non-increasing score) and capped at
    /// `limit`. An empty query vector or a missing collection yields an
    /// empty result, not an error.
    async fn search_similar(
        &self,
        collection: &str,
        query_vector: &[f32],
        limit: usize,
    ) -> Result<Vec<AnimeMatch>>;

    /// Number of records stored in a collection (0 when missing)
    async fn count(&self, collection: &str) -> Result<usize>;

    /// Flush pending writes for a collection
    async fn flush(&self, collection: &str) -> Result<()>;

    /// Name/identifier of this vector store provider
    fn provider_name(&self) -> &str;

    /// Health check for the provider
    async fn health_check(&self) -> Result<()> {
        self.collection_exists("__health_check__").await?;
        Ok(())
    }
}
