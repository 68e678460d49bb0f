//! In-memory vector store provider
//!
//! Fast, non-persistent storage for testing and development. Collections
//! live in a concurrent map and vanish with the process.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::warn;

use anr_domain::error::Result;
use anr_domain::ports::providers::VectorStoreProvider;
use anr_domain::value_objects::{Anime, AnimeMatch, Embedding};

use anr_application::registry::{
    VECTOR_STORE_PROVIDERS, VectorStoreProviderConfig, VectorStoreProviderEntry,
};

use super::similarity::top_k_matches;

/// Per-collection data: declared dimensionality plus the stored records
struct CollectionData {
    dimensions: usize,
    entries: Vec<(Embedding, Anime)>,
}

/// In-memory vector store
///
/// Thread-safe via DashMap. Searches are linear scans with heap-based
/// top-k selection, which is plenty for catalog-sized data.
pub struct InMemoryVectorStoreProvider {
    collections: DashMap<String, CollectionData>,
}

impl InMemoryVectorStoreProvider {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self {
            collections: DashMap::new(),
        }
    }
}

impl Default for InMemoryVectorStoreProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VectorStoreProvider for InMemoryVectorStoreProvider {
    async fn collection_exists(&self, name: &str) -> Result<bool> {
        Ok(self.collections.contains_key(name))
    }

    async fn create_collection(&self, name: &str, dimensions: usize) -> Result<()> {
        self.collections.insert(
            name.to_string(),
            CollectionData {
                dimensions,
                entries: Vec::new(),
            },
        );
        Ok(())
    }

    async fn delete_collection(&self, name: &str) -> Result<()> {
        // Missing collection is a no-op
        self.collections.remove(name);
        Ok(())
    }

    async fn insert_animes(
        &self,
        collection: &str,
        animes: &[Anime],
        embeddings: &[Embedding],
    ) -> Result<Vec<String>> {
        if animes.is_empty() || animes.len() != embeddings.len() {
            warn!(
                collection,
                animes = animes.len(),
                embeddings = embeddings.len(),
                "Skipping insert: empty or mismatched batch"
            );
            return Ok(Vec::new());
        }

        let Some(mut data) = self.collections.get_mut(collection) else {
            warn!(collection, "Skipping insert: collection does not exist");
            return Ok(Vec::new());
        };

        let mut ids = Vec::with_capacity(animes.len());
        for (anime, embedding) in animes.iter().zip(embeddings.iter()) {
            if embedding.vector.len() != data.dimensions {
                warn!(
                    collection,
                    record = %anime.vector_id(),
                    got = embedding.vector.len(),
                    expected = data.dimensions,
                    "Skipping record: embedding dimensionality mismatch"
                );
                continue;
            }
            ids.push(anime.vector_id());
            data.entries.push((embedding.clone(), anime.clone()));
        }

        Ok(ids)
    }

    async fn search_similar(
        &self,
        collection: &str,
        query_vector: &[f32],
        limit: usize,
    ) -> Result<Vec<AnimeMatch>> {
        let Some(data) = self.collections.get(collection) else {
            warn!(collection, "Search against missing collection");
            return Ok(Vec::new());
        };

        if query_vector.is_empty() || query_vector.len() != data.dimensions {
            warn!(
                collection,
                got = query_vector.len(),
                expected = data.dimensions,
                "Search with malformed query vector"
            );
            return Ok(Vec::new());
        }

        Ok(top_k_matches(&data.entries, query_vector, limit))
    }

    async fn count(&self, collection: &str) -> Result<usize> {
        Ok(self
            .collections
            .get(collection)
            .map_or(0, |data| data.entries.len()))
    }

    async fn flush(&self, _collection: &str) -> Result<()> {
        // Nothing buffered in memory
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

#[linkme::distributed_slice(VECTOR_STORE_PROVIDERS)]
static MEMORY_PROVIDER: VectorStoreProviderEntry = VectorStoreProviderEntry {
    name: "memory",
    description: "In-memory store (non-persistent, for testing and development)",
    factory: |_config: &VectorStoreProviderConfig| {
        Ok(std::sync::Arc::new(InMemoryVectorStoreProvider::new()))
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    fn anime(id: u32, name: &str) -> Anime {
        Anime {
            anime_id: id,
            name: name.to_string(),
            genres: vec!["Action".to_string(), "Mecha".to_string()],
            anime_type: "TV".to_string(),
            episodes: 26,
            rating: 8.5,
            members: 500_000,
            synopsis: None,
        }
    }

    fn embedding(vector: Vec<f32>) -> Embedding {
        Embedding::new(vector, "null-test")
    }

    async fn seeded_store() -> InMemoryVectorStoreProvider {
        let store = InMemoryVectorStoreProvider::new();
        store.create_collection("catalog", 2).await.unwrap();
        store
            .insert_animes(
                "catalog",
                &[anime(1, "Alpha"), anime(2, "Beta"), anime(3, "Gamma")],
                &[
                    embedding(vec![1.0, 0.0]),
                    embedding(vec![0.0, 1.0]),
                    embedding(vec![0.8, 0.2]),
                ],
            )
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn search_returns_best_first_capped_at_limit() {
        let store = seeded_store().await;
        let matches = store.search_similar("catalog", &[1.0, 0.0], 2).await.unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].anime.anime_id, 1);
        assert!(matches[0].score >= matches[1].score);
    }

    #[tokio::test]
    async fn search_missing_collection_is_empty_not_error() {
        let store = InMemoryVectorStoreProvider::new();
        let matches = store.search_similar("nope", &[1.0, 0.0], 5).await.unwrap();
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn search_with_wrong_dimension_is_empty() {
        let store = seeded_store().await;
        let matches = store
            .search_similar("catalog", &[1.0, 0.0, 0.0], 5)
            .await
            .unwrap();
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn mismatched_insert_is_a_noop() {
        let store = InMemoryVectorStoreProvider::new();
        store.create_collection("catalog", 2).await.unwrap();
        let ids = store
            .insert_animes("catalog", &[anime(1, "Alpha")], &[])
            .await
            .unwrap();
        assert!(ids.is_empty());
        assert_eq!(store.count("catalog").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn wrong_dimension_embedding_is_skipped_on_insert() {
        let store = InMemoryVectorStoreProvider::new();
        store.create_collection("catalog", 2).await.unwrap();
        let ids = store
            .insert_animes(
                "catalog",
                &[anime(1, "Alpha"), anime(2, "Beta")],
                &[embedding(vec![1.0, 0.0, 0.5]), embedding(vec![0.0, 1.0])],
            )
            .await
            .unwrap();
        assert_eq!(ids, vec![anime(2, "Beta").vector_id()]);
        assert_eq!(store.count("catalog").await.unwrap(), 1);

        let matches = store.search_similar("catalog", &[0.0, 1.0], 5).await.unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].anime.anime_id, 2);
    }

    #[tokio::test]
    async fn reset_collection_is_idempotent() {
        let store = seeded_store().await;
        assert_eq!(store.count("catalog").await.unwrap(), 3);

        store.reset_collection("catalog", 2).await.unwrap();
        assert_eq!(store.count("catalog").await.unwrap(), 0);

        // Resetting a collection that was never created also succeeds
        store.reset_collection("fresh", 4).await.unwrap();
        assert!(store.collection_exists("fresh").await.unwrap());
    }

    #[tokio::test]
    async fn delete_missing_collection_is_a_noop() {
        let store = InMemoryVectorStoreProvider::new();
        assert!(store.delete_collection("ghost").await.is_ok());
    }

    #[tokio::test]
    async fn count_of_missing_collection_is_zero() {
        let store = InMemoryVectorStoreProvider::new();
        assert_eq!(store.count("ghost").await.unwrap(), 0);
    }
}
