//! Filesystem vector store implementation
//!
//! Persists each collection as a JSON file under a base directory. State
//! is held in memory for searching; `flush` writes it back to disk, and a
//! fresh store reloads whatever the previous process left behind.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use anr_domain::error::{Error, Result};
use anr_domain::ports::providers::VectorStoreProvider;
use anr_domain::value_objects::{Anime, AnimeMatch, Embedding};

use anr_application::registry::{
    VECTOR_STORE_PROVIDERS, VectorStoreProviderConfig, VectorStoreProviderEntry,
};

use crate::constants::FILESYSTEM_DEFAULT_BASE_PATH;

use super::similarity::top_k_matches;

/// Filesystem vector store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesystemVectorStoreConfig {
    /// Base directory for collection files
    pub base_path: PathBuf,
}

impl Default for FilesystemVectorStoreConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from(FILESYSTEM_DEFAULT_BASE_PATH),
        }
    }
}

/// On-disk representation of a collection
#[derive(Serialize, Deserialize)]
struct CollectionFile {
    dimensions: usize,
    entries: Vec<StoredEntry>,
}

#[derive(Serialize, Deserialize)]
struct StoredEntry {
    embedding: Embedding,
    anime: Anime,
}

struct CollectionData {
    dimensions: usize,
    entries: Vec<(Embedding, Anime)>,
}

// File utility helpers
mod file_utils {
    use std::path::Path;

    use serde::{Serialize, de::DeserializeOwned};

    use anr_domain::error::{Error, Result};

    pub async fn exists(path: &Path) -> bool {
        tokio::fs::metadata(path).await.is_ok()
    }

    pub async fn read_json<T: DeserializeOwned>(path: &Path, description: &str) -> Result<T> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::io(format!("Failed to read {description}: {e}")))?;
        serde_json::from_str(&content)
            .map_err(|e| Error::internal(format!("Failed to parse {description}: {e}")))
    }

    pub async fn ensure_dir_write_json<T: Serialize>(
        path: &Path,
        data: &T,
        description: &str,
    ) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| Error::io(format!("Failed to create directory for {description}: {e}")))?;
        }
        let content = serde_json::to_string(data)
            .map_err(|e| Error::internal(format!("Failed to serialize {description}: {e}")))?;
        tokio::fs::write(path, content)
            .await
            .map_err(|e| Error::io(format!("Failed to write {description}: {e}")))
    }
}

/// Filesystem-backed vector store
pub struct FilesystemVectorStore {
    config: FilesystemVectorStoreConfig,
    collections: DashMap<String, CollectionData>,
}

impl FilesystemVectorStore {
    /// Open a store rooted at the configured base path
    ///
    /// Existing collection files under the base path are loaded eagerly so
    /// searches work without an explicit warm-up step.
    pub async fn new(config: FilesystemVectorStoreConfig) -> Result<Self> {
        tokio::fs::create_dir_all(&config.base_path)
            .await
            .map_err(|e| Error::io(format!("Failed to create base directory: {e}")))?;

        let store = Self {
            config,
            collections: DashMap::new(),
        };
        store.load_existing_collections().await?;
        Ok(store)
    }

    fn collection_path(&self, name: &str) -> PathBuf {
        self.config.base_path.join(format!("{name}.json"))
    }

    async fn load_existing_collections(&self) -> Result<()> {
        let mut dir = tokio::fs::read_dir(&self.config.base_path)
            .await
            .map_err(|e| Error::io(format!("Failed to list base directory: {e}")))?;

        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| Error::io(format!("Failed to list base directory: {e}")))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match Self::load_collection_file(&path).await {
                Ok(data) => {
                    debug!(collection = name, records = data.entries.len(), "Loaded collection from disk");
                    self.collections.insert(name.to_string(), data);
                }
                Err(error) => {
                    warn!(collection = name, %error, "Skipping unreadable collection file");
                }
            }
        }
        Ok(())
    }

    async fn load_collection_file(path: &Path) -> Result<CollectionData> {
        let file: CollectionFile = file_utils::read_json(path, "collection file").await?;
        Ok(CollectionData {
            dimensions: file.dimensions,
            entries: file
                .entries
                .into_iter()
                .map(|e| (e.embedding, e.anime))
                .collect(),
        })
    }

    async fn persist_collection(&self, name: &str) -> Result<()> {
        let Some(data) = self.collections.get(name) else {
            return Ok(());
        };
        let file = CollectionFile {
            dimensions: data.dimensions,
            entries: data
                .entries
                .iter()
                .map(|(embedding, anime)| StoredEntry {
                    embedding: embedding.clone(),
                    anime: anime.clone(),
                })
                .collect(),
        };
        drop(data);
        file_utils::ensure_dir_write_json(&self.collection_path(name), &file, "collection file")
            .await
    }
}

#[async_trait]
impl VectorStoreProvider for FilesystemVectorStore {
    async fn collection_exists(&self, name: &str) -> Result<bool> {
        if self.collections.contains_key(name) {
            return Ok(true);
        }
        Ok(file_utils::exists(&self.collection_path(name)).await)
    }

    async fn create_collection(&self, name: &str, dimensions: usize) -> Result<()> {
        self.collections.insert(
            name.to_string(),
            CollectionData {
                dimensions,
                entries: Vec::new(),
            },
        );
        self.persist_collection(name).await
    }

    async fn delete_collection(&self, name: &str) -> Result<()> {
        self.collections.remove(name);
        let path = self.collection_path(name);
        if file_utils::exists(&path).await {
            tokio::fs::remove_file(&path)
                .await
                .map_err(|e| Error::io(format!("Failed to delete collection file: {e}")))?;
        }
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

        let ids = {
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
            ids
        };

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

    async fn flush(&self, collection: &str) -> Result<()> {
        self.persist_collection(collection).await
    }

    fn provider_name(&self) -> &str {
        "filesystem"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

#[linkme::distributed_slice(VECTOR_STORE_PROVIDERS)]
static FILESYSTEM_PROVIDER: VectorStoreProviderEntry = VectorStoreProviderEntry {
    name: "filesystem",
    description: "Filesystem store (JSON files under a base directory)",
    factory: |config: &VectorStoreProviderConfig| {
        let base_path = config
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(FILESYSTEM_DEFAULT_BASE_PATH));
        let store_config = FilesystemVectorStoreConfig { base_path };

        // Registry factories are synchronous; block on the async open.
        let store = tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(FilesystemVectorStore::new(store_config))
        })
        .map_err(|e| format!("Failed to open filesystem vector store: {e}"))?;

        Ok(Arc::new(store))
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    fn anime(id: u32, name: &str) -> Anime {
        Anime {
            anime_id: id,
            name: name.to_string(),
            genres: vec!["Drama".to_string()],
            anime_type: "Movie".to_string(),
            episodes: 1,
            rating: 9.0,
            members: 1_000_000,
            synopsis: Some("A quiet film.".to_string()),
        }
    }

    fn config(dir: &tempfile::TempDir) -> FilesystemVectorStoreConfig {
        FilesystemVectorStoreConfig {
            base_path: dir.path().to_path_buf(),
        }
    }

    #[tokio::test]
    async fn flush_then_reopen_restores_collection() {
        let dir = tempfile::tempdir().unwrap();

        {
            let store = FilesystemVectorStore::new(config(&dir)).await.unwrap();
            store.create_collection("catalog", 2).await.unwrap();
            store
                .insert_animes(
                    "catalog",
                    &[anime(1, "Alpha"), anime(2, "Beta")],
                    &[
                        Embedding::new(vec![1.0, 0.0], "null-test"),
                        Embedding::new(vec![0.0, 1.0], "null-test"),
                    ],
                )
                .await
                .unwrap();
            store.flush("catalog").await.unwrap();
        }

        let reopened = FilesystemVectorStore::new(config(&dir)).await.unwrap();
        assert_eq!(reopened.count("catalog").await.unwrap(), 2);

        let matches = reopened
            .search_similar("catalog", &[1.0, 0.0], 1)
            .await
            .unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].anime.name, "Alpha");
    }

    #[tokio::test]
    async fn wrong_dimension_embedding_is_skipped_on_insert() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemVectorStore::new(config(&dir)).await.unwrap();
        store.create_collection("catalog", 2).await.unwrap();

        let ids = store
            .insert_animes(
                "catalog",
                &[anime(1, "Alpha"), anime(2, "Beta")],
                &[
                    Embedding::new(vec![1.0, 0.0, 0.5], "null-test"),
                    Embedding::new(vec![0.0, 1.0], "null-test"),
                ],
            )
            .await
            .unwrap();
        assert_eq!(ids.len(), 1);
        assert_eq!(store.count("catalog").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn delete_collection_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemVectorStore::new(config(&dir)).await.unwrap();
        store.create_collection("catalog", 2).await.unwrap();
        store.flush("catalog").await.unwrap();
        assert!(store.collection_exists("catalog").await.unwrap());

        store.delete_collection("catalog").await.unwrap();
        assert!(!store.collection_exists("catalog").await.unwrap());
        assert!(!dir.path().join("catalog.json").exists());
    }

    #[tokio::test]
    async fn unflushed_inserts_are_not_persisted() {
        let dir = tempfile::tempdir().unwrap();

        {
            let store = FilesystemVectorStore::new(config(&dir)).await.unwrap();
            store.create_collection("catalog", 1).await.unwrap();
            store
                .insert_animes(
                    "catalog",
                    &[anime(1, "Alpha")],
                    &[Embedding::new(vec![1.0], "null-test")],
                )
                .await
                .unwrap();
            // no flush
        }

        let reopened = FilesystemVectorStore::new(config(&dir)).await.unwrap();
        assert_eq!(reopened.count("catalog").await.unwrap(), 0);
    }
}
