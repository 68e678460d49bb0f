//! Pipeline behavior tests
//!
//! Exercises the recommendation orchestrator and the ingestion pipeline
//! against scripted stub providers, covering the fail-soft short
//! circuits.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use anr_application::{IngestService, RecommendationService};
use anr_domain::constants::{GENERATION_APOLOGY, NO_MATCHES_APOLOGY};
use anr_domain::error::{Error, Result};
use anr_domain::ports::providers::{EmbeddingProvider, GenerationProvider, VectorStoreProvider};
use anr_domain::value_objects::{Anime, AnimeMatch, Embedding};

const DIMS: usize = 4;

fn anime(id: u32, name: &str) -> Anime {
    Anime {
        anime_id: id,
        name: name.to_string(),
        genres: vec!["Action".to_string()],
        anime_type: "TV".to_string(),
        episodes: 12,
        rating: 7.5,
        members: 10_000,
        synopsis: None,
    }
}

/// Embedding stub: fixed vectors, optionally failing after N calls
struct ScriptedEmbedding {
    fail: bool,
    empty: bool,
    calls: AtomicUsize,
    fail_after_batches: Option<usize>,
}

impl ScriptedEmbedding {
    fn ok() -> Self {
        Self {
            fail: false,
            empty: false,
            calls: AtomicUsize::new(0),
            fail_after_batches: None,
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::ok()
        }
    }

    fn empty() -> Self {
        Self {
            empty: true,
            ..Self::ok()
        }
    }

    fn failing_after(batches: usize) -> Self {
        Self {
            fail_after_batches: Some(batches),
            ..Self::ok()
        }
    }
}

#[async_trait]
impl EmbeddingProvider for ScriptedEmbedding {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::embedding("scripted failure"));
        }
        if let Some(limit) = self.fail_after_batches {
            if call >= limit {
                return Err(Error::embedding("scripted failure after limit"));
            }
        }
        if self.empty {
            return Ok(texts
                .iter()
                .map(|_| Embedding::new(Vec::new(), "stub"))
                .collect());
        }
        Ok(texts
            .iter()
            .map(|_| Embedding::new(vec![0.5; DIMS], "stub"))
            .collect())
    }

    fn dimensions(&self) -> usize {
        DIMS
    }

    fn provider_name(&self) -> &str {
        "stub"
    }
}

/// Vector store stub: returns a fixed result set or a scripted error
struct ScriptedStore {
    matches: Vec<AnimeMatch>,
    fail_search: bool,
    inserted: AtomicUsize,
}

impl ScriptedStore {
    fn with_matches(matches: Vec<AnimeMatch>) -> Self {
        Self {
            matches,
            fail_search: false,
            inserted: AtomicUsize::new(0),
        }
    }

    fn empty() -> Self {
        Self::with_matches(Vec::new())
    }

    fn failing() -> Self {
        Self {
            fail_search: true,
            ..Self::empty()
        }
    }
}

#[async_trait]
impl VectorStoreProvider for ScriptedStore {
    async fn collection_exists(&self, _name: &str) -> Result<bool> {
        Ok(true)
    }

    async fn create_collection(&self, _name: &str, _dimensions: usize) -> Result<()> {
        Ok(())
    }

    async fn delete_collection(&self, _name: &str) -> Result<()> {
        Ok(())
    }

    async fn insert_animes(
        &self,
        _collection: &str,
        animes: &[Anime],
        _embeddings: &[Embedding],
    ) -> Result<Vec<String>> {
        self.inserted.fetch_add(animes.len(), Ordering::SeqCst);
        Ok(animes.iter().map(Anime::vector_id).collect())
    }

    async fn search_similar(
        &self,
        _collection: &str,
        _query_vector: &[f32],
        limit: usize,
    ) -> Result<Vec<AnimeMatch>> {
        if self.fail_search {
            return Err(Error::vector_db("scripted failure"));
        }
        Ok(self.matches.iter().take(limit).cloned().collect())
    }

    async fn count(&self, _collection: &str) -> Result<usize> {
        Ok(self.inserted.load(Ordering::SeqCst))
    }

    async fn flush(&self, _collection: &str) -> Result<()> {
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "stub"
    }
}

/// Generation stub: echoes a marker string
struct EchoGeneration;

#[async_trait]
impl GenerationProvider for EchoGeneration {
    async fn generate(&self, _prompt: &str) -> String {
        "You should watch Steel Requiem.".to_string()
    }

    fn model_name(&self) -> &str {
        "echo"
    }

    fn provider_name(&self) -> &str {
        "stub"
    }
}

fn service(
    embedding: ScriptedEmbedding,
    store: ScriptedStore,
) -> RecommendationService {
    RecommendationService::new(
        Arc::new(embedding),
        Arc::new(store),
        Arc::new(EchoGeneration),
    )
}

fn one_match() -> Vec<AnimeMatch> {
    vec![AnimeMatch {
        anime: anime(1, "Steel Requiem"),
        score: 0.92,
    }]
}

#[tokio::test]
async fn happy_path_returns_generation_with_sources() {
    let service = service(ScriptedEmbedding::ok(), ScriptedStore::with_matches(one_match()));
    let result = service.recommend("mecha anime", 10).await;
    assert_eq!(result.llm_response, "You should watch Steel Requiem.");
    assert_eq!(result.source_animes.len(), 1);
}

#[tokio::test]
async fn embedding_failure_degrades_to_apology() {
    let service = service(ScriptedEmbedding::failing(), ScriptedStore::with_matches(one_match()));
    let result = service.recommend("mecha anime", 10).await;
    assert_eq!(result.llm_response, GENERATION_APOLOGY);
    assert!(result.source_animes.is_empty());
}

#[tokio::test]
async fn empty_embedding_degrades_to_apology() {
    let service = service(ScriptedEmbedding::empty(), ScriptedStore::with_matches(one_match()));
    let result = service.recommend("mecha anime", 10).await;
    assert_eq!(result.llm_response, GENERATION_APOLOGY);
}

#[tokio::test]
async fn no_matches_degrades_to_no_match_apology() {
    let service = service(ScriptedEmbedding::ok(), ScriptedStore::empty());
    let result = service.recommend("mecha anime", 10).await;
    assert_eq!(result.llm_response, NO_MATCHES_APOLOGY);
    assert!(result.source_animes.is_empty());
}

#[tokio::test]
async fn search_failure_is_treated_as_no_matches() {
    let service = service(ScriptedEmbedding::ok(), ScriptedStore::failing());
    let result = service.recommend("mecha anime", 10).await;
    assert_eq!(result.llm_response, NO_MATCHES_APOLOGY);
}

#[tokio::test]
async fn ingestion_batches_and_counts() {
    let store = Arc::new(ScriptedStore::empty());
    let ingest = IngestService::new(Arc::new(ScriptedEmbedding::ok()), store.clone())
        .with_batch_size(2);

    let animes: Vec<Anime> = (1..=5).map(|i| anime(i, "A")).collect();
    let report = ingest.run(&animes).await.unwrap();

    assert_eq!(report.inserted, 5);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.batches, 3);
}

#[tokio::test]
async fn failed_batch_is_skipped_not_fatal() {
    let store = Arc::new(ScriptedStore::empty());
    let ingest = IngestService::new(
        Arc::new(ScriptedEmbedding::failing_after(1)),
        store.clone(),
    )
    .with_batch_size(2);

    let animes: Vec<Anime> = (1..=5).map(|i| anime(i, "A")).collect();
    let report = ingest.run(&animes).await.unwrap();

    // First batch of 2 succeeds, remaining two batches fail to embed
    assert_eq!(report.inserted, 2);
    assert_eq!(report.skipped, 3);
    assert_eq!(report.batches, 3);
}

#[tokio::test]
async fn empty_csv_catalog_stops_the_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "anime_id,name,genre,type,episodes,rating,members\n").unwrap();

    let ingest = IngestService::new(
        Arc::new(ScriptedEmbedding::ok()),
        Arc::new(ScriptedStore::empty()),
    );
    let err = ingest.run_from_csv(&path).await.unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}
