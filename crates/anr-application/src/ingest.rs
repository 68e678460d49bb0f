//! Catalog ingestion pipeline
//!
//! Offline batch job: load the catalog CSV, reset the collection, then
//! embed and insert fixed-size batches sequentially. Per-batch embedding
//! failure is warn-and-skip; there is no resumability or parallelism.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use anr_domain::constants::{DEFAULT_BATCH_SIZE, DEFAULT_COLLECTION};
use anr_domain::error::{Error, Result};
use anr_domain::ports::providers::{EmbeddingProvider, VectorStoreProvider};
use anr_domain::value_objects::Anime;

use crate::catalog::load_catalog;

/// Summary of one ingestion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestReport {
    /// Records successfully embedded and inserted
    pub inserted: usize,
    /// Records dropped because their batch failed to embed
    pub skipped: usize,
    /// Number of batches processed
    pub batches: usize,
}

/// Catalog ingestion service
///
/// Owns the embedding and vector store providers for the offline pipeline;
/// the serving path holds its own references.
pub struct IngestService {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    vector_store_provider: Arc<dyn VectorStoreProvider>,
    collection: String,
    batch_size: usize,
}

impl IngestService {
    /// Create a new ingestion service with injected providers
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        vector_store_provider: Arc<dyn VectorStoreProvider>,
    ) -> Self {
        Self {
            embedding_provider,
            vector_store_provider,
            collection: DEFAULT_COLLECTION.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Override the target collection
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Override the batch size (must be non-zero)
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Run the full pipeline from a CSV file
    pub async fn run_from_csv<P: AsRef<Path>>(&self, path: P) -> Result<IngestReport> {
        let animes = load_catalog(path)?;
        if animes.is_empty() {
            return Err(Error::validation(
                "Pipeline stopped: no valid catalog records loaded",
            ));
        }
        self.run(&animes).await
    }

    /// Embed and insert already-validated records
    ///
    /// Resets the collection first, then processes fixed-size batches
    /// sequentially. A failed batch is skipped with a warning; the run
    /// continues.
    pub async fn run(&self, animes: &[Anime]) -> Result<IngestReport> {
        let dimensions = self.embedding_provider.dimensions();
        info!(
            collection = %self.collection,
            records = animes.len(),
            dimensions,
            "Starting catalog ingestion"
        );

        self.vector_store_provider
            .reset_collection(&self.collection, dimensions)
            .await?;

        let mut report = IngestReport {
            inserted: 0,
            skipped: 0,
            batches: 0,
        };

        for batch in animes.chunks(self.batch_size) {
            report.batches += 1;
            let texts: Vec<String> = batch.iter().map(Anime::embedding_text).collect();

            let embeddings = match self.embedding_provider.embed_batch(&texts).await {
                Ok(embeddings) if embeddings.len() == batch.len() => embeddings,
                Ok(embeddings) => {
                    warn!(
                        batch = report.batches,
                        expected = batch.len(),
                        got = embeddings.len(),
                        "Skipping batch with incomplete embeddings"
                    );
                    report.skipped += batch.len();
                    continue;
                }
                Err(err) => {
                    warn!(batch = report.batches, error = %err, "Skipping batch due to embedding failure");
                    report.skipped += batch.len();
                    continue;
                }
            };

            let ids = self
                .vector_store_provider
                .insert_animes(&self.collection, batch, &embeddings)
                .await?;
            report.inserted += ids.len();
            report.skipped += batch.len() - ids.len();
        }

        self.vector_store_provider.flush(&self.collection).await?;
        info!(
            inserted = report.inserted,
            skipped = report.skipped,
            batches = report.batches,
            "Catalog ingestion complete"
        );
        Ok(report)
    }
}
