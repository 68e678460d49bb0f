//! Ingestion configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use anr_domain::constants::DEFAULT_BATCH_SIZE;

/// Catalog ingestion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Default CSV catalog path used when the CLI gives none
    pub catalog_path: Option<PathBuf>,

    /// Records embedded and inserted per batch
    pub batch_size: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}
