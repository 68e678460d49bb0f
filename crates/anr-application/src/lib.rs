//! Application layer for the anime recommendation service
//!
//! Use cases (recommendation orchestration, catalog ingestion), the pure
//! prompt builder, and the linkme-based provider registries through which
//! the infrastructure layer resolves concrete adapters.

pub mod catalog;
pub mod ingest;
pub mod prompt;
pub mod recommender;
pub mod registry;

pub use ingest::{IngestReport, IngestService};
pub use prompt::PromptBuilder;
pub use recommender::RecommendationService;
