//! Anime recommender entry point
//!
//! Two modes:
//!
//! - `anr serve` - run the HTTP API
//! - `anr ingest <catalog.csv>` - embed a CSV catalog into the vector store

// Force-link anr-providers so linkme registry entries are included
extern crate anr_providers;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use anr_domain::error::{Error, Result};
use anr_infrastructure::bootstrap::AppContext;
use anr_infrastructure::config::ConfigLoader;
use anr_infrastructure::logging::init_logging;

/// Command line interface for the anime recommender
#[derive(Parser, Debug)]
#[command(name = "anr")]
#[command(about = "Anime recommender - retrieval-augmented recommendation service")]
#[command(version)]
struct Cli {
    /// Path to configuration file (defaults to ./anr.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API server
    Serve,

    /// Ingest a CSV catalog into the vector store
    Ingest {
        /// Path to the catalog CSV (falls back to `ingest.catalog_path`)
        catalog: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        error!("Fatal: {err}");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(&config.logging)?;

    match cli.command {
        Command::Serve => {
            let context = AppContext::build(config)?;
            anr_server::serve(
                &context.config.server,
                Arc::clone(&context.recommendation_service),
            )
            .await
        }
        Command::Ingest { catalog } => {
            let catalog_path = catalog
                .or_else(|| config.ingest.catalog_path.clone())
                .ok_or_else(|| {
                    Error::config(
                        "No catalog path given (pass one as an argument or set ingest.catalog_path)",
                    )
                })?;

            let context = AppContext::build(config)?;
            let report = context.ingest_service.run_from_csv(&catalog_path).await?;
            info!(
                inserted = report.inserted,
                skipped = report.skipped,
                batches = report.batches,
                "Ingestion finished"
            );
            println!(
                "Ingested {} records ({} skipped) in {} batches from {}",
                report.inserted,
                report.skipped,
                report.batches,
                catalog_path.display()
            );
            Ok(())
        }
    }
}
