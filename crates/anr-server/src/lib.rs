//! HTTP API for the anime recommender
//!
//! Exposes the recommendation pipeline over Rocket:
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/` | GET | Service info |
//! | `/health` | GET | Provider and index status |
//! | `/recommend` | POST | Generate a recommendation |

// Force-link anr-providers so linkme registry entries are included
extern crate anr_providers;

use std::sync::Arc;

use rocket::{Build, Rocket, catchers, routes};
use tracing::info;

use anr_application::RecommendationService;
use anr_domain::error::{Error, Result};
use anr_infrastructure::config::ServerConfig;

pub mod models;
pub mod routes;
pub mod state;

use state::ServerState;

/// Build the Rocket application around the serving pipeline
pub fn rocket(recommendation_service: Arc<RecommendationService>) -> Rocket<Build> {
    rocket::build()
        .manage(ServerState::new(recommendation_service))
        .mount(
            "/",
            routes![routes::root, routes::health, routes::recommend],
        )
        .register(
            "/",
            catchers![
                routes::bad_request,
                routes::not_found,
                routes::unprocessable,
                routes::internal_error
            ],
        )
}

/// Start the HTTP server and block until shutdown
pub async fn serve(
    config: &ServerConfig,
    recommendation_service: Arc<RecommendationService>,
) -> Result<()> {
    info!("HTTP server listening on {}:{}", config.host, config.port);

    let figment = rocket::Config::figment()
        .merge(("address", config.host.clone()))
        .merge(("port", config.port));

    rocket(recommendation_service)
        .configure(figment)
        .launch()
        .await
        .map_err(|e| Error::internal(format!("Server failed: {e}")))?;

    Ok(())
}
