//! HTTP route handlers
//!
//! The boundary layer owns HTTP status decisions: the orchestrator always
//! returns a `Recommendation`, and these handlers decide whether that
//! maps to 200, 404, or an error response.

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Request, State, catch, get, post};
use tracing::info;
use validator::Validate;

use crate::models::{ErrorResponse, HealthResponse, RecommendRequest, RecommendResponse, RootResponse};
use crate::state::ServerState;

/// Service info
///
/// GET /
#[get("/")]
pub fn root() -> Json<RootResponse> {
    Json(RootResponse {
        service: "anime-recommender".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        message: "POST /recommend with {\"query\": \"...\", \"n_results\": 10}".to_string(),
    })
}

/// Health check with provider and index status
///
/// GET /health
#[get("/health")]
pub async fn health(state: &State<ServerState>) -> Json<HealthResponse> {
    let service = &state.recommendation_service;
    let (embedding, vector_store, generation) = service.provider_names();
    Json(HealthResponse {
        status: "ok".to_string(),
        embedding_provider: embedding,
        vector_store_provider: vector_store,
        generation_provider: generation,
        collection: service.collection().to_string(),
        indexed_count: service.indexed_count().await,
    })
}

/// Generate a recommendation for a free-text query
///
/// POST /recommend
///
/// Returns 400 when the request fails validation, 404 when the pipeline
/// could not produce usable recommendation text, 200 otherwise.
#[post("/recommend", format = "json", data = "<request>")]
pub async fn recommend(
    state: &State<ServerState>,
    request: Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, (Status, Json<ErrorResponse>)> {
    if let Err(errors) = request.validate() {
        return Err((
            Status::BadRequest,
            Json(ErrorResponse::new(format_validation_errors(&errors))),
        ));
    }

    let n_results = request.n_results_or_default();
    info!(query = %request.query, n_results, "Recommendation requested");

    let recommendation = state
        .recommendation_service
        .recommend(&request.query, n_results)
        .await;

    if !recommendation.is_usable() {
        return Err((
            Status::NotFound,
            Json(ErrorResponse::new("No recommendation available")),
        ));
    }

    Ok(Json(RecommendResponse::from(recommendation)))
}

fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map_or_else(|| format!("Invalid value for '{field}'"), ToString::to_string)
            })
        })
        .collect();
    messages.join("; ")
}

/// Catcher for malformed or unparseable request bodies
#[catch(422)]
pub fn unprocessable(_req: &Request<'_>) -> (Status, Json<ErrorResponse>) {
    (
        Status::BadRequest,
        Json(ErrorResponse::new("Malformed request body")),
    )
}

/// Catcher for bad requests
#[catch(400)]
pub fn bad_request(_req: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Bad request"))
}

/// Catcher for unknown routes
#[catch(404)]
pub fn not_found(req: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(format!(
        "Resource not found: {}",
        req.uri()
    )))
}

/// Catcher for unexpected failures
///
/// Deliberately carries no detail: internal errors are logged, not leaked.
#[catch(500)]
pub fn internal_error(_req: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Internal server error"))
}
