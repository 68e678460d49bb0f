//! Shared server state

use std::sync::Arc;

use anr_application::RecommendationService;

/// State managed by Rocket and shared across handlers
pub struct ServerState {
    /// Serving pipeline
    pub recommendation_service: Arc<RecommendationService>,
}

impl ServerState {
    /// Create server state around the serving pipeline
    pub fn new(recommendation_service: Arc<RecommendationService>) -> Self {
        Self {
            recommendation_service,
        }
    }
}
