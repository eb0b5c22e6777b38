pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::search::handlers as search;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job description generation
        .route(
            "/api/generate-description",
            post(generation::handle_generate),
        )
        .route("/api/refine-description", post(generation::handle_refine))
        .route(
            "/api/search-filters",
            post(generation::handle_search_filters),
        )
        // Candidate search
        .route(
            "/api/linkedin-filters",
            post(search::handle_filter_suggestions),
        )
        .route(
            "/api/linkedin-search",
            post(search::handle_candidate_search),
        )
        .with_state(state)
}
