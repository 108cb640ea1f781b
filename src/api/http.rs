//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{extract::State, routing::get, routing::post, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::rest::{algorithms, sentence, similarity, synsets};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/algorithms", get(algorithms::list_algorithms))
        .route("/api/similarity", post(similarity::word_similarity))
        .route("/api/synsets/:word", get(synsets::lookup_synsets))
        .route(
            "/api/sentence-similarity",
            post(sentence::sentence_similarity),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    synsets: usize,
    literals: usize,
    loaded_at: String,
}

async fn health_check(State(state): State<Arc<AppState>>) -> Json<Health> {
    let stats = state.engine.stats();
    Json(Health {
        status: "ok",
        synsets: stats.synsets,
        literals: stats.literals,
        loaded_at: state.loaded_at.to_rfc3339(),
    })
}
