//! Word similarity endpoint

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;

use super::{failure, ApiFailure};
use crate::api::AppState;
use crate::types::WordSimilarity;

#[derive(Debug, Deserialize)]
pub struct WordPair {
    pub word1: String,
    pub word2: String,
}

/// POST /api/similarity - Score a word pair under every algorithm
pub async fn word_similarity(
    State(state): State<Arc<AppState>>,
    Json(pair): Json<WordPair>,
) -> Result<Json<WordSimilarity>, ApiFailure> {
    state
        .engine
        .word_similarity(&pair.word1, &pair.word2)
        .map(Json)
        .map_err(failure)
}
