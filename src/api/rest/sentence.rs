//! Sentence similarity endpoint

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;

use super::{failure, ApiFailure};
use crate::api::AppState;
use crate::similarity::Algorithm;
use crate::types::SentenceSimilarity;

#[derive(Debug, Deserialize)]
pub struct SentencePair {
    pub sentence1: String,
    pub sentence2: String,
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

fn default_algorithm() -> String {
    Algorithm::Wup.name().to_string()
}

/// POST /api/sentence-similarity
pub async fn sentence_similarity(
    State(state): State<Arc<AppState>>,
    Json(pair): Json<SentencePair>,
) -> Result<Json<SentenceSimilarity>, ApiFailure> {
    state
        .engine
        .sentence_similarity(&pair.sentence1, &pair.sentence2, &pair.algorithm)
        .map(Json)
        .map_err(failure)
}
