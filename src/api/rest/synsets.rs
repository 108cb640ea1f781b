//! Synset lookup endpoint

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use super::{failure, ApiFailure};
use crate::api::AppState;
use crate::types::WordSynsets;

/// GET /api/synsets/:word - Candidate synsets in sense order
pub async fn lookup_synsets(
    State(state): State<Arc<AppState>>,
    Path(word): Path<String>,
) -> Result<Json<WordSynsets>, ApiFailure> {
    // Clients that double-encode diacritics or '#' still resolve
    let word = urlencoding::decode(&word)
        .unwrap_or_else(|_| word.clone().into())
        .into_owned();
    state.engine.lookup_synsets(&word).map(Json).map_err(failure)
}
