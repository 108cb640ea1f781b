//! Algorithm catalogue endpoint

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::AppState;
use crate::types::AlgorithmInfo;

#[derive(Debug, Serialize)]
pub struct AlgorithmList {
    pub algorithms: Vec<AlgorithmInfo>,
}

/// GET /api/algorithms
pub async fn list_algorithms(State(state): State<Arc<AppState>>) -> Json<AlgorithmList> {
    Json(AlgorithmList {
        algorithms: state.engine.algorithms(),
    })
}
