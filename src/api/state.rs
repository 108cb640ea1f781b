//! Shared state of the HTTP handlers

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::engine::SimilarityEngine;

pub struct AppState {
    pub engine: Arc<SimilarityEngine>,
    pub loaded_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(engine: Arc<SimilarityEngine>) -> Self {
        Self {
            engine,
            loaded_at: Utc::now(),
        }
    }
}
