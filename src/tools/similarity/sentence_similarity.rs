//! Sentence similarity tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::engine::SimilarityEngine;
use crate::protocol::{McpTool, Tool};
use crate::server::{json_response, required_str};
use crate::similarity::Algorithm;
use crate::types::McpResult;

/// Aligns two sentences word by word under one algorithm
pub struct SentenceSimilarityTool {
    engine: Arc<SimilarityEngine>,
}

impl SentenceSimilarityTool {
    pub fn new(engine: Arc<SimilarityEngine>) -> Self {
        Self { engine }
    }
}

impl Tool for SentenceSimilarityTool {
    fn definition(&self) -> McpTool {
        let names: Vec<&str> = Algorithm::all().iter().map(|a| a.name()).collect();
        McpTool::new(
            "sentence_similarity",
            "Similarity of two sentences: every word pair is scored and the best matches in both directions are averaged. Returns the score, per-word resolution flags and the word-by-word matrix.",
            json!({
                "type": "object",
                "properties": {
                    "sentence1": {
                        "type": "string",
                        "description": "First sentence"
                    },
                    "sentence2": {
                        "type": "string",
                        "description": "Second sentence"
                    },
                    "algorithm": {
                        "type": "string",
                        "enum": names,
                        "description": "Word-level algorithm (default: wup)"
                    }
                },
                "required": ["sentence1", "sentence2"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let sentence1 = required_str(&params, "sentence1")?;
        let sentence2 = required_str(&params, "sentence2")?;
        let algorithm = params
            .get("algorithm")
            .and_then(Value::as_str)
            .unwrap_or(Algorithm::Wup.name());

        let result = self
            .engine
            .sentence_similarity(sentence1, sentence2, algorithm)?;
        json_response(&result)
    }
}
