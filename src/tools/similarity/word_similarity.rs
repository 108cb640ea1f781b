//! Word similarity tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::engine::SimilarityEngine;
use crate::protocol::{McpTool, Tool};
use crate::server::{json_response, required_str};
use crate::types::McpResult;

/// Scores two words with every algorithm
pub struct WordSimilarityTool {
    engine: Arc<SimilarityEngine>,
}

impl WordSimilarityTool {
    pub fn new(engine: Arc<SimilarityEngine>) -> Self {
        Self { engine }
    }
}

impl Tool for WordSimilarityTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "word_similarity",
            "Semantic similarity of two words under all eight algorithms (PATH, WUP, LCH, RES, JCN, LIN, LESK, HSO), with the best synset pair and candidate synsets of each word.",
            json!({
                "type": "object",
                "properties": {
                    "word1": {
                        "type": "string",
                        "description": "First word, optionally annotated as lemma#pos#sense (e.g. câine#n#1)"
                    },
                    "word2": {
                        "type": "string",
                        "description": "Second word, optionally annotated as lemma#pos#sense"
                    }
                },
                "required": ["word1", "word2"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let word1 = required_str(&params, "word1")?;
        let word2 = required_str(&params, "word2")?;
        let result = self.engine.word_similarity(word1, word2)?;
        json_response(&result)
    }
}
