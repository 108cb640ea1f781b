//! Synset lookup tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::engine::SimilarityEngine;
use crate::protocol::{McpTool, Tool};
use crate::server::{json_response, required_str};
use crate::types::McpResult;

pub struct LookupSynsetsTool {
    engine: Arc<SimilarityEngine>,
}

impl LookupSynsetsTool {
    pub fn new(engine: Arc<SimilarityEngine>) -> Self {
        Self { engine }
    }
}

impl Tool for LookupSynsetsTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "lookup_synsets",
            "List the candidate synsets of a word (after lemmatization) in sense order, with literals, part of speech and definition.",
            json!({
                "type": "object",
                "properties": {
                    "word": {
                        "type": "string",
                        "description": "Word, optionally annotated as lemma#pos#sense"
                    }
                },
                "required": ["word"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let word = required_str(&params, "word")?;
        json_response(&self.engine.lookup_synsets(word)?)
    }
}
