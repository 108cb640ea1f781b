//! Algorithm catalogue tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::engine::SimilarityEngine;
use crate::protocol::{McpTool, Tool};
use crate::server::json_response;
use crate::types::McpResult;

pub struct ListAlgorithmsTool {
    engine: Arc<SimilarityEngine>,
}

impl ListAlgorithmsTool {
    pub fn new(engine: Arc<SimilarityEngine>) -> Self {
        Self { engine }
    }
}

impl Tool for ListAlgorithmsTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "list_algorithms",
            "Describe the available similarity algorithms and their score ranges.",
            json!({
                "type": "object",
                "properties": {}
            }),
        )
    }

    fn execute(&self, _params: Value) -> McpResult<Value> {
        json_response(&json!({ "algorithms": self.engine.algorithms() }))
    }
}
