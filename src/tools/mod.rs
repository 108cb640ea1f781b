//! MCP tools
//!
//! - Similarity tools (2): word pairs and sentence pairs
//! - Lexicon tools (2): synset lookup and the algorithm catalogue

pub mod lexicon;
pub mod similarity;

use std::sync::Arc;

use crate::engine::SimilarityEngine;
use crate::server::McpServer;

pub use lexicon::{ListAlgorithmsTool, LookupSynsetsTool};
pub use similarity::{SentenceSimilarityTool, WordSimilarityTool};

/// Register all tools with the MCP server
pub fn register_all_tools(server: &mut McpServer, engine: Arc<SimilarityEngine>) {
    server.register_tool(Box::new(WordSimilarityTool::new(engine.clone())));
    server.register_tool(Box::new(SentenceSimilarityTool::new(engine.clone())));
    server.register_tool(Box::new(LookupSynsetsTool::new(engine.clone())));
    server.register_tool(Box::new(ListAlgorithmsTool::new(engine)));
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::engine::tests::engine;

    fn server() -> McpServer {
        let mut server = McpServer::new();
        register_all_tools(&mut server, Arc::new(engine()));
        server
    }

    fn call_tool(server: &McpServer, name: &str, arguments: Value) -> Value {
        let request = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": {"name": name, "arguments": arguments}
        });
        let line = server.handle_message(&request.to_string()).unwrap().unwrap();
        let response: Value = serde_json::from_str(&line).unwrap();
        response["result"].clone()
    }

    fn payload(result: &Value) -> Value {
        serde_json::from_str(result["content"][0]["text"].as_str().unwrap()).unwrap()
    }

    #[test]
    fn test_all_tools_registered() {
        assert_eq!(server().tool_count(), 4);
    }

    #[test]
    fn test_word_similarity_tool() {
        let result = call_tool(
            &server(),
            "word_similarity",
            json!({"word1": "câine", "word2": "pisică"}),
        );
        let body = payload(&result);
        assert_eq!(body["results"].as_array().unwrap().len(), 8);
        assert_eq!(body["results"][1]["algorithm"], "WUP");
        assert_eq!(body["results"][1]["similarity"], 0.5);
    }

    #[test]
    fn test_sentence_similarity_tool_defaults_to_wup() {
        let result = call_tool(
            &server(),
            "sentence_similarity",
            json!({"sentence1": "câine", "sentence2": "câine"}),
        );
        let body = payload(&result);
        assert_eq!(body["algorithm"], "WUP");
        assert_eq!(body["similarity"], 1.0);
    }

    #[test]
    fn test_lookup_unknown_word_is_tool_error() {
        let result = call_tool(&server(), "lookup_synsets", json!({"word": "zmeu"}));
        assert_eq!(result["isError"], true);
        assert!(result["content"][0]["text"].as_str().unwrap().contains("zmeu"));
    }

    #[test]
    fn test_list_algorithms_tool() {
        let result = call_tool(&server(), "list_algorithms", json!({}));
        assert_eq!(payload(&result)["algorithms"].as_array().unwrap().len(), 8);
    }
}
