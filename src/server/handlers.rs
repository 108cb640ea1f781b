//! Helpers for `tools/call` payloads

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::types::McpResult;

/// `arguments` of a tool call, or an empty object
pub fn extract_arguments(params: &Value) -> Value {
    params
        .get("arguments")
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()))
}

pub fn extract_tool_name(params: &Value) -> Option<&str> {
    params.get("name").and_then(Value::as_str)
}

/// Tool result with a single text block
pub fn text_response(text: String) -> Value {
    json!({
        "content": [{
            "type": "text",
            "text": text
        }]
    })
}

/// Tool result carrying pretty-printed JSON
pub fn json_response<T: Serialize>(value: &T) -> McpResult<Value> {
    Ok(text_response(serde_json::to_string_pretty(value)?))
}

/// Tool-level failure, reported in the result rather than as a protocol error
pub fn error_response(message: String) -> Value {
    json!({
        "content": [{
            "type": "text",
            "text": format!("Error: {}", message)
        }],
        "isError": true
    })
}

/// Required string argument
pub fn required_str<'a>(params: &'a Value, key: &str) -> McpResult<&'a str> {
    params
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| format!("missing string argument '{}'", key).into())
}
