//! MCP server over newline-delimited JSON-RPC on stdio

mod handlers;

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, McpTool, ServerInfo, Tool, PROTOCOL_VERSION,
};
use crate::types::McpResult;

pub use handlers::*;

/// MCP server dispatching `tools/call` to registered tools
pub struct McpServer {
    server_info: ServerInfo,
    tools: BTreeMap<String, Box<dyn Tool>>,
}

impl McpServer {
    pub fn new() -> Self {
        Self::with_info(ServerInfo::default())
    }

    pub fn with_info(info: ServerInfo) -> Self {
        Self {
            server_info: info,
            tools: BTreeMap::new(),
        }
    }

    pub fn register_tool(&mut self, tool: Box<dyn Tool>) -> &mut Self {
        self.tools.insert(tool.name(), tool);
        self
    }

    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Serve stdin/stdout until end of input (blocking)
    pub fn run(&self) -> McpResult<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Serve one JSON-RPC message per line from `reader`
    pub fn serve<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> McpResult<()> {
        info!(tools = self.tools.len(), "mcp server listening on stdio");
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if let Some(response) = self.handle_message(trimmed)? {
                writeln!(writer, "{}", response)?;
                writer.flush()?;
            }
        }
        info!("stdin closed, mcp server stopping");
        Ok(())
    }

    /// Response line for one request; `None` for notifications
    pub fn handle_message(&self, message: &str) -> McpResult<Option<String>> {
        let request: JsonRpcRequest = match serde_json::from_str(message) {
            Ok(request) => request,
            Err(e) => return encode(&JsonRpcError::parse_error(e.to_string())).map(Some),
        };

        if !request.is_valid() {
            let id = request.id.unwrap_or(Value::Null);
            return encode(&JsonRpcError::invalid_request(id, "jsonrpc must be '2.0'")).map(Some);
        }
        if request.is_notification() {
            debug!(method = %request.method, "notification");
            return Ok(None);
        }

        let id = request.id.clone().unwrap_or(Value::Null);
        debug!(method = %request.method, "request");
        let response = match request.method.as_str() {
            "initialize" => encode(&JsonRpcResponse::new(id, self.initialize_result())),
            "tools/list" => {
                let tools: Vec<McpTool> = self.tools.values().map(|t| t.definition()).collect();
                encode(&JsonRpcResponse::new(id, json!({ "tools": tools })))
            }
            "tools/call" => self.handle_tool_call(id, request.params),
            "ping" => encode(&JsonRpcResponse::new(id, json!({}))),
            method => encode(&JsonRpcError::method_not_found(id, method)),
        };
        response.map(Some)
    }

    fn initialize_result(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": self.server_info.name,
                "version": self.server_info.version
            }
        })
    }

    fn handle_tool_call(&self, id: Value, params: Option<Value>) -> McpResult<String> {
        let Some(params) = params else {
            return encode(&JsonRpcError::invalid_params(id, "missing parameters"));
        };
        let Some(tool_name) = extract_tool_name(&params) else {
            return encode(&JsonRpcError::invalid_params(id, "missing tool name"));
        };
        let Some(tool) = self.tools.get(tool_name) else {
            return encode(&JsonRpcError::invalid_params(
                id,
                &format!("unknown tool '{}'", tool_name),
            ));
        };

        let result = match tool.execute(extract_arguments(&params)) {
            Ok(result) => result,
            Err(e) => {
                warn!(tool = tool_name, error = %e, "tool call failed");
                error_response(e.to_string())
            }
        };
        encode(&JsonRpcResponse::new(id, result))
    }
}

impl Default for McpServer {
    fn default() -> Self {
        Self::new()
    }
}

fn encode<T: Serialize>(message: &T) -> McpResult<String> {
    Ok(serde_json::to_string(message)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoTool;

    impl Tool for EchoTool {
        fn definition(&self) -> McpTool {
            McpTool::new("echo", "Echo the text argument", json!({"type": "object"}))
        }

        fn execute(&self, params: Value) -> McpResult<Value> {
            Ok(text_response(required_str(&params, "text")?.to_string()))
        }
    }

    fn server() -> McpServer {
        let mut server = McpServer::with_info(ServerInfo::new("test".into(), "0.1.0".into()));
        server.register_tool(Box::new(EchoTool));
        server
    }

    fn call(server: &McpServer, message: Value) -> Value {
        let line = server.handle_message(&message.to_string()).unwrap().unwrap();
        serde_json::from_str(&line).unwrap()
    }

    #[test]
    fn test_initialize() {
        let response = call(
            &server(),
            json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}),
        );
        assert_eq!(response["result"]["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(response["result"]["serverInfo"]["name"], "test");
    }

    #[test]
    fn test_notification_has_no_response() {
        let message = json!({"jsonrpc": "2.0", "method": "notifications/initialized"});
        assert!(server().handle_message(&message.to_string()).unwrap().is_none());
    }

    #[test]
    fn test_tools_list_and_call() {
        let server = server();
        let list = call(&server, json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}));
        assert_eq!(list["result"]["tools"][0]["name"], "echo");

        let response = call(
            &server,
            json!({"jsonrpc": "2.0", "id": 3, "method": "tools/call",
                   "params": {"name": "echo", "arguments": {"text": "salut"}}}),
        );
        assert_eq!(response["result"]["content"][0]["text"], "salut");
    }

    #[test]
    fn test_tool_failure_is_flagged() {
        let response = call(
            &server(),
            json!({"jsonrpc": "2.0", "id": 4, "method": "tools/call",
                   "params": {"name": "echo", "arguments": {}}}),
        );
        assert_eq!(response["result"]["isError"], true);
    }

    #[test]
    fn test_protocol_errors() {
        let server = server();
        let line = server.handle_message("{not json").unwrap().unwrap();
        assert!(line.contains("-32700"));

        let response = call(&server, json!({"jsonrpc": "1.0", "id": 5, "method": "ping"}));
        assert_eq!(response["error"]["code"], -32600);

        let response = call(&server, json!({"jsonrpc": "2.0", "id": 6, "method": "resources/list"}));
        assert_eq!(response["error"]["code"], -32601);

        let response = call(
            &server,
            json!({"jsonrpc": "2.0", "id": 7, "method": "tools/call", "params": {"name": "nope"}}),
        );
        assert_eq!(response["error"]["code"], -32602);
    }

    #[test]
    fn test_serve_reads_lines() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#,
            "\n\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n"
        );
        let mut output = Vec::new();
        server().serve(input.as_bytes(), &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.lines().count(), 1);
    }
}
