//! Integration tests for capability dispatch and the MCP handler surface.
//!
//! Run with: cargo test --test dispatch_tests

use std::sync::Arc;

use serde_json::{json, Value};

use jester::context::Context;
use jester::dispatch::{Dispatcher, InvocationRequest};
use jester::error::{JesterError, Result};
use jester::mcp::protocol::Content;
use jester::mcp::{McpHandler, McpRequest, McpServer, RegistryHandler};
use jester::registry::CapabilityRegistry;
use jester::search::{self, CompletionProvider};
use jester::{prompts, resources, tools};

// ============================================================================
// WEB SEARCH DISPATCH
// ============================================================================

mod web_search {
    use super::*;

    /// Scripted stand-in for the OpenAI client.
    struct MockProvider {
        response: std::result::Result<String, String>,
    }

    impl MockProvider {
        fn ok(text: &str) -> Arc<Self> {
            Arc::new(Self {
                response: Ok(text.to_string()),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                response: Err(message.to_string()),
            })
        }
    }

    impl CompletionProvider for MockProvider {
        fn complete(&self, _query: &str) -> Result<String> {
            match &self.response {
                Ok(text) => Ok(text.clone()),
                Err(message) => Err(JesterError::Provider(message.clone())),
            }
        }
    }

    fn search_dispatcher(provider: Arc<dyn CompletionProvider>) -> Dispatcher {
        let mut registry = CapabilityRegistry::new();
        search::register(&mut registry, provider).unwrap();
        Dispatcher::new(Arc::new(registry), Arc::new(Context::with_seed(0)))
    }

    fn call(dispatcher: &Dispatcher, arguments: Value) -> jester::mcp::ToolCallResult {
        dispatcher
            .dispatch(InvocationRequest {
                name: "web_search".to_string(),
                arguments,
            })
            .into_wire()
    }

    fn text_of(result: &jester::mcp::ToolCallResult) -> &str {
        let Content::Text { text } = &result.content[0];
        text
    }

    #[test]
    fn test_valid_query_relays_provider_text() {
        let dispatcher = search_dispatcher(MockProvider::ok("Search result content"));
        let result = call(&dispatcher, json!({"query": "test query"}));
        assert_eq!(result.is_error, None);
        assert_eq!(text_of(&result), "Search result content");
    }

    #[test]
    fn test_missing_query() {
        let dispatcher = search_dispatcher(MockProvider::ok("unused"));
        let result = call(&dispatcher, json!({}));
        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            "Query parameter is required and must be a string"
        );
    }

    #[test]
    fn test_numeric_query_same_message() {
        let dispatcher = search_dispatcher(MockProvider::ok("unused"));
        let result = call(&dispatcher, json!({"query": 123}));
        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            "Query parameter is required and must be a string"
        );
    }

    #[test]
    fn test_provider_error_is_wrapped_with_search_prefix() {
        let dispatcher = search_dispatcher(MockProvider::failing("API error"));
        let result = call(&dispatcher, json!({"query": "test query"}));
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Search failed: API error");
    }

    #[test]
    fn test_unknown_tool_name() {
        let dispatcher = search_dispatcher(MockProvider::ok("unused"));
        let result = dispatcher
            .dispatch(InvocationRequest {
                name: "web_serch".to_string(),
                arguments: json!({"query": "typo"}),
            })
            .into_wire();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Unknown tool: web_serch");
    }
}

// ============================================================================
// FUN SERVER OVER THE MCP HANDLER
// ============================================================================

mod fun_server {
    use super::*;

    fn handler_with_seed(seed: u64) -> RegistryHandler {
        let mut registry = CapabilityRegistry::new();
        tools::register_all(&mut registry).unwrap();
        resources::register(&mut registry).unwrap();
        prompts::register(&mut registry).unwrap();
        RegistryHandler::new(
            "fun-server",
            Arc::new(registry),
            Arc::new(Context::with_seed(seed)),
        )
    }

    fn request(method: &str, params: Value) -> McpRequest {
        McpRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: method.to_string(),
            params,
        }
    }

    #[test]
    fn test_initialize_advertises_all_three_kinds() {
        let handler = handler_with_seed(0);
        let response = handler.handle_request(request("initialize", json!({})));
        let result = response.result.unwrap();
        assert_eq!(result["serverInfo"]["name"], "fun-server");
        assert!(!result["capabilities"]["tools"].is_null());
        assert!(!result["capabilities"]["resources"].is_null());
        assert!(!result["capabilities"]["prompts"].is_null());
    }

    #[test]
    fn test_tools_list_in_registration_order() {
        let handler = handler_with_seed(0);
        let response = handler.handle_request(request("tools/list", json!({})));
        let tools = response.result.unwrap()["tools"].clone();
        let names: Vec<&str> = tools
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec![
                "emoji_convert",
                "random_emoji",
                "roll_dice",
                "random_number",
                "text_transform",
                "generate_joke",
                "magic_8ball",
            ]
        );
    }

    #[test]
    fn test_tool_call_roundtrip() {
        let handler = handler_with_seed(0);
        let response = handler.handle_request(request(
            "tools/call",
            json!({"name": "emoji_convert", "arguments": {"text": "happy cat"}}),
        ));
        let result = response.result.unwrap();
        assert_eq!(result["content"][0]["text"], "😄 🐱");
    }

    #[test]
    fn test_tool_call_failure_keeps_server_alive() {
        let handler = handler_with_seed(0);
        let response = handler.handle_request(request(
            "tools/call",
            json!({"name": "text_transform", "arguments": {"text": "hi", "transform": "rot13"}}),
        ));
        // Failure is a result payload, not a protocol error.
        assert!(response.error.is_none());
        let result = response.result.unwrap();
        assert_eq!(result["isError"], true);
        assert_eq!(
            result["content"][0]["text"],
            "transform must be one of: reverse, upper, lower, leet, alternating"
        );
    }

    #[test]
    fn test_seeded_dice_rolls_are_reproducible() {
        let call = |handler: &RegistryHandler| {
            let response = handler.handle_request(request(
                "tools/call",
                json!({"name": "roll_dice", "arguments": {"dice": "2d6"}}),
            ));
            response.result.unwrap()["content"][0]["text"]
                .as_str()
                .unwrap()
                .to_string()
        };
        assert_eq!(call(&handler_with_seed(9)), call(&handler_with_seed(9)));
    }

    #[test]
    fn test_resources_read_greeting() {
        let handler = handler_with_seed(0);
        let response =
            handler.handle_request(request("resources/read", json!({"uri": "greeting://alice"})));
        let result = response.result.unwrap();
        assert_eq!(result["contents"][0]["uri"], "greeting://alice");
        let text = result["contents"][0]["text"].as_str().unwrap();
        assert!(text.contains("alice"));
    }

    #[test]
    fn test_resources_read_unknown_scheme_is_protocol_error() {
        let handler = handler_with_seed(0);
        let response =
            handler.handle_request(request("resources/read", json!({"uri": "mystery://x"})));
        let error = response.error.unwrap();
        assert_eq!(error.code, -32001);
        assert_eq!(error.message, "Unknown resource: mystery");
    }

    #[test]
    fn test_prompts_get_uses_default_language() {
        let handler = handler_with_seed(0);
        let response = handler.handle_request(request(
            "prompts/get",
            json!({"name": "code_review", "arguments": {"code": "let x = 1;"}}),
        ));
        let result = response.result.unwrap();
        let text = result["messages"][0]["content"]["text"].as_str().unwrap();
        assert!(text.contains("review this javascript code"));
        assert!(text.contains("let x = 1;"));
    }

    #[test]
    fn test_prompts_get_missing_required_argument() {
        let handler = handler_with_seed(0);
        let response =
            handler.handle_request(request("prompts/get", json!({"name": "code_review"})));
        let error = response.error.unwrap();
        assert_eq!(error.code, -32602);
        assert_eq!(error.message, "Code parameter is required and must be a string");
    }

    #[test]
    fn test_unknown_method() {
        let handler = handler_with_seed(0);
        let response = handler.handle_request(request("tools/uninstall", json!({})));
        let error = response.error.unwrap();
        assert_eq!(error.code, -32601);
        assert_eq!(error.message, "Method not found: tools/uninstall");
    }
}

// ============================================================================
// STDIO LOOP
// ============================================================================

mod serve_loop {
    use super::*;

    fn handler() -> RegistryHandler {
        let mut registry = CapabilityRegistry::new();
        tools::register_all(&mut registry).unwrap();
        RegistryHandler::new(
            "fun-server",
            Arc::new(registry),
            Arc::new(Context::with_seed(0)),
        )
    }

    fn serve(input: &str) -> Vec<Value> {
        let server = McpServer::new(handler());
        let mut output = Vec::new();
        server.serve(input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_one_response_per_request_line() {
        let responses = serve(
            "{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"tools/list\"}\n\
             \n\
             {\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"tools/call\",\"params\":{\"name\":\"generate_joke\"}}\n",
        );
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["id"], 1);
        assert_eq!(responses[1]["id"], 2);
        assert!(responses[1]["result"]["content"][0]["text"]
            .as_str()
            .unwrap()
            .starts_with("😄 "));
    }

    #[test]
    fn test_malformed_json_yields_parse_error_and_loop_continues() {
        let responses = serve(
            "this is not json\n\
             {\"jsonrpc\":\"2.0\",\"id\":3,\"method\":\"tools/list\"}\n",
        );
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["error"]["code"], -32700);
        assert_eq!(responses[1]["id"], 3);
    }
}
