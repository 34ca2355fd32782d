//! The `web_search` tool: schema plus relay handler.

use std::sync::Arc;

use serde_json::Value;

use crate::error::{JesterError, Result};
use crate::mcp::protocol::ToolCallResult;
use crate::registry::{CapabilityDescriptor, CapabilityRegistry, Handler};
use crate::schema::{FieldSpec, InputSchema};

use super::CompletionProvider;

pub const WEB_SEARCH_TOOL: &str = "web_search";

/// Register the `web_search` tool backed by `provider`.
pub fn register(
    registry: &mut CapabilityRegistry,
    provider: Arc<dyn CompletionProvider>,
) -> Result<()> {
    registry.register(CapabilityDescriptor {
        name: WEB_SEARCH_TOOL.to_string(),
        title: "Web Search".to_string(),
        description: "Search the web using OpenAI o3 model with reasoning capabilities. \
                      Provide a search query and get comprehensive results with analysis."
            .to_string(),
        schema: InputSchema::new(vec![FieldSpec::string("query")
            .non_empty()
            .describe("The search query to execute")]),
        uri_template: None,
        handler: Handler::Tool(Arc::new(move |_ctx, args| {
            let query = args.get("query").and_then(Value::as_str).unwrap_or_default();
            let text = provider
                .complete(query)
                .map_err(|e| JesterError::Handler(format!("Search failed: {}", e)))?;
            Ok(ToolCallResult::text(text))
        })),
    })
}
