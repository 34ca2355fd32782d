//! Capability dispatch: lookup, validation, handler invocation, and
//! result/error normalization.
//!
//! Every per-request error is converted to a value here; nothing a handler
//! does can crash the server loop.

use std::sync::Arc;

use serde_json::Value;

use crate::context::Context;
use crate::error::{JesterError, Result};
use crate::mcp::protocol::{GetPromptResult, ReadResourceResult, ToolCallResult};
use crate::registry::{CapabilityKind, CapabilityRegistry, Handler};

/// One incoming tool call.
#[derive(Debug, Clone)]
pub struct InvocationRequest {
    pub name: String,
    pub arguments: Value,
}

/// Outcome of a dispatch, before wire conversion.
#[derive(Debug)]
pub enum InvocationResult {
    Success(ToolCallResult),
    Failure(JesterError),
}

impl InvocationResult {
    /// Convert to the MCP tool-result shape. Failures become `isError`
    /// results carrying the full message; the server keeps running.
    pub fn into_wire(self) -> ToolCallResult {
        match self {
            InvocationResult::Success(result) => result,
            InvocationResult::Failure(error) => ToolCallResult::error(error.to_string()),
        }
    }
}

/// Dispatches invocations against a read-only registry.
pub struct Dispatcher {
    registry: Arc<CapabilityRegistry>,
    context: Arc<Context>,
}

impl Dispatcher {
    pub fn new(registry: Arc<CapabilityRegistry>, context: Arc<Context>) -> Self {
        Self { registry, context }
    }

    /// Dispatch a tool call: lookup, validate, invoke, normalize.
    pub fn dispatch(&self, request: InvocationRequest) -> InvocationResult {
        let descriptor = match self.registry.lookup(CapabilityKind::Tool, &request.name) {
            Some(descriptor) => descriptor,
            None => {
                return InvocationResult::Failure(JesterError::NotFound {
                    kind: CapabilityKind::Tool,
                    name: request.name,
                })
            }
        };

        let args = match descriptor.schema.validate(&request.arguments) {
            Ok(args) => args,
            Err(error) => return InvocationResult::Failure(error),
        };

        let Handler::Tool(handler) = &descriptor.handler else {
            return InvocationResult::Failure(JesterError::Internal(format!(
                "descriptor {} is not a tool",
                request.name
            )));
        };

        match handler(&self.context, &args) {
            Ok(result) => InvocationResult::Success(result),
            // Handlers prefix their own context, e.g. "Search failed: ...";
            // the original message text is preserved verbatim.
            Err(error) => InvocationResult::Failure(error),
        }
    }

    /// Read a resource by URI; the scheme selects the registered template.
    pub fn read_resource(&self, uri: &str) -> Result<ReadResourceResult> {
        let scheme = uri.split("://").next().filter(|s| !s.is_empty() && *s != uri);
        let scheme = scheme.ok_or_else(|| {
            JesterError::InvalidArgument(format!("invalid resource uri: {}", uri))
        })?;

        let descriptor = self
            .registry
            .lookup(CapabilityKind::Resource, scheme)
            .ok_or_else(|| JesterError::NotFound {
                kind: CapabilityKind::Resource,
                name: scheme.to_string(),
            })?;

        let Handler::Resource(handler) = &descriptor.handler else {
            return Err(JesterError::Internal(format!(
                "descriptor {} is not a resource",
                scheme
            )));
        };
        handler(&self.context, uri)
    }

    /// Render a prompt template with validated arguments.
    pub fn get_prompt(&self, name: &str, arguments: &Value) -> Result<GetPromptResult> {
        let descriptor = self
            .registry
            .lookup(CapabilityKind::Prompt, name)
            .ok_or_else(|| JesterError::NotFound {
                kind: CapabilityKind::Prompt,
                name: name.to_string(),
            })?;

        let args = descriptor.schema.validate(arguments)?;

        let Handler::Prompt(handler) = &descriptor.handler else {
            return Err(JesterError::Internal(format!(
                "descriptor {} is not a prompt",
                name
            )));
        };
        handler(&self.context, &args)
    }
}
