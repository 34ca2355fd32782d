//! Registry-backed MCP request handler.
//!
//! Adapts a [`CapabilityRegistry`] plus [`Dispatcher`] to the transport's
//! [`McpHandler`] trait: list methods enumerate the registry in registration
//! order, call methods go through the dispatcher, and only the capability
//! kinds actually registered are advertised.

use std::sync::Arc;

use serde_json::json;

use crate::context::Context;
use crate::dispatch::{Dispatcher, InvocationRequest};
use crate::registry::{CapabilityKind, CapabilityRegistry};

use super::protocol::{
    methods, InitializeResult, McpHandler, McpRequest, McpResponse, PromptArgument,
    PromptDefinition, PromptsCapability, ResourceDefinition, ResourcesCapability,
    ServerCapabilities, ServerInfo, ToolDefinition, ToolsCapability, PROTOCOL_VERSION,
};

pub struct RegistryHandler {
    registry: Arc<CapabilityRegistry>,
    dispatcher: Dispatcher,
    server_name: String,
}

impl RegistryHandler {
    pub fn new(
        server_name: impl Into<String>,
        registry: Arc<CapabilityRegistry>,
        context: Arc<Context>,
    ) -> Self {
        Self {
            dispatcher: Dispatcher::new(Arc::clone(&registry), context),
            registry,
            server_name: server_name.into(),
        }
    }

    fn initialize_result(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: self
                    .registry
                    .has(CapabilityKind::Tool)
                    .then_some(ToolsCapability {
                        list_changed: false,
                    }),
                resources: self
                    .registry
                    .has(CapabilityKind::Resource)
                    .then_some(ResourcesCapability {
                        subscribe: false,
                        list_changed: false,
                    }),
                prompts: self
                    .registry
                    .has(CapabilityKind::Prompt)
                    .then_some(PromptsCapability {
                        list_changed: false,
                    }),
            },
            server_info: ServerInfo {
                name: self.server_name.clone(),
                version: crate::VERSION.to_string(),
            },
        }
    }

    fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.registry
            .list(CapabilityKind::Tool)
            .map(|d| ToolDefinition {
                name: d.name.clone(),
                description: d.description.clone(),
                input_schema: d.schema.to_json_schema(),
            })
            .collect()
    }

    fn resource_definitions(&self) -> Vec<ResourceDefinition> {
        self.registry
            .list(CapabilityKind::Resource)
            .map(|d| ResourceDefinition {
                name: d.name.clone(),
                title: d.title.clone(),
                description: d.description.clone(),
                uri_template: d.uri_template.unwrap_or_default().to_string(),
            })
            .collect()
    }

    fn prompt_definitions(&self) -> Vec<PromptDefinition> {
        self.registry
            .list(CapabilityKind::Prompt)
            .map(|d| PromptDefinition {
                name: d.name.clone(),
                description: d.description.clone(),
                arguments: d
                    .schema
                    .fields()
                    .iter()
                    .map(|f| PromptArgument {
                        name: f.name.to_string(),
                        description: f.description.map(str::to_string),
                        required: f.required,
                    })
                    .collect(),
            })
            .collect()
    }
}

impl McpHandler for RegistryHandler {
    fn handle_request(&self, request: McpRequest) -> McpResponse {
        match request.method.as_str() {
            methods::INITIALIZE => {
                McpResponse::success(request.id, json!(self.initialize_result()))
            }
            methods::INITIALIZED => {
                // Notification, no response needed
                McpResponse::success(request.id, json!({}))
            }
            methods::LIST_TOOLS => {
                McpResponse::success(request.id, json!({"tools": self.tool_definitions()}))
            }
            methods::CALL_TOOL => {
                let name = request
                    .params
                    .get("name")
                    .and_then(|v| v.as_str())
                    .unwrap_or("")
                    .to_string();
                let arguments = request
                    .params
                    .get("arguments")
                    .cloned()
                    .unwrap_or(json!({}));

                let result = self
                    .dispatcher
                    .dispatch(InvocationRequest { name, arguments });
                McpResponse::success(request.id, json!(result.into_wire()))
            }
            methods::LIST_RESOURCES => {
                McpResponse::success(request.id, json!({"resources": self.resource_definitions()}))
            }
            methods::READ_RESOURCE => {
                let uri = request
                    .params
                    .get("uri")
                    .and_then(|v| v.as_str())
                    .unwrap_or("");
                match self.dispatcher.read_resource(uri) {
                    Ok(result) => McpResponse::success(request.id, json!(result)),
                    Err(e) => McpResponse::from_error(request.id, e),
                }
            }
            methods::LIST_PROMPTS => {
                McpResponse::success(request.id, json!({"prompts": self.prompt_definitions()}))
            }
            methods::GET_PROMPT => {
                let name = request
                    .params
                    .get("name")
                    .and_then(|v| v.as_str())
                    .unwrap_or("");
                let arguments = request
                    .params
                    .get("arguments")
                    .cloned()
                    .unwrap_or(json!({}));
                match self.dispatcher.get_prompt(name, &arguments) {
                    Ok(result) => McpResponse::success(request.id, json!(result)),
                    Err(e) => McpResponse::from_error(request.id, e),
                }
            }
            _ => McpResponse::error(
                request.id,
                -32601,
                format!("Method not found: {}", request.method),
            ),
        }
    }
}
