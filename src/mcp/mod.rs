//! MCP (Model Context Protocol) server implementation
//!
//! JSON-RPC over stdio for AI tool integration.

pub mod handler;
pub mod protocol;

pub use handler::RegistryHandler;
pub use protocol::{
    methods, Content, GetPromptResult, InitializeResult, McpHandler, McpRequest, McpResponse,
    McpServer, PromptMessage, ReadResourceResult, ResourceContents, ToolCallResult,
};
