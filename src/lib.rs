//! Jester - playful MCP servers
//!
//! Two JSON-RPC-over-stdio servers built on a shared capability registry:
//! `jester-fun` exposes purely local tools, resources, and prompt templates,
//! and `jester-search` relays a `web_search` query to an OpenAI-compatible
//! completion endpoint.

pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod mcp;
pub mod prompts;
pub mod registry;
pub mod resources;
pub mod schema;
pub mod search;
pub mod tools;

pub use error::{JesterError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
