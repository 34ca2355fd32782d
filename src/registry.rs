//! Capability registry: named tools, resources, and prompts.
//!
//! Registration happens sequentially at startup, before the stdio loop
//! starts accepting calls; after that the registry is read-only.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::context::Context;
use crate::error::{JesterError, Result};
use crate::mcp::protocol::{GetPromptResult, ReadResourceResult, ToolCallResult};
use crate::schema::{InputSchema, JsonMap};

/// The three capability kinds a server can advertise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapabilityKind {
    Tool,
    Resource,
    Prompt,
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CapabilityKind::Tool => "tool",
            CapabilityKind::Resource => "resource",
            CapabilityKind::Prompt => "prompt",
        })
    }
}

pub type ToolHandler = Arc<dyn Fn(&Context, &JsonMap) -> Result<ToolCallResult> + Send + Sync>;
pub type ResourceHandler = Arc<dyn Fn(&Context, &str) -> Result<ReadResourceResult> + Send + Sync>;
pub type PromptHandler = Arc<dyn Fn(&Context, &JsonMap) -> Result<GetPromptResult> + Send + Sync>;

/// Handler function, tagged by capability kind.
#[derive(Clone)]
pub enum Handler {
    Tool(ToolHandler),
    Resource(ResourceHandler),
    Prompt(PromptHandler),
}

impl Handler {
    pub fn kind(&self) -> CapabilityKind {
        match self {
            Handler::Tool(_) => CapabilityKind::Tool,
            Handler::Resource(_) => CapabilityKind::Resource,
            Handler::Prompt(_) => CapabilityKind::Prompt,
        }
    }
}

/// One registered capability: schema plus handler.
#[derive(Clone)]
pub struct CapabilityDescriptor {
    pub name: String,
    pub title: String,
    pub description: String,
    pub schema: InputSchema,
    /// URI template for resources (e.g. `greeting://{name}`), unused for
    /// tools and prompts.
    pub uri_template: Option<&'static str>,
    pub handler: Handler,
}

impl CapabilityDescriptor {
    pub fn kind(&self) -> CapabilityKind {
        self.handler.kind()
    }
}

/// Name-to-descriptor mapping with O(1) lookup and ordered listing.
#[derive(Default)]
pub struct CapabilityRegistry {
    entries: Vec<CapabilityDescriptor>,
    index: HashMap<(CapabilityKind, String), usize>,
}

impl CapabilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a capability. Duplicate names within a kind are a
    /// programming defect and fail registration.
    pub fn register(&mut self, descriptor: CapabilityDescriptor) -> Result<()> {
        let key = (descriptor.kind(), descriptor.name.clone());
        if self.index.contains_key(&key) {
            return Err(JesterError::Registration(format!(
                "duplicate {} name: {}",
                descriptor.kind(),
                descriptor.name
            )));
        }
        self.index.insert(key, self.entries.len());
        self.entries.push(descriptor);
        Ok(())
    }

    pub fn lookup(&self, kind: CapabilityKind, name: &str) -> Option<&CapabilityDescriptor> {
        self.index
            .get(&(kind, name.to_string()))
            .map(|&i| &self.entries[i])
    }

    /// All capabilities of a kind, in registration order.
    pub fn list(&self, kind: CapabilityKind) -> impl Iterator<Item = &CapabilityDescriptor> {
        self.entries.iter().filter(move |d| d.kind() == kind)
    }

    pub fn has(&self, kind: CapabilityKind) -> bool {
        self.entries.iter().any(|d| d.kind() == kind)
    }
}
