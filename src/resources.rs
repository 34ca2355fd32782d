//! Dynamic resources: personalized greetings and quotes by category.

use std::sync::Arc;

use crate::context::Context;
use crate::error::{JesterError, Result};
use crate::mcp::protocol::{ReadResourceResult, ResourceContents};
use crate::registry::{CapabilityDescriptor, CapabilityRegistry, Handler};
use crate::schema::InputSchema;

/// Greeting templates; `{name}` is replaced with the URI path.
pub const GREETINGS: &[&str] = &[
    "🌟 Hello there, {name}! Ready to code today?",
    "🚀 Greetings, {name}! Let's build something amazing!",
    "✨ Hey {name}! Hope you're having a fantastic day!",
    "🎉 Welcome back, {name}! What adventure awaits us?",
];

pub const PROGRAMMING_QUOTES: &[&str] = &[
    "First, solve the problem. Then, write the code. - John Johnson",
    "Code is like humor. When you have to explain it, it's bad. - Cory House",
    "The best error message is the one that never shows up. - Thomas Fuchs",
];

pub const MOTIVATION_QUOTES: &[&str] = &[
    "The only way to do great work is to love what you do. - Steve Jobs",
    "Innovation distinguishes between a leader and a follower. - Steve Jobs",
    "Stay hungry, stay foolish. - Steve Jobs",
];

/// Extract the path part of a `scheme://path` URI.
fn uri_path<'a>(uri: &'a str, scheme: &str) -> Result<&'a str> {
    uri.strip_prefix(scheme)
        .and_then(|rest| rest.strip_prefix("://"))
        .map(|path| path.trim_start_matches('/'))
        .ok_or_else(|| JesterError::InvalidArgument(format!("invalid resource uri: {}", uri)))
}

/// Quote table for a category; unknown categories fall back to programming.
pub fn quotes_for(category: &str) -> &'static [&'static str] {
    match category {
        "motivation" => MOTIVATION_QUOTES,
        _ => PROGRAMMING_QUOTES,
    }
}

pub fn greeting_for(ctx: &Context, name: &str) -> String {
    ctx.pick(GREETINGS).replace("{name}", name)
}

pub fn register(registry: &mut CapabilityRegistry) -> Result<()> {
    registry.register(CapabilityDescriptor {
        name: "greeting".to_string(),
        title: "Personalized Greeting".to_string(),
        description: "Generate personalized greetings with fun elements".to_string(),
        schema: InputSchema::empty(),
        uri_template: Some("greeting://{name}"),
        handler: Handler::Resource(Arc::new(|ctx, uri| {
            let name = uri_path(uri, "greeting")?;
            Ok(ReadResourceResult {
                contents: vec![ResourceContents {
                    uri: uri.to_string(),
                    text: greeting_for(ctx, name),
                }],
            })
        })),
    })?;

    registry.register(CapabilityDescriptor {
        name: "quote".to_string(),
        title: "Inspirational Quotes".to_string(),
        description: "Get motivational quotes by category".to_string(),
        schema: InputSchema::empty(),
        uri_template: Some("quote://{category}"),
        handler: Handler::Resource(Arc::new(|ctx, uri| {
            let category = uri_path(uri, "quote")?;
            let quote = ctx.pick(quotes_for(category));
            Ok(ReadResourceResult {
                contents: vec![ResourceContents {
                    uri: uri.to_string(),
                    text: format!("💭 {}", quote),
                }],
            })
        })),
    })
}
