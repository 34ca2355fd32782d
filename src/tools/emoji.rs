//! Emoji tools: word-to-emoji conversion and random emoji generation.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::error::Result;
use crate::mcp::protocol::ToolCallResult;
use crate::registry::{CapabilityDescriptor, CapabilityRegistry, Handler};
use crate::schema::{FieldSpec, InputSchema};

/// Word replacements applied by `emoji_convert`.
pub const EMOJI_MAP: &[(&str, &str)] = &[
    ("happy", "😄"),
    ("sad", "😢"),
    ("love", "❤️"),
    ("fire", "🔥"),
    ("star", "⭐"),
    ("cat", "🐱"),
    ("dog", "🐶"),
    ("pizza", "🍕"),
    ("coffee", "☕"),
    ("rocket", "🚀"),
];

/// Face pool for `random_emoji`.
pub const EMOJIS: &[&str] = &[
    "😀", "😃", "😄", "😁", "😆", "😅", "🤣", "😂", "🙂", "🙃", "😉", "😊", "😇", "🥰", "😍",
    "🤩", "😘", "😗", "☺️", "😚", "😙", "🥲", "😋", "😛", "😜", "🤪", "😝", "🤑", "🤗", "🤭",
    "🤫", "🤔", "🤐", "🤨", "😐", "😑", "😶", "😏", "😒", "🙄", "😬", "🤥", "😌", "😔", "😪",
    "🤤", "😴", "😷", "🤒", "🤕", "🤢", "🤮", "🤧", "🥵", "🥶", "🥴", "😵", "🤯", "🤠", "🥳",
    "🥸", "😎", "🤓", "🧐",
];

/// Lowercase the input and replace known words with their emoji.
pub fn convert(text: &str) -> String {
    text.to_lowercase()
        .split(' ')
        .map(|word| {
            EMOJI_MAP
                .iter()
                .find(|(key, _)| *key == word)
                .map_or(word, |(_, emoji)| *emoji)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn register(registry: &mut CapabilityRegistry) -> Result<()> {
    registry.register(CapabilityDescriptor {
        name: "emoji_convert".to_string(),
        title: "Emoji Converter".to_string(),
        description: "Convert text to emoji representation".to_string(),
        schema: InputSchema::new(vec![FieldSpec::string("text")]),
        uri_template: None,
        handler: Handler::Tool(Arc::new(|_ctx, args| {
            let text = args.get("text").and_then(Value::as_str).unwrap_or_default();
            Ok(ToolCallResult::text(convert(text)))
        })),
    })?;

    registry.register(CapabilityDescriptor {
        name: "random_emoji".to_string(),
        title: "Random Emoji".to_string(),
        description: "Generate random emojis".to_string(),
        schema: InputSchema::new(vec![FieldSpec::integer("count")
            .range(1, 10)
            .default_value(json!(3))]),
        uri_template: None,
        handler: Handler::Tool(Arc::new(|ctx, args| {
            let count = args.get("count").and_then(Value::as_i64).unwrap_or(3);
            let selected: Vec<&str> = (0..count).map(|_| *ctx.pick(EMOJIS)).collect();
            Ok(ToolCallResult::text(selected.join(" ")))
        })),
    })
}
