//! Text transformation tool.

use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::mcp::protocol::ToolCallResult;
use crate::registry::{CapabilityDescriptor, CapabilityRegistry, Handler};
use crate::schema::{FieldSpec, InputSchema};

/// Supported transform names, in the order they are advertised.
pub const TRANSFORMS: &[&str] = &["reverse", "upper", "lower", "leet", "alternating"];

/// Apply a named transform; unknown names pass the text through unchanged
/// (the schema rejects them before this is reached).
pub fn apply(text: &str, transform: &str) -> String {
    match transform {
        "reverse" => text.chars().rev().collect(),
        "upper" => text.to_uppercase(),
        "lower" => text.to_lowercase(),
        // Only the a/e/i/o vowels change; u stays as-is.
        "leet" => text
            .chars()
            .map(|c| match c {
                'a' | 'A' => '4',
                'e' | 'E' => '3',
                'i' | 'I' => '1',
                'o' | 'O' => '0',
                other => other,
            })
            .collect(),
        "alternating" => {
            let mut out = String::with_capacity(text.len());
            for (i, c) in text.chars().enumerate() {
                if i % 2 == 0 {
                    out.extend(c.to_uppercase());
                } else {
                    out.extend(c.to_lowercase());
                }
            }
            out
        }
        _ => text.to_string(),
    }
}

pub fn register(registry: &mut CapabilityRegistry) -> Result<()> {
    registry.register(CapabilityDescriptor {
        name: "text_transform".to_string(),
        title: "Text Transformer".to_string(),
        description: "Transform text (reverse, uppercase, lowercase, leetspeak)".to_string(),
        schema: InputSchema::new(vec![
            FieldSpec::string("text"),
            FieldSpec::enumeration("transform", TRANSFORMS),
        ]),
        uri_template: None,
        handler: Handler::Tool(Arc::new(|_ctx, args| {
            let text = args.get("text").and_then(Value::as_str).unwrap_or_default();
            let transform = args
                .get("transform")
                .and_then(Value::as_str)
                .unwrap_or_default();
            Ok(ToolCallResult::text(format!(
                "✨ {}: {}",
                transform,
                apply(text, transform)
            )))
        })),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_reverse() {
        assert_eq!(apply("abc def", "reverse"), "fed cba");
    }

    #[test]
    fn test_upper_and_lower() {
        assert_eq!(apply("MiXeD", "upper"), "MIXED");
        assert_eq!(apply("MiXeD", "lower"), "mixed");
    }

    #[test]
    fn test_leet_leaves_u_alone() {
        assert_eq!(apply("aeiou AEIOU", "leet"), "4310u 4310U");
    }

    #[test]
    fn test_alternating_starts_uppercase() {
        assert_eq!(apply("banana", "alternating"), "BaNaNa");
    }
}
