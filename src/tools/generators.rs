//! Joke and magic 8-ball generators.

use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::mcp::protocol::ToolCallResult;
use crate::registry::{CapabilityDescriptor, CapabilityRegistry, Handler};
use crate::schema::{FieldSpec, InputSchema};

pub const JOKES: &[&str] = &[
    "Why do programmers prefer dark mode? Because light attracts bugs! 🐛",
    "How many programmers does it take to change a light bulb? None, that's a hardware problem! 💡",
    "Why don't programmers like nature? It has too many bugs! 🌿🐛",
    "What's a programmer's favorite hangout place? Foo Bar! 🍺",
    "Why did the programmer quit his job? He didn't get arrays! 📊",
];

pub const EIGHT_BALL_ANSWERS: &[&str] = &[
    "Yes definitely!",
    "It is certain",
    "Most likely",
    "Outlook good",
    "Signs point to yes",
    "Reply hazy, try again",
    "Ask again later",
    "Better not tell you now",
    "Cannot predict now",
    "Concentrate and ask again",
    "Don't count on it",
    "My reply is no",
    "My sources say no",
    "Outlook not so good",
    "Very doubtful",
];

pub fn register(registry: &mut CapabilityRegistry) -> Result<()> {
    registry.register(CapabilityDescriptor {
        name: "generate_joke".to_string(),
        title: "Joke Generator".to_string(),
        description: "Generate a random programming joke".to_string(),
        schema: InputSchema::empty(),
        uri_template: None,
        handler: Handler::Tool(Arc::new(|ctx, _args| {
            Ok(ToolCallResult::text(format!("😄 {}", ctx.pick(JOKES))))
        })),
    })?;

    registry.register(CapabilityDescriptor {
        name: "magic_8ball".to_string(),
        title: "Magic 8-Ball".to_string(),
        description: "Ask the magic 8-ball a yes/no question".to_string(),
        schema: InputSchema::new(vec![FieldSpec::string("question")]),
        uri_template: None,
        handler: Handler::Tool(Arc::new(|ctx, args| {
            let question = args
                .get("question")
                .and_then(Value::as_str)
                .unwrap_or_default();
            Ok(ToolCallResult::text(format!(
                "🎱 Question: {}\n🔮 Answer: {}",
                question,
                ctx.pick(EIGHT_BALL_ANSWERS)
            )))
        })),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;

    #[test]
    fn test_joke_pick_stays_in_table() {
        let ctx = Context::new();
        for _ in 0..20 {
            assert!(JOKES.contains(ctx.pick(JOKES)));
        }
    }

    #[test]
    fn test_answer_tables_are_nonempty() {
        assert_eq!(JOKES.len(), 5);
        assert_eq!(EIGHT_BALL_ANSWERS.len(), 15);
    }
}
