//! Dice rolling and bounded random numbers.

use std::sync::Arc;

use serde_json::Value;

use crate::context::Context;
use crate::error::{JesterError, Result};
use crate::mcp::protocol::ToolCallResult;
use crate::registry::{CapabilityDescriptor, CapabilityRegistry, Handler};
use crate::schema::{FieldSpec, InputSchema};

/// Dice expression pattern, e.g. `2d6`.
pub const DICE_PATTERN: &str = r"^\d+d\d+$";

pub const MAX_DICE_COUNT: i64 = 100;
pub const MAX_DICE_SIDES: i64 = 1000;

/// Parsed dice expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceSpec {
    pub count: i64,
    pub sides: i64,
}

/// Parse and bound-check a `<count>d<sides>` expression.
///
/// The pattern guarantees two integer halves; bounds keep degenerate
/// expressions like `2d0` or absurd counts out.
pub fn parse_dice(expr: &str) -> Result<DiceSpec> {
    let (count, sides) = expr
        .split_once('d')
        .and_then(|(c, s)| Some((c.parse::<i64>().ok()?, s.parse::<i64>().ok()?)))
        .ok_or_else(|| {
            JesterError::InvalidArgument(format!("dice must match pattern {}", DICE_PATTERN))
        })?;
    if !(1..=MAX_DICE_COUNT).contains(&count) {
        return Err(JesterError::InvalidArgument(format!(
            "dice count must be between 1 and {}",
            MAX_DICE_COUNT
        )));
    }
    if !(2..=MAX_DICE_SIDES).contains(&sides) {
        return Err(JesterError::InvalidArgument(format!(
            "dice must have between 2 and {} sides",
            MAX_DICE_SIDES
        )));
    }
    Ok(DiceSpec { count, sides })
}

/// Roll the dice and format the result line.
pub fn roll(ctx: &Context, expr: &str) -> Result<String> {
    let spec = parse_dice(expr)?;
    let rolls: Vec<i64> = (0..spec.count).map(|_| ctx.range(1, spec.sides)).collect();
    let sum: i64 = rolls.iter().sum();
    let rolls: Vec<String> = rolls.iter().map(i64::to_string).collect();
    Ok(format!(
        "🎲 Rolled {}: [{}] = {}",
        expr,
        rolls.join(", "),
        sum
    ))
}

pub fn register(registry: &mut CapabilityRegistry) -> Result<()> {
    registry.register(CapabilityDescriptor {
        name: "roll_dice".to_string(),
        title: "Dice Roller".to_string(),
        description: "Roll dice (format: 2d6 for 2 six-sided dice)".to_string(),
        schema: InputSchema::new(vec![FieldSpec::string("dice")
            .pattern(DICE_PATTERN)
            .describe("Dice expression, e.g. 2d6")]),
        uri_template: None,
        handler: Handler::Tool(Arc::new(|ctx, args| {
            let expr = args.get("dice").and_then(Value::as_str).unwrap_or_default();
            Ok(ToolCallResult::text(roll(ctx, expr)?))
        })),
    })?;

    registry.register(CapabilityDescriptor {
        name: "random_number".to_string(),
        title: "Random Number".to_string(),
        description: "Generate random number between min and max".to_string(),
        schema: InputSchema::new(vec![
            FieldSpec::integer("min"),
            FieldSpec::integer("max"),
        ]),
        uri_template: None,
        handler: Handler::Tool(Arc::new(|ctx, args| {
            let min = args.get("min").and_then(Value::as_i64).unwrap_or_default();
            let max = args.get("max").and_then(Value::as_i64).unwrap_or_default();
            if min > max {
                return Err(JesterError::InvalidArgument(
                    "min must be less than or equal to max".to_string(),
                ));
            }
            Ok(ToolCallResult::text(format!(
                "🔢 Random: {}",
                ctx.range(min, max)
            )))
        })),
    })
}
