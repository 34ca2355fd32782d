//! Local generator tools: fixed literal tables plus formatting.
//!
//! None of these hold mutable state beyond the shared random source in
//! [`Context`](crate::context::Context); handlers are pure or
//! randomness-seeded functions of their validated input.

pub mod dice;
pub mod emoji;
pub mod generators;
pub mod text;

use crate::error::Result;
use crate::registry::CapabilityRegistry;

/// Register every local tool, in presentation order.
pub fn register_all(registry: &mut CapabilityRegistry) -> Result<()> {
    emoji::register(registry)?;
    dice::register(registry)?;
    text::register(registry)?;
    generators::register(registry)?;
    Ok(())
}
