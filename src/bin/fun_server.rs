//! Jester fun MCP server
//!
//! A playful stdio server with emoji, dice, text, and generator tools,
//! greeting/quote resources, and prompt templates.
//!
//! Run with: jester-fun

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jester::context::Context;
use jester::error::Result;
use jester::mcp::{McpServer, RegistryHandler};
use jester::registry::CapabilityRegistry;
use jester::{prompts, resources, tools};

#[derive(Parser, Debug)]
#[command(name = "jester-fun")]
#[command(about = "Playful MCP server with local tools, resources, and prompts")]
struct Args {
    /// Seed the random source for reproducible output
    #[arg(long, env = "JESTER_SEED")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Initialize logging to stderr (stdout is for MCP protocol)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let context = match args.seed {
        Some(seed) => Context::with_seed(seed),
        None => Context::new(),
    };

    let mut registry = CapabilityRegistry::new();
    tools::register_all(&mut registry)?;
    resources::register(&mut registry)?;
    prompts::register(&mut registry)?;

    let handler = RegistryHandler::new("fun-server", Arc::new(registry), Arc::new(context));
    let server = McpServer::new(handler);

    tracing::info!("Fun MCP server running on stdio");
    server.run()?;

    Ok(())
}
