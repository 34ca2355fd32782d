//! Jester web-search MCP server
//!
//! Exposes a single `web_search` tool that relays the query to an
//! OpenAI-compatible completion endpoint. Requires `OPENAI_API_KEY`.
//!
//! Run with: jester-search

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jester::config::Config;
use jester::context::Context;
use jester::error::Result;
use jester::mcp::{McpServer, RegistryHandler};
use jester::registry::CapabilityRegistry;
use jester::search::{self, OpenAIClient, OPENAI_BASE_URL};

#[derive(Parser, Debug)]
#[command(name = "jester-search")]
#[command(about = "Web search MCP server backed by an OpenAI completion endpoint")]
struct Args {
    /// OpenAI-compatible API base URL
    #[arg(long, env = "OPENAI_BASE_URL", default_value = OPENAI_BASE_URL)]
    base_url: String,
}

#[tokio::main]
async fn main() {
    // Initialize logging to stderr (stdout is for MCP protocol)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run().await {
        tracing::error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();

    let config = Config::load()?;
    let client = Arc::new(OpenAIClient::with_base_url(&config, args.base_url));

    let mut registry = CapabilityRegistry::new();
    search::register(&mut registry, client)?;

    let handler = RegistryHandler::new("web-search-mcp", Arc::new(registry), Arc::new(Context::new()));
    let server = McpServer::new(handler);

    tracing::info!("Web search MCP server running on stdio");
    // The stdio loop blocks; completion calls re-enter the runtime through
    // block_in_place, so run the loop on a blocking-tolerant thread.
    tokio::task::block_in_place(|| server.run())?;

    Ok(())
}
