use anyhow::{Context, Result};
use clap::Parser;
use docshelf::config::{Config, Transport};
use docshelf::docs::DocStore;
use docshelf::mcp::server::{McpContext, McpServer};
use docshelf::query::QueryEngine;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Serve a markdown documentation tree over MCP.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to the JSON config file (default: docshelf.json)
    #[arg(short, long, default_value = "")]
    config: String,

    /// Documentation root; overrides the config file
    #[arg(long)]
    docs_root: Option<PathBuf>,

    /// Transport to serve on; overrides the config file
    #[arg(long, value_enum)]
    transport: Option<Transport>,

    /// HTTP listen address; overrides the config file
    #[arg(long)]
    bind: Option<String>,

    /// Index on the first query instead of at startup
    #[arg(long)]
    no_preload: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout belongs to the stdio transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    // 1. Load config
    let mut config = Config::load(&cli.config)?;
    if let Some(root) = cli.docs_root {
        config.docs_root = root;
    }
    if let Some(transport) = cli.transport {
        config.transport = transport;
    }
    if let Some(bind) = cli.bind {
        config.http_bind = bind;
    }
    if cli.no_preload {
        config.preload = false;
    }
    config.validate().context("invalid configuration")?;
    let config = Arc::new(config);

    tracing::info!("Starting docshelf MCP Server...");

    // 2. Init store, optionally warm it
    let store = Arc::new(DocStore::new(&config.docs_root));
    if config.preload {
        store.ensure_loaded().await;
        tracing::info!("Documentation loaded successfully");
    }

    // 3. Init MCP Context
    let mcp_ctx = McpContext {
        engine: QueryEngine::new(store),
        config: config.clone(),
    };

    // 4. Start Server
    let server = McpServer::new(mcp_ctx);
    match config.transport {
        Transport::Stdio => server.start().await?,
        Transport::Http => server.start_http().await?,
    }

    Ok(())
}
