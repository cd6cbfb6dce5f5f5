/// MCP Server setup using `rmcp` with stdio or streamable HTTP transport.
///
/// Provides `McpContext` (shared state) and `McpServer` (startup logic).
use crate::mcp::tools::DocTools;
use anyhow::{Context, Result};
use rmcp::ServiceExt;
use rmcp::transport::io::stdio;
use rmcp::transport::streamable_http_server::{
    StreamableHttpService, session::local::LocalSessionManager,
};
use std::sync::Arc;
use tracing::info;

use crate::{config::Config, query::QueryEngine};

/// Shared application context available to all tool handlers.
#[derive(Clone)]
pub struct McpContext {
    pub engine: QueryEngine,
    pub config: Arc<Config>,
}

/// MCP Server wrapping the context.
#[derive(Clone)]
pub struct McpServer {
    pub ctx: McpContext,
}

impl McpServer {
    pub fn new(ctx: McpContext) -> Self {
        Self { ctx }
    }

    /// Start the MCP server on stdio transport (blocks until the client disconnects).
    pub async fn start(self) -> Result<()> {
        info!("Starting MCP server on stdio...");
        let (stdin, stdout) = stdio();

        let router = DocTools::new(self.ctx.clone()).into_router();

        let service = router
            .serve((stdin, stdout))
            .await
            .context("MCP Server failed to start on stdio transport")?;
        service
            .waiting()
            .await
            .context("MCP Server encountered an error during stdio transport")?;

        Ok(())
    }

    /// Serve streamable HTTP on the configured address until Ctrl-C.
    pub async fn start_http(self) -> Result<()> {
        let addr = self.ctx.config.bind_addr()?;
        let mount = self.ctx.config.http_path.clone();

        let tools = DocTools::new(self.ctx.clone());
        let service = StreamableHttpService::new(
            move || Ok(tools.clone().into_router()),
            LocalSessionManager::default().into(),
            Default::default(),
        );
        let app = axum::Router::new().nest_service(&mount, service);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        info!("MCP Documentation Server running on http://{addr}{mount}");

        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                info!("Shutting down");
            })
            .await
            .context("HTTP server error")?;

        Ok(())
    }
}
