/// MCP Tool handlers for docshelf.
///
/// 1. get_doc          – full document by id
/// 2. get_category     – category overview grouped by subcategory
/// 3. get_subcategory  – documents of one subcategory
/// 4. search_docs      – case-insensitive substring search
/// 5. find_by_tag      – documents carrying a tag
/// 6. list_topics      – per-category counts and subcategory pointers
/// 7. list_categories  – category pointers
/// 8. compare_docs     – two topics side by side with common tags
/// 9. read_uri         – follow a docs:// / docs-category:// / docs-subcategory:// pointer
///
/// The same pointers are served as MCP resource templates through
/// `resources/read`.
use crate::mcp::server::McpContext;
use crate::query::uri::DocUri;
use rmcp::handler::server::ServerHandler;
use rmcp::handler::server::router::Router;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::service::RequestContext;
use rmcp::{
    ErrorData as McpError, RoleServer, handler::server::tool::ToolRouter, model::*, tool,
    tool_router,
};
use schemars::JsonSchema;
use serde::Deserialize;

const INSTRUCTIONS: &str = "Documentation server. Start with list_topics or list_categories, \
drill down with get_category / get_subcategory, search with search_docs, and open documents \
with get_doc. Every docs://, docs-category:// or docs-subcategory:// pointer can be read as a \
resource or passed to read_uri.";

// ── Parameter structs ────────────────────────────────────────────────

#[derive(Deserialize, JsonSchema)]
struct IdParam {
    /// Document id: category[/subcategory]/filename (e.g. 'guides/routing/dynamic-routes')
    id: String,
}

#[derive(Deserialize, JsonSchema)]
struct CategoryParam {
    /// Category name (top-level documentation directory)
    category: String,
}

#[derive(Deserialize, JsonSchema)]
struct SubcategoryParams {
    /// Category name
    category: String,
    /// Subcategory name inside the category
    subcategory: String,
}

#[derive(Deserialize, JsonSchema)]
struct QueryParam {
    /// Text to look for (case-insensitive substring)
    query: String,
}

#[derive(Deserialize, JsonSchema)]
struct TagParam {
    /// Tag to filter by (category, subcategory, filename part or title word)
    tag: String,
}

#[derive(Deserialize, JsonSchema)]
struct CompareParams {
    /// First topic ID or keyword
    topic1: String,
    /// Second topic ID or keyword
    topic2: String,
}

#[derive(Deserialize, JsonSchema)]
struct UriParam {
    /// Access pointer such as docs://guides/intro or docs-category://guides
    uri: String,
}

// ── Response helpers ─────────────────────────────────────────────────

fn text_result(text: String) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

fn error_result(msg: &str) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::error(vec![Content::text(msg.to_string())]))
}

/// Trimmed argument, or `None` when nothing but whitespace was given.
fn required(value: &str) -> Option<&str> {
    Some(value.trim()).filter(|v| !v.is_empty())
}

// ── Resource templates ───────────────────────────────────────────────

fn template(uri_template: &str, name: &str, description: &str) -> ResourceTemplate {
    RawResourceTemplate {
        uri_template: uri_template.to_string(),
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        mime_type: Some("text/markdown".to_string()),
        icons: None,
    }
    .no_annotation()
}

fn resource_templates() -> Vec<ResourceTemplate> {
    vec![
        template("docs://{topic}", "docs-dynamic", "A document by id"),
        template(
            "docs-category://{category}",
            "docs-category",
            "Category overview grouped by subcategory",
        ),
        template(
            "docs-subcategory://{category}/{subcategory}",
            "docs-subcategory",
            "Documents of one subcategory",
        ),
    ]
}

// ── Tool implementations ─────────────────────────────────────────────

#[derive(Clone)]
pub struct DocTools {
    pub ctx: McpContext,
    pub tool_router: ToolRouter<Self>,
}

impl ServerHandler for DocTools {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder()
            .enable_resources()
            .enable_tools()
            .build();
        info.instructions = Some(INSTRUCTIONS.to_string());
        info
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParams>,
        _: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        Ok(ListResourceTemplatesResult::with_all_items(
            resource_templates(),
        ))
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParams { uri, .. }: ReadResourceRequestParams,
        _: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        self.read_pointer(&uri).await
    }
}

impl DocTools {
    /// Renders the text behind an access pointer as a resource.
    pub async fn read_pointer(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        let parsed = uri.parse::<DocUri>().map_err(|e| {
            McpError::invalid_params(e.to_string(), Some(serde_json::json!({ "uri": uri })))
        })?;
        let text = self.ctx.engine.uri_text(&parsed).await;
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }
}

#[tool_router]
impl DocTools {
    pub fn new(ctx: McpContext) -> Self {
        Self {
            ctx,
            tool_router: Self::tool_router(),
        }
    }

    /// Wraps the handlers into a router ready to be served on any transport.
    pub fn into_router(self) -> Router<Self> {
        let tools = self.tool_router.clone();
        Router::new(self).with_tools(tools)
    }

    // ── Tool 1: get_doc ─────────────────────────────────────────────

    #[tool(description = "Fetch a full document with its metadata by id (category[/subcategory]/filename)")]
    async fn get_doc(&self, params: Parameters<IdParam>) -> Result<CallToolResult, McpError> {
        let Some(id) = required(&params.0.id) else {
            return error_result("id is required");
        };
        text_result(self.ctx.engine.doc_text(id).await)
    }

    // ── Tool 2: get_category ────────────────────────────────────────

    #[tool(description = "Overview of a documentation category, grouped by subcategory, with previews")]
    async fn get_category(
        &self,
        params: Parameters<CategoryParam>,
    ) -> Result<CallToolResult, McpError> {
        let Some(category) = required(&params.0.category) else {
            return error_result("category is required");
        };
        text_result(self.ctx.engine.category_text(category).await)
    }

    // ── Tool 3: get_subcategory ─────────────────────────────────────

    #[tool(description = "List the documents of one subcategory with previews")]
    async fn get_subcategory(
        &self,
        params: Parameters<SubcategoryParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let (Some(category), Some(subcategory)) = (required(&p.category), required(&p.subcategory))
        else {
            return error_result("category and subcategory are required");
        };
        text_result(self.ctx.engine.subcategory_text(category, subcategory).await)
    }

    // ── Tool 4: search_docs ─────────────────────────────────────────

    #[tool(
        description = "Search documentation: case-insensitive substring match over titles, descriptions, content and tags"
    )]
    async fn search_docs(&self, params: Parameters<QueryParam>) -> Result<CallToolResult, McpError> {
        text_result(self.ctx.engine.search_text(&params.0.query).await)
    }

    // ── Tool 5: find_by_tag ─────────────────────────────────────────

    #[tool(description = "List documents carrying an exact tag")]
    async fn find_by_tag(&self, params: Parameters<TagParam>) -> Result<CallToolResult, McpError> {
        let Some(tag) = required(&params.0.tag) else {
            return error_result("tag is required");
        };
        text_result(self.ctx.engine.tag_text(tag).await)
    }

    // ── Tool 6: list_topics ─────────────────────────────────────────

    #[tool(description = "Overview of all documentation: totals, categories and subcategories")]
    async fn list_topics(&self) -> Result<CallToolResult, McpError> {
        text_result(self.ctx.engine.topics_text().await)
    }

    // ── Tool 7: list_categories ─────────────────────────────────────

    #[tool(description = "List available documentation categories")]
    async fn list_categories(&self) -> Result<CallToolResult, McpError> {
        text_result(self.ctx.engine.categories_text().await)
    }

    // ── Tool 8: compare_docs ────────────────────────────────────────

    #[tool(description = "Compare two topics (ids or keywords) and show their common tags")]
    async fn compare_docs(
        &self,
        params: Parameters<CompareParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        text_result(self.ctx.engine.compare_text(&p.topic1, &p.topic2).await)
    }

    // ── Tool 9: read_uri ────────────────────────────────────────────

    #[tool(
        description = "Open an access pointer: docs://<id>, docs-category://<category> or docs-subcategory://<category>/<subcategory>"
    )]
    async fn read_uri(&self, params: Parameters<UriParam>) -> Result<CallToolResult, McpError> {
        match params.0.uri.parse::<DocUri>() {
            Ok(uri) => text_result(self.ctx.engine.uri_text(&uri).await),
            Err(e) => error_result(&e.to_string()),
        }
    }
}
