//! # docshelf — Documentation MCP Server
//!
//! Indexes a tree of markdown documents (`<root>/<category>[/<subcategory>]/<file>.md[x]`)
//! into memory on first use and serves lookup, listing, search and comparison
//! to AI assistants via the Model Context Protocol (MCP).
//!
//! ## Architecture
//!
//! - **[`docs`]** — Metadata extraction, document loading, tree walk, lazy store
//! - **[`query`]** — Query engine, text rendering and access-pointer URIs
//! - **[`mcp`]** — MCP server with 9 tool handlers (stdio or streamable HTTP via rmcp)
//! - **[`config`]** — Configuration loading and validation
//! - **[`error`]** — Load error types

pub mod config;
pub mod docs;
pub mod error;
pub mod mcp;
pub mod query;
