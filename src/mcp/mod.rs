//! MCP surface: one tool per documentation query, served over stdio or HTTP.
pub mod server;
pub mod tools;
