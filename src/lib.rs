//! MCP server for remote chart generation.
//!
//! Exposes `generate_chart` and `check_fastapi_status` tools over JSON-RPC 2.0
//! stdio transport, compatible with any MCP-aware AI agent. Chart rendering is
//! delegated to a remote HTTP service: this server validates tool arguments,
//! forwards them to the service, and repackages the response (PNG bytes or
//! error text) into MCP tool results.

pub mod config;
pub mod handlers;
pub mod protocol;
pub mod proxy;
pub mod server;

pub mod schema;
