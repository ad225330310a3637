//! Tool server discovery and invocation
//!
//! The agent tool server is an MCP endpoint over streamable HTTP, protected
//! by bearer tokens from an OAuth2 client-credentials grant. Discovery lists
//! the tool catalog; invocation executes one named tool and returns the raw
//! serialized result.

mod auth;
mod client;

pub use auth::{TokenClient, ToolServerCredentials};
pub use client::{McpToolServer, ToolServer, ToolServerError, ToolServerResult};
