//! MCP tool server client using the official rmcp SDK

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use rmcp::{
    model::{CallToolRequestParams, ClientCapabilities, ClientInfo, Implementation},
    service::RunningService,
    transport::{
        streamable_http_client::StreamableHttpClientTransportConfig, StreamableHttpClientTransport,
    },
    RoleClient, ServiceExt,
};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::logging::Logger;
use crate::types::{CancellationToken, ToolDescriptor};

use super::auth::{TokenClient, ToolServerCredentials};

/// Tool server errors
#[derive(Error, Debug)]
pub enum ToolServerError {
    /// Bearer credential acquisition failed
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The tool server could not be reached or initialized
    #[error("tool server unreachable: {0}")]
    Unreachable(String),

    /// The named tool call was rejected or failed on the server
    #[error("tool call failed: {0}")]
    ToolCallFailed(String),

    /// Malformed protocol traffic
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The request was cancelled before completion
    #[error("request cancelled")]
    Cancelled,
}

pub type ToolServerResult<T> = Result<T, ToolServerError>;

/// Discovery-then-invoke seam for the tool server
///
/// The engine depends on this trait only; tests supply recording doubles,
/// production uses [`McpToolServer`]. Invocation is side-effecting and is
/// never retried here.
#[async_trait]
pub trait ToolServer: Send + Sync {
    /// List the tool catalog, in server order
    async fn list_tools(
        &self,
        server_url: &str,
        cancel: &CancellationToken,
    ) -> ToolServerResult<Vec<ToolDescriptor>>;

    /// Call a named tool and return the raw serialized result
    async fn invoke_tool(
        &self,
        server_url: &str,
        tool_name: &str,
        arguments: Map<String, Value>,
        cancel: &CancellationToken,
    ) -> ToolServerResult<String>;
}

/// Tool server client over authenticated streamable HTTP
///
/// Every call acquires a fresh bearer token and opens a fresh session; there
/// is no token cache and no connection pooling.
pub struct McpToolServer {
    credentials: ToolServerCredentials,
    tokens: TokenClient,
    logger: Arc<dyn Logger>,
}

impl McpToolServer {
    /// Create a client for the given tenant credentials
    pub fn new(credentials: ToolServerCredentials, logger: Arc<dyn Logger>) -> Self {
        let tokens = TokenClient::new(Arc::clone(&logger));
        Self {
            credentials,
            tokens,
            logger,
        }
    }

    /// Open an authenticated MCP session to the server
    async fn connect(
        &self,
        server_url: &str,
        cancel: &CancellationToken,
    ) -> ToolServerResult<RunningService<RoleClient, ClientInfo>> {
        let token = self.tokens.acquire(&self.credentials, cancel).await?;

        let mut headers = HeaderMap::new();
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| ToolServerError::Protocol(e.to_string()))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ToolServerError::Unreachable(e.to_string()))?;

        let transport = StreamableHttpClientTransport::with_client(
            http,
            StreamableHttpClientTransportConfig::with_uri(server_url.to_string()),
        );

        let client_info = ClientInfo {
            meta: None,
            protocol_version: Default::default(),
            capabilities: ClientCapabilities::default(),
            client_info: Implementation {
                name: "agenthub-core".to_string(),
                title: Some("AgentHub Core".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                website_url: None,
                icons: None,
            },
        };

        let client = tokio::select! {
            _ = cancel.cancelled() => return Err(ToolServerError::Cancelled),
            result = client_info.serve(transport) => {
                result.map_err(|e| ToolServerError::Unreachable(e.to_string()))?
            }
        };

        self.logger
            .info("[McpToolServer] session established and initialized");

        Ok(client)
    }
}

#[async_trait]
impl ToolServer for McpToolServer {
    async fn list_tools(
        &self,
        server_url: &str,
        cancel: &CancellationToken,
    ) -> ToolServerResult<Vec<ToolDescriptor>> {
        let client = self.connect(server_url, cancel).await?;

        let result = tokio::select! {
            _ = cancel.cancelled() => return Err(ToolServerError::Cancelled),
            result = client.list_tools(Default::default()) => {
                result.map_err(|e| ToolServerError::Unreachable(e.to_string()))?
            }
        };

        let tools: Vec<ToolDescriptor> = result
            .tools
            .into_iter()
            .map(|tool| {
                ToolDescriptor::new(
                    tool.name.to_string(),
                    tool.description.map(|d| d.to_string()).unwrap_or_default(),
                )
            })
            .collect();

        self.logger
            .info(&format!("[McpToolServer] listed {} tools", tools.len()));

        let _ = client.cancel().await;

        Ok(tools)
    }

    async fn invoke_tool(
        &self,
        server_url: &str,
        tool_name: &str,
        arguments: Map<String, Value>,
        cancel: &CancellationToken,
    ) -> ToolServerResult<String> {
        let client = self.connect(server_url, cancel).await?;

        self.logger
            .info(&format!("[McpToolServer] calling tool: {tool_name}"));

        let params = CallToolRequestParams {
            meta: None,
            name: tool_name.to_owned().into(),
            arguments: Some(arguments),
            task: None,
        };

        let result = tokio::select! {
            _ = cancel.cancelled() => return Err(ToolServerError::Cancelled),
            result = client.call_tool(params) => {
                result.map_err(|e| ToolServerError::ToolCallFailed(e.to_string()))?
            }
        };

        let _ = client.cancel().await;

        let serialized = serde_json::to_string(&result)
            .map_err(|e| ToolServerError::Protocol(e.to_string()))?;

        if result.is_error == Some(true) {
            return Err(ToolServerError::ToolCallFailed(serialized));
        }

        Ok(serialized)
    }
}
