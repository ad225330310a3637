//! AgentHub Core
//!
//! Runtime-agnostic agent invocation and tool-orchestration engine.
//! This crate holds the logic that resolves which model provider to use,
//! decides whether a request needs an external tool, calls that tool through
//! the tool server's discovery/invocation protocol, and synthesizes the final
//! answer — plus the sibling path turning stored conversation history into a
//! multi-turn chat completion.
//!
//! REST controllers, persistence, end-user authentication, and every other
//! outer surface live in host applications; they talk to this crate through
//! plain typed inputs and get plain text back.
//!
//! ## Tool-augmented answers
//!
//! ```rust,ignore
//! use agenthub_core::config::{resolve_provider_settings, resolve_tool_server_credentials};
//! use agenthub_core::engine::ResponseEngine;
//! use agenthub_core::providers::create_chat_client;
//! use agenthub_core::toolserver::McpToolServer;
//!
//! let settings = resolve_provider_settings(&source)?;
//! let chat = create_chat_client(settings.service_provider.id(), &settings, logger.clone())?;
//! let tools = McpToolServer::new(resolve_tool_server_credentials(&source)?, logger.clone());
//!
//! let engine = ResponseEngine::new(chat.into(), Arc::new(tools), logger);
//! let answer = engine
//!     .generate(&request, server_url, "bugs", "report", cancel)
//!     .await?;
//! ```

pub mod config;
pub mod engine;
pub mod logging;
pub mod providers;
pub mod sanitize;
pub mod toolserver;
pub mod types;

// Re-export commonly used types
pub use types::{
    CancellationToken, ChatMessage, ChatTurn, ConversationHistory, MessageRole,
    ProviderCapabilities, ProviderSettings, ServiceProvider, ToolDescriptor, ToolSelection,
};

pub use config::{
    resolve_provider_settings, resolve_tool_server_credentials, ConfigError, ConfigSource,
    EnvConfigSource, FileConfigSource, MemoryConfigSource,
};

pub use logging::{ConsoleLogger, Logger, NoOpLogger};

pub use providers::{create_chat_client, supported_providers, ChatClient, ProviderError};

pub use toolserver::{McpToolServer, TokenClient, ToolServer, ToolServerCredentials, ToolServerError};

pub use engine::{
    ConversationEngine, EmptyResponsePolicy, EngineError, ResponseEngine, NO_ANSWER_FALLBACK,
};

pub use sanitize::sanitize_error_text;
