//! Engine error types

use thiserror::Error;

use crate::providers::ProviderError;
use crate::toolserver::ToolServerError;

/// Errors surfaced by the engine entry points
///
/// Nothing is swallowed: every variant is logged once with sanitized text at
/// the engine boundary and then returned to the caller. The engine performs
/// no internal retries, so transient provider or tool-server failures arrive
/// here as-is.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Bad caller input, rejected before any network traffic
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The typed request could not be serialized to JSON
    #[error("failed to encode request: {0}")]
    RequestEncoding(#[source] serde_json::Error),

    /// The selection-stage reply was not a valid tool selection
    #[error("failed to parse tool selection: {0}")]
    ToolSelectionParse(String),

    /// A chat-completion call failed
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// A tool server call failed
    #[error(transparent)]
    ToolServer(#[from] ToolServerError),
}

pub type EngineResult<T> = Result<T, EngineError>;
