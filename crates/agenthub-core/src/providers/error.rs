//! Provider error types

use thiserror::Error;

/// Errors that can occur during chat-completion calls
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Provider id outside the recognized set
    #[error("unsupported provider: {provider}")]
    UnsupportedProvider { provider: String },

    /// The provider's API rejected or failed the request
    #[error("{provider} API error: {message}")]
    ApiError { provider: String, message: String },

    /// The request was cancelled before completion
    #[error("request cancelled")]
    Cancelled,
}

impl ProviderError {
    /// Create an API error
    pub fn api_error(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ApiError {
            provider: provider.into(),
            message: message.into(),
        }
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;
