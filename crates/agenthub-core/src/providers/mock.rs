//! Mock chat client for testing
//!
//! Deterministic, network-free responses for engine tests: fixed text, a
//! scripted sequence (one entry per call), an empty reply, or an error.
//! Every call's message list is recorded for assertions.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::types::{CancellationToken, ChatMessage};

use super::error::{ProviderError, ProviderResult};
use super::traits::ChatClient;

/// What the mock returns on each call
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Same text on every call
    Fixed(String),
    /// One entry per call, in order; calls past the end return an empty string
    Sequence(Vec<String>),
    /// Empty string on every call
    Empty,
    /// An API error on every call
    Error(String),
}

/// Scripted chat client
pub struct MockChatClient {
    response: MockResponse,
    cursor: Mutex<usize>,
    calls: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
}

impl MockChatClient {
    /// Create a client with the given response mode
    pub fn new(response: MockResponse) -> Self {
        Self {
            response,
            cursor: Mutex::new(0),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fixed-response client
    pub fn fixed(text: impl Into<String>) -> Self {
        Self::new(MockResponse::Fixed(text.into()))
    }

    /// Scripted-sequence client
    pub fn sequence(replies: Vec<String>) -> Self {
        Self::new(MockResponse::Sequence(replies))
    }

    /// Empty-response client
    pub fn empty() -> Self {
        Self::new(MockResponse::Empty)
    }

    /// Error-producing client
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(MockResponse::Error(message.into()))
    }

    /// Message lists received so far, one entry per call
    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of completions issued
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    fn provider_id(&self) -> &str {
        "mock"
    }

    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        cancel: CancellationToken,
    ) -> ProviderResult<String> {
        if cancel.is_cancelled() {
            return Err(ProviderError::Cancelled);
        }

        self.calls.lock().unwrap().push(messages);

        match &self.response {
            MockResponse::Fixed(text) => Ok(text.clone()),
            MockResponse::Sequence(replies) => {
                let mut cursor = self.cursor.lock().unwrap();
                let reply = replies.get(*cursor).cloned().unwrap_or_default();
                *cursor += 1;
                Ok(reply)
            }
            MockResponse::Empty => Ok(String::new()),
            MockResponse::Error(message) => Err(ProviderError::api_error("mock", message.clone())),
        }
    }
}
