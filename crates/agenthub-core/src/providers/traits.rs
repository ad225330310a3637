//! Chat client trait definition

use async_trait::async_trait;

use crate::types::{CancellationToken, ChatMessage};

use super::error::ProviderResult;

/// Provider seam for the engine: send role-tagged messages, get text back
///
/// Both engine paths (tool-augmented and conversation) work exclusively
/// through this interface, so the empty-response policy and all orchestration
/// logic are provider-independent. An empty response is not an error here;
/// the caller decides what an empty string means.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Id of the backend this client is bound to
    fn provider_id(&self) -> &str;

    /// Issue one chat completion and return the response text
    ///
    /// Returns an empty string when the provider answers with no content.
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        cancel: CancellationToken,
    ) -> ProviderResult<String>;
}
