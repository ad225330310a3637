//! Chat client backed by the genai crate
//!
//! One client type serves all recognized providers. Endpoint routing is done
//! with genai's `ServiceTargetResolver`: Azure OpenAI is spoken to over the
//! OpenAI-compatible protocol at the configured resource endpoint, Ollama at
//! the configured server endpoint, and OpenAI through the default target.
//! The API key comes from the validated settings via an `AuthResolver`,
//! never from genai's env var lookup.

use std::sync::Arc;

use async_trait::async_trait;

use genai::chat::{ChatMessage as GenaiMessage, ChatRequest};
use genai::resolver::{AuthData, AuthResolver, Endpoint, ServiceTargetResolver};
use genai::{adapter::AdapterKind, Client, ModelIden, ServiceTarget};

use crate::logging::Logger;
use crate::types::{CancellationToken, ChatMessage, MessageRole, ServiceProvider};

use super::error::{ProviderError, ProviderResult};
use super::traits::ChatClient;

/// Unified chat client for all recognized providers
pub struct GenaiChatClient {
    provider: ServiceProvider,
    model: String,
    api_key: String,
    endpoint: Option<String>,
    logger: Arc<dyn Logger>,
}

impl GenaiChatClient {
    /// Create a client bound to the given provider and settings
    pub fn new(
        provider: ServiceProvider,
        settings: &crate::types::ProviderSettings,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            provider,
            model: settings.model.clone(),
            api_key: settings.api_key.clone(),
            endpoint: settings.endpoint.clone(),
            logger,
        }
    }

    /// Build a genai client with auth and endpoint routing for this provider
    fn build_client(&self) -> Client {
        let api_key = self.api_key.clone();
        let auth_resolver = AuthResolver::from_resolver_fn(
            move |_: ModelIden| -> Result<Option<AuthData>, genai::resolver::Error> {
                Ok(Some(AuthData::from_single(api_key.clone())))
            },
        );

        let provider = self.provider;
        let endpoint = self.endpoint.clone();
        let target_resolver = ServiceTargetResolver::from_resolver_fn(
            move |target: ServiceTarget| -> Result<ServiceTarget, genai::resolver::Error> {
                let ServiceTarget { ref model, .. } = target;

                let adapter_kind = match provider {
                    // Azure speaks the OpenAI-compatible protocol at its own endpoint
                    ServiceProvider::AzureOpenAi => AdapterKind::OpenAI,
                    ServiceProvider::Ollama => AdapterKind::Ollama,
                    // Default target already points at the OpenAI platform
                    ServiceProvider::OpenAi => return Ok(target),
                };

                let resolved_endpoint = endpoint
                    .as_ref()
                    .map(|u| Endpoint::from_owned(u.clone()))
                    .unwrap_or(target.endpoint);
                let resolved_model = ModelIden::new(adapter_kind, model.model_name.clone());

                Ok(ServiceTarget {
                    endpoint: resolved_endpoint,
                    auth: target.auth,
                    model: resolved_model,
                })
            },
        );

        Client::builder()
            .with_auth_resolver(auth_resolver)
            .with_service_target_resolver(target_resolver)
            .build()
    }
}

#[async_trait]
impl ChatClient for GenaiChatClient {
    fn provider_id(&self) -> &str {
        self.provider.id()
    }

    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        cancel: CancellationToken,
    ) -> ProviderResult<String> {
        if cancel.is_cancelled() {
            return Err(ProviderError::Cancelled);
        }

        self.logger.info(&format!(
            "[GenaiChatClient] completion requested: provider={}, model={}, messages={}",
            self.provider,
            self.model,
            messages.len()
        ));

        let client = self.build_client();
        let chat_req = ChatRequest::new(to_genai_messages(messages));

        let response = tokio::select! {
            _ = cancel.cancelled() => {
                self.logger.info("[GenaiChatClient] completion cancelled");
                return Err(ProviderError::Cancelled);
            }
            result = client.exec_chat(&self.model, chat_req, None) => {
                result.map_err(|e| ProviderError::api_error(self.provider.id(), e.to_string()))?
            }
        };

        let text = response
            .content_text_as_str()
            .map(|s| s.to_string())
            .unwrap_or_default();

        self.logger.info(&format!(
            "[GenaiChatClient] completion finished: provider={}, chars={}",
            self.provider,
            text.len()
        ));

        Ok(text)
    }
}

/// Convert engine messages to genai messages
fn to_genai_messages(messages: Vec<ChatMessage>) -> Vec<GenaiMessage> {
    messages
        .into_iter()
        .map(|msg| match msg.role {
            MessageRole::System => GenaiMessage::system(msg.content),
            MessageRole::User => GenaiMessage::user(msg.content),
            MessageRole::Assistant => GenaiMessage::assistant(msg.content),
        })
        .collect()
}
