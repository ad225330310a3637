//! Chat-completion provider implementations
//!
//! All recognized providers are served by the `genai` crate: OpenAI and
//! Ollama through its native adapters, Azure OpenAI through the
//! OpenAI-compatible protocol with a custom endpoint. Authentication always
//! flows through the validated [`crate::types::ProviderSettings`], never
//! through genai's environment variable lookup.

mod error;
mod genai_client;
mod mock;
mod traits;

pub use error::{ProviderError, ProviderResult};
pub use genai_client::GenaiChatClient;
pub use mock::{MockChatClient, MockResponse};
pub use traits::ChatClient;

use std::sync::Arc;

use crate::logging::Logger;
use crate::types::{ProviderSettings, ServiceProvider};

/// Construct a chat client for the given provider id
///
/// The mapping from provider id to constructor is closed. Construction
/// re-checks the provider name even when the settings already validated,
/// so a caller holding a raw name can never reach a client for an
/// unrecognized backend.
pub fn create_chat_client(
    provider_id: &str,
    settings: &ProviderSettings,
    logger: Arc<dyn Logger>,
) -> ProviderResult<Box<dyn ChatClient>> {
    match ServiceProvider::parse(provider_id) {
        Some(ServiceProvider::OpenAi) => Ok(Box::new(GenaiChatClient::new(
            ServiceProvider::OpenAi,
            settings,
            logger,
        ))),
        Some(ServiceProvider::AzureOpenAi) => Ok(Box::new(GenaiChatClient::new(
            ServiceProvider::AzureOpenAi,
            settings,
            logger,
        ))),
        Some(ServiceProvider::Ollama) => Ok(Box::new(GenaiChatClient::new(
            ServiceProvider::Ollama,
            settings,
            logger,
        ))),
        None => Err(ProviderError::UnsupportedProvider {
            provider: provider_id.to_string(),
        }),
    }
}

/// List all recognized provider ids
pub fn supported_providers() -> Vec<&'static str> {
    ServiceProvider::ALL.iter().map(|p| p.id()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::NoOpLogger;
    use crate::types::ProviderCapabilities;

    fn settings(provider: ServiceProvider) -> ProviderSettings {
        ProviderSettings {
            name: provider.display_name().to_string(),
            service_provider: provider,
            model: "model-1".to_string(),
            api_key: "key-123".to_string(),
            endpoint: Some("https://models.example/".to_string()),
            capabilities: ProviderCapabilities::default(),
        }
    }

    #[test]
    fn test_recognized_providers_construct() {
        for provider in ServiceProvider::ALL {
            let client = create_chat_client(provider.id(), &settings(provider), Arc::new(NoOpLogger));
            assert!(client.is_ok(), "{provider}");
        }
    }

    #[test]
    fn test_unknown_provider_fails_even_with_valid_settings() {
        // Fully populated settings do not rescue an unrecognized name
        let result = create_chat_client(
            "Unknown",
            &settings(ServiceProvider::OpenAi),
            Arc::new(NoOpLogger),
        );
        assert!(matches!(
            result,
            Err(ProviderError::UnsupportedProvider { provider }) if provider == "Unknown"
        ));
    }

    #[test]
    fn test_supported_provider_list() {
        let ids = supported_providers();
        assert_eq!(ids, vec!["openai", "azure-openai", "ollama"]);
    }
}
