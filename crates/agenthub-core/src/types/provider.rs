//! Provider identity, capabilities, and validated settings

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The closed set of recognized chat-completion backends
///
/// Resolved once at configuration time so downstream code branches on a typed
/// variant instead of re-matching provider name strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceProvider {
    /// OpenAI platform API; the only endpoint-less provider
    #[serde(rename = "openai")]
    OpenAi,
    /// Azure OpenAI deployment; requires the resource endpoint
    #[serde(rename = "azure-openai")]
    AzureOpenAi,
    /// Local or remote Ollama server; requires the server endpoint
    #[serde(rename = "ollama")]
    Ollama,
}

impl ServiceProvider {
    /// All recognized providers, in display order
    pub const ALL: [ServiceProvider; 3] = [
        ServiceProvider::OpenAi,
        ServiceProvider::AzureOpenAi,
        ServiceProvider::Ollama,
    ];

    /// Parse a provider name, case-insensitively
    ///
    /// Returns `None` for anything outside the recognized set.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "openai" => Some(ServiceProvider::OpenAi),
            "azure-openai" | "azure_openai" | "azure" => Some(ServiceProvider::AzureOpenAi),
            "ollama" => Some(ServiceProvider::Ollama),
            _ => None,
        }
    }

    /// Canonical identifier, also the configuration key prefix
    pub fn id(&self) -> &'static str {
        match self {
            ServiceProvider::OpenAi => "openai",
            ServiceProvider::AzureOpenAi => "azure-openai",
            ServiceProvider::Ollama => "ollama",
        }
    }

    /// Whether this provider requires an explicit API endpoint
    pub fn requires_endpoint(&self) -> bool {
        !matches!(self, ServiceProvider::OpenAi)
    }

    /// Human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceProvider::OpenAi => "OpenAI",
            ServiceProvider::AzureOpenAi => "Azure OpenAI",
            ServiceProvider::Ollama => "Ollama",
        }
    }
}

impl std::fmt::Display for ServiceProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Capability flags for a validated provider configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderCapabilities {
    /// Whether chat completion is available (always true once validated)
    pub chat_completion: bool,
    /// Whether server-side plugin execution is available
    pub plugin_execution: bool,
    /// Whether external tool-server integration is available
    pub tool_integration: bool,
    /// Whether image input is supported (forced true once validated)
    pub vision: bool,
    /// Whether function calling is supported (forced true once validated)
    pub function_calling: bool,
    /// Names of providers this configuration is valid for
    ///
    /// Always contains the active provider id.
    pub supported_providers: BTreeSet<String>,
}

/// A validated, immutable provider configuration
///
/// Built once by [`crate::config::resolve_provider_settings`]; there is no
/// mutating API afterward.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    /// Display name for this configuration
    pub name: String,
    /// Which backend this configuration targets
    pub service_provider: ServiceProvider,
    /// Model identifier as used by the provider's API
    pub model: String,
    /// API key for authentication
    pub api_key: String,
    /// API endpoint; `None` only for endpoint-less providers
    pub endpoint: Option<String>,
    /// What this configuration supports
    pub capabilities: ProviderCapabilities,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recognized_providers() {
        assert_eq!(ServiceProvider::parse("openai"), Some(ServiceProvider::OpenAi));
        assert_eq!(ServiceProvider::parse("OpenAI"), Some(ServiceProvider::OpenAi));
        assert_eq!(
            ServiceProvider::parse("azure-openai"),
            Some(ServiceProvider::AzureOpenAi)
        );
        assert_eq!(ServiceProvider::parse("Azure"), Some(ServiceProvider::AzureOpenAi));
        assert_eq!(ServiceProvider::parse(" ollama "), Some(ServiceProvider::Ollama));
    }

    #[test]
    fn test_parse_unrecognized_provider() {
        assert_eq!(ServiceProvider::parse("Unknown"), None);
        assert_eq!(ServiceProvider::parse(""), None);
        assert_eq!(ServiceProvider::parse("anthropic"), None);
    }

    #[test]
    fn test_endpoint_requirements() {
        assert!(!ServiceProvider::OpenAi.requires_endpoint());
        assert!(ServiceProvider::AzureOpenAi.requires_endpoint());
        assert!(ServiceProvider::Ollama.requires_endpoint());
    }

    #[test]
    fn test_id_round_trip() {
        for provider in ServiceProvider::ALL {
            assert_eq!(ServiceProvider::parse(provider.id()), Some(provider));
        }
    }
}
