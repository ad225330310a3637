//! Provider configuration factory
//!
//! Resolves and validates which backend provider to use from a raw key/value
//! source. Deterministic, no side effects: the same source always yields the
//! same settings, and nothing global is consulted.

use std::collections::BTreeSet;

use crate::toolserver::ToolServerCredentials;
use crate::types::{ProviderCapabilities, ProviderSettings, ServiceProvider};

use super::traits::{ConfigError, ConfigResult, ConfigSource};

/// Key naming the currently active provider
pub const ACTIVE_PROVIDER_KEY: &str = "provider";

/// Resolve and validate the active provider's settings
///
/// Fails with [`ConfigError::MissingConfiguration`] when the
/// `provider` key itself is absent, [`ConfigError::UnsupportedProvider`] when
/// the named provider is outside the recognized set, and
/// [`ConfigError::InvalidConfiguration`] when a recognized provider has blank
/// key material.
///
/// Fixed policy, not configurable: `vision` and `function_calling` are forced
/// `true`, and the active provider id is always present in
/// `supported_providers`.
pub fn resolve_provider_settings(source: &dyn ConfigSource) -> ConfigResult<ProviderSettings> {
    let active = source
        .get(ACTIVE_PROVIDER_KEY)
        .ok_or_else(|| ConfigError::MissingConfiguration(ACTIVE_PROVIDER_KEY.to_string()))?;

    let provider = ServiceProvider::parse(&active)
        .ok_or_else(|| ConfigError::UnsupportedProvider(active.trim().to_string()))?;
    let id = provider.id();

    let api_key = required_value(source, provider, &format!("{id}.api_key"))?;
    let model = required_value(source, provider, &format!("{id}.model"))?;

    let endpoint = non_blank(source.get(&format!("{id}.endpoint")));
    if provider.requires_endpoint() && endpoint.is_none() {
        return Err(ConfigError::InvalidConfiguration {
            provider: id.to_string(),
            reason: format!("{id}.endpoint must not be blank"),
        });
    }

    let name = non_blank(source.get(&format!("{id}.name")))
        .unwrap_or_else(|| provider.display_name().to_string());

    let mut supported_providers: BTreeSet<String> =
        match non_blank(source.get(&format!("{id}.supported_providers"))) {
            Some(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => BTreeSet::new(),
        };
    supported_providers.insert(id.to_string());

    let capabilities = ProviderCapabilities {
        chat_completion: true,
        plugin_execution: bool_value(source, &format!("{id}.supports_plugins")),
        tool_integration: bool_value(source, &format!("{id}.supports_tools")),
        vision: true,
        function_calling: true,
        supported_providers,
    };

    Ok(ProviderSettings {
        name,
        service_provider: provider,
        model,
        api_key,
        endpoint,
        capabilities,
    })
}

/// Resolve the OAuth2 client credentials for the tool server
pub fn resolve_tool_server_credentials(
    source: &dyn ConfigSource,
) -> ConfigResult<ToolServerCredentials> {
    Ok(ToolServerCredentials {
        tenant_id: required_tool_server_value(source, "tool_server.tenant_id")?,
        client_id: required_tool_server_value(source, "tool_server.client_id")?,
        client_secret: required_tool_server_value(source, "tool_server.client_secret")?,
    })
}

/// Absent or blank provider key material is an invalid configuration
fn required_value(
    source: &dyn ConfigSource,
    provider: ServiceProvider,
    key: &str,
) -> ConfigResult<String> {
    non_blank(source.get(key)).ok_or_else(|| ConfigError::InvalidConfiguration {
        provider: provider.id().to_string(),
        reason: format!("{key} must not be blank"),
    })
}

fn required_tool_server_value(source: &dyn ConfigSource, key: &str) -> ConfigResult<String> {
    match source.get(key) {
        None => Err(ConfigError::MissingConfiguration(key.to_string())),
        Some(value) => non_blank(Some(value)).ok_or_else(|| ConfigError::InvalidConfiguration {
            provider: "tool_server".to_string(),
            reason: format!("{key} must not be blank"),
        }),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Optional boolean capability key; anything other than an explicit negative
/// counts as enabled
fn bool_value(source: &dyn ConfigSource, key: &str) -> bool {
    match source.get(key) {
        Some(raw) => !matches!(raw.trim().to_lowercase().as_str(), "false" | "no" | "0"),
        None => true,
    }
}
