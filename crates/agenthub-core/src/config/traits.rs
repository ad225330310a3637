//! Configuration source trait and error types

use thiserror::Error;

/// Read-only key/value configuration source
///
/// Keys are dotted paths (`provider`, `openai.api_key`,
/// `tool_server.client_id`). The factory takes a source explicitly instead of
/// reading process-wide state, so callers can override configuration per
/// request and tests stay deterministic.
///
/// Implementations:
/// - `MemoryConfigSource`: in-memory map, primarily for tests
/// - `EnvConfigSource`: environment variables with a fixed prefix
/// - `FileConfigSource`: YAML file (~/.config/agenthub/config.yaml)
pub trait ConfigSource: Send + Sync {
    /// Get the value for a key, if present
    fn get(&self, key: &str) -> Option<String>;

    /// Whether a key is present
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// Errors that can occur while resolving configuration
///
/// The first three variants are fatal at configuration-resolution time: the
/// agent runtime should not start serving with an invalid configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required configuration key is absent
    #[error("missing configuration key: {0}")]
    MissingConfiguration(String),

    /// The named provider is outside the recognized set
    #[error("unsupported provider: {0}")]
    UnsupportedProvider(String),

    /// A recognized provider has blank or unusable key material
    #[error("invalid configuration for {provider}: {reason}")]
    InvalidConfiguration { provider: String, reason: String },

    /// IO error while reading a configuration file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("configuration parse error: {0}")]
    Parse(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
