//! Environment variable configuration source

use std::env;

use super::traits::ConfigSource;

/// Default environment variable prefix
const DEFAULT_PREFIX: &str = "AGENTHUB";

/// Configuration source backed by environment variables
///
/// Dotted keys map to prefixed, uppercased variables:
/// `openai.api_key` → `AGENTHUB_OPENAI_API_KEY`. Dots and dashes both become
/// underscores. Empty variables count as absent.
#[derive(Debug, Clone)]
pub struct EnvConfigSource {
    prefix: String,
}

impl EnvConfigSource {
    /// Create a source with the default `AGENTHUB` prefix
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }

    /// Create a source with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Environment variable name for a dotted key
    pub fn var_name(&self, key: &str) -> String {
        let suffix: String = key
            .chars()
            .map(|c| match c {
                '.' | '-' => '_',
                _ => c.to_ascii_uppercase(),
            })
            .collect();
        format!("{}_{}", self.prefix, suffix)
    }
}

impl Default for EnvConfigSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSource for EnvConfigSource {
    fn get(&self, key: &str) -> Option<String> {
        match env::var(self.var_name(key)) {
            Ok(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_name_mapping() {
        let source = EnvConfigSource::new();
        assert_eq!(source.var_name("provider"), "AGENTHUB_PROVIDER");
        assert_eq!(source.var_name("openai.api_key"), "AGENTHUB_OPENAI_API_KEY");
        assert_eq!(
            source.var_name("azure-openai.endpoint"),
            "AGENTHUB_AZURE_OPENAI_ENDPOINT"
        );
    }

    #[test]
    fn test_env_source_reads_variables() {
        env::set_var("AGENTHUB_TEST_VALUE", "hello");

        let source = EnvConfigSource::new();
        assert_eq!(source.get("test.value").as_deref(), Some("hello"));
        assert!(source.get("test.other").is_none());

        env::remove_var("AGENTHUB_TEST_VALUE");
    }

    #[test]
    fn test_empty_variable_counts_as_absent() {
        env::set_var("AGENTHUB_TEST_EMPTY", "");

        let source = EnvConfigSource::new();
        assert!(source.get("test.empty").is_none());

        env::remove_var("AGENTHUB_TEST_EMPTY");
    }
}
