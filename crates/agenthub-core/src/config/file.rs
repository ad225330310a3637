//! File-based configuration source (YAML)
//!
//! Reads a nested YAML document and exposes it as dotted keys, e.g.
//!
//! ```yaml
//! provider: azure-openai
//! azure-openai:
//!   api_key: "..."
//!   model: gpt-4o
//!   endpoint: https://my-resource.openai.azure.com/
//! tool_server:
//!   tenant_id: "..."
//! ```
//!
//! becomes `provider`, `azure-openai.api_key`, `tool_server.tenant_id`, etc.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;

use super::traits::{ConfigError, ConfigResult, ConfigSource};

/// Configuration source backed by a YAML file
///
/// The file is read once at load time; the source is immutable afterward.
#[derive(Debug)]
pub struct FileConfigSource {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileConfigSource {
    /// Load configuration from a specific file
    ///
    /// A missing file yields an empty source, matching how optional config
    /// files behave elsewhere in the stack.
    pub fn load(path: impl Into<PathBuf>) -> ConfigResult<Self> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self {
                path,
                values: HashMap::new(),
            });
        }

        let content = fs::read_to_string(&path)?;
        let document: Value = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("failed to parse YAML: {e}")))?;

        let mut values = HashMap::new();
        flatten(&document, String::new(), &mut values);

        Ok(Self { path, values })
    }

    /// Load the user-level configuration file (~/.config/agenthub/config.yaml)
    pub fn user() -> ConfigResult<Self> {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::load(config_dir.join("agenthub").join("config.yaml"))
    }

    /// Path this source was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of flattened keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the source holds no keys
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ConfigSource for FileConfigSource {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Flatten a YAML document into dotted scalar keys
fn flatten(value: &Value, prefix: String, out: &mut HashMap<String, String>) {
    match value {
        Value::Mapping(mapping) => {
            for (k, v) in mapping {
                let Some(name) = k.as_str() else { continue };
                let key = if prefix.is_empty() {
                    name.to_string()
                } else {
                    format!("{prefix}.{name}")
                };
                flatten(v, key, out);
            }
        }
        Value::String(s) => {
            out.insert(prefix, s.clone());
        }
        Value::Bool(b) => {
            out.insert(prefix, b.to_string());
        }
        Value::Number(n) => {
            out.insert(prefix, n.to_string());
        }
        // Sequences, nulls, and tagged values have no scalar rendering
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_empty_source() {
        let dir = tempdir().unwrap();
        let source = FileConfigSource::load(dir.path().join("absent.yaml")).unwrap();
        assert!(source.is_empty());
        assert!(source.get("provider").is_none());
    }

    #[test]
    fn test_nested_yaml_flattens_to_dotted_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            "provider: openai\nopenai:\n  api_key: sk-test\n  model: gpt-4o\ntool_server:\n  tenant_id: tenant-1\n  port: 8443\n  enabled: true\n",
        )
        .unwrap();

        let source = FileConfigSource::load(&path).unwrap();
        assert_eq!(source.get("provider").as_deref(), Some("openai"));
        assert_eq!(source.get("openai.api_key").as_deref(), Some("sk-test"));
        assert_eq!(source.get("openai.model").as_deref(), Some("gpt-4o"));
        assert_eq!(source.get("tool_server.tenant_id").as_deref(), Some("tenant-1"));
        assert_eq!(source.get("tool_server.port").as_deref(), Some("8443"));
        assert_eq!(source.get("tool_server.enabled").as_deref(), Some("true"));
    }

    #[test]
    fn test_invalid_yaml_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "provider: [unclosed").unwrap();

        assert!(matches!(
            FileConfigSource::load(&path),
            Err(ConfigError::Parse(_))
        ));
    }
}
