//! Tool catalog and selection types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A callable tool advertised by the tool server
///
/// Produced by discovery only; never persisted by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Tool name as registered on the server
    pub name: String,
    /// Human-readable description shown to the model
    pub description: String,
}

impl ToolDescriptor {
    /// Create a new tool descriptor
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// The model's decision about which tool (if any) to call
///
/// Deserialized from the selection-stage model reply; never hand-constructed
/// elsewhere. An empty `tool_name` means no tool applies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSelection {
    /// Name of the selected tool; empty when no tool is needed
    #[serde(default)]
    pub tool_name: String,
    /// Arguments for the selected tool, keyed by parameter name
    #[serde(default)]
    pub tool_arguments: Map<String, Value>,
}

impl ToolSelection {
    /// Whether the model selected a tool
    pub fn is_tool_selected(&self) -> bool {
        !self.tool_name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_selection_wire_format() {
        let raw = r#"{"toolName":"get_weather","toolArguments":{"city":"Paris"}}"#;
        let selection: ToolSelection = serde_json::from_str(raw).unwrap();
        assert_eq!(selection.tool_name, "get_weather");
        assert_eq!(selection.tool_arguments.get("city"), Some(&json!("Paris")));
        assert!(selection.is_tool_selected());
    }

    #[test]
    fn test_selection_defaults() {
        let selection: ToolSelection = serde_json::from_str("{}").unwrap();
        assert_eq!(selection.tool_name, "");
        assert!(selection.tool_arguments.is_empty());
        assert!(!selection.is_tool_selected());
    }

    #[test]
    fn test_whitespace_name_is_no_selection() {
        let selection: ToolSelection = serde_json::from_str(r#"{"toolName":"  "}"#).unwrap();
        assert!(!selection.is_tool_selected());
    }
}
