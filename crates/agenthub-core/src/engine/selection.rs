//! Tool-selection reply parsing
//!
//! Models frequently wrap their JSON reply in a fenced markdown code block
//! even when told not to. The grammar handled here: strip one surrounding
//! fence (with or without an info string such as `json`) if present,
//! otherwise parse the trimmed text as-is. Parse failure is a first-class
//! error; a default tool is never guessed.

use crate::types::ToolSelection;

use super::error::{EngineError, EngineResult};

/// Strip one surrounding markdown code fence, if present
///
/// Returns the inner payload trimmed. Text without a leading fence is
/// returned trimmed and otherwise untouched; an unterminated fence keeps
/// whatever body follows the opening line.
pub fn extract_json_payload(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the info string ("json", "JSON", or empty) up to the end of the
    // opening line
    let Some(newline) = rest.find('\n') else {
        return trimmed;
    };
    let body = rest[newline + 1..].trim_end();
    let body = body.strip_suffix("```").unwrap_or(body);
    body.trim()
}

/// Parse the selection-stage model reply into a [`ToolSelection`]
pub fn parse_tool_selection(raw: &str) -> EngineResult<ToolSelection> {
    let payload = extract_json_payload(raw);
    serde_json::from_str(payload).map_err(|e| EngineError::ToolSelectionParse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_json_passes_through() {
        let raw = r#"{"toolName":"","toolArguments":{}}"#;
        assert_eq!(extract_json_payload(raw), raw);
    }

    #[test]
    fn test_fence_with_info_string_is_stripped() {
        let raw = "```json\n{\"toolName\":\"get_weather\"}\n```";
        assert_eq!(extract_json_payload(raw), "{\"toolName\":\"get_weather\"}");
    }

    #[test]
    fn test_fence_without_info_string_is_stripped() {
        let raw = "```\n{\"toolName\":\"\"}\n```";
        assert_eq!(extract_json_payload(raw), "{\"toolName\":\"\"}");
    }

    #[test]
    fn test_unterminated_fence_keeps_body() {
        let raw = "```json\n{\"toolName\":\"x\"}";
        assert_eq!(extract_json_payload(raw), "{\"toolName\":\"x\"}");
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let raw = "  \n```json\n{\"toolName\":\"x\"}\n```  \n";
        assert_eq!(extract_json_payload(raw), "{\"toolName\":\"x\"}");
    }

    #[test]
    fn test_round_trip_through_fenced_markdown() {
        let original = ToolSelection {
            tool_name: "get_weather".to_string(),
            tool_arguments: [("city".to_string(), json!("Paris"))].into_iter().collect(),
        };
        let fenced = format!("```json\n{}\n```", serde_json::to_string(&original).unwrap());

        let decoded = parse_tool_selection(&fenced).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_round_trip_with_empty_arguments() {
        let original = ToolSelection {
            tool_name: "refresh_cache".to_string(),
            tool_arguments: Default::default(),
        };
        let fenced = format!("```\n{}\n```", serde_json::to_string(&original).unwrap());

        let decoded = parse_tool_selection(&fenced).unwrap();
        assert_eq!(decoded, original);
        assert!(decoded.tool_arguments.is_empty());
    }

    #[test]
    fn test_garbage_is_a_parse_error_not_a_guess() {
        let result = parse_tool_selection("I think the weather tool would be great here!");
        assert!(matches!(result, Err(EngineError::ToolSelectionParse(_))));
    }

    #[test]
    fn test_empty_reply_is_a_parse_error() {
        assert!(matches!(
            parse_tool_selection(""),
            Err(EngineError::ToolSelectionParse(_))
        ));
    }
}
