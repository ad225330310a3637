//! Agent invocation engine
//!
//! Two entry points share one [`crate::providers::ChatClient`] seam:
//!
//! - [`ResponseEngine`] — single-shot, tool-augmented answers (discover,
//!   select, optionally invoke, synthesize)
//! - [`ConversationEngine`] — multi-turn chat completion over stored history,
//!   no tool integration
//!
//! The two paths differ on empty provider replies; the difference is
//! expressed as an explicit [`EmptyResponsePolicy`] value at each call site.

mod conversation;
mod error;
mod response;
mod selection;

pub use conversation::ConversationEngine;
pub use error::{EngineError, EngineResult};
pub use response::{ResponseEngine, NO_ANSWER_FALLBACK};
pub use selection::{extract_json_payload, parse_tool_selection};

/// What to return when the provider answers with an empty string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyResponsePolicy {
    /// Substitute the fixed fallback text; the caller never sees an empty
    /// answer (tool-augmented path)
    Fallback,
    /// Return the provider's text verbatim, empty included (conversation
    /// path)
    PassThrough,
}

impl EmptyResponsePolicy {
    /// Apply this policy to a provider reply
    pub fn apply(self, text: String) -> String {
        match self {
            EmptyResponsePolicy::Fallback if text.trim().is_empty() => {
                response::NO_ANSWER_FALLBACK.to_string()
            }
            _ => text,
        }
    }
}

/// Blank-argument guard shared by both engine paths
pub(crate) fn require_non_blank(value: &str, field: &str) -> EngineResult<()> {
    if value.trim().is_empty() {
        Err(EngineError::InvalidArgument(format!(
            "{field} must not be blank"
        )))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_policy_replaces_empty() {
        assert_eq!(
            EmptyResponsePolicy::Fallback.apply(String::new()),
            NO_ANSWER_FALLBACK
        );
        assert_eq!(
            EmptyResponsePolicy::Fallback.apply("  \n".to_string()),
            NO_ANSWER_FALLBACK
        );
        assert_eq!(
            EmptyResponsePolicy::Fallback.apply("answer".to_string()),
            "answer"
        );
    }

    #[test]
    fn test_pass_through_policy_keeps_empty() {
        assert_eq!(EmptyResponsePolicy::PassThrough.apply(String::new()), "");
        assert_eq!(
            EmptyResponsePolicy::PassThrough.apply("answer".to_string()),
            "answer"
        );
    }

    #[test]
    fn test_require_non_blank() {
        assert!(require_non_blank("value", "field").is_ok());
        assert!(matches!(
            require_non_blank("  ", "field"),
            Err(EngineError::InvalidArgument(msg)) if msg.contains("field")
        ));
    }
}
