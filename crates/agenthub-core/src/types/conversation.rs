//! Stored conversation history, as supplied by the persistence collaborator

use serde::{Deserialize, Serialize};

/// One stored turn of a conversation
///
/// The role is kept as the raw stored string; the conversation engine matches
/// it against `user`/`assistant` case-insensitively and drops anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Stored role value
    pub role: String,
    /// Turn content
    pub content: String,
}

impl ChatTurn {
    /// Create a turn with an arbitrary role
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create a user turn
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    /// Create an assistant turn
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }
}

/// Ordered conversation history for one conversation and user
///
/// Owned and mutated by the external persistence layer; this crate only
/// reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationHistory {
    /// Identifier of the stored conversation
    pub conversation_id: String,
    /// Name of the user the conversation belongs to
    pub user_name: String,
    /// Stored turns, oldest first
    #[serde(default)]
    pub turns: Vec<ChatTurn>,
}

impl ConversationHistory {
    /// Create an empty history
    pub fn new(conversation_id: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            user_name: user_name.into(),
            turns: Vec::new(),
        }
    }

    /// Attach stored turns
    pub fn with_turns(mut self, turns: Vec<ChatTurn>) -> Self {
        self.turns = turns;
        self
    }

    /// Number of stored turns
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether the history has no turns
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_builder() {
        let history = ConversationHistory::new("conv-1", "alice")
            .with_turns(vec![ChatTurn::user("Hi"), ChatTurn::assistant("Hello!")]);

        assert_eq!(history.conversation_id, "conv-1");
        assert_eq!(history.user_name, "alice");
        assert_eq!(history.len(), 2);
        assert!(!history.is_empty());
    }

    #[test]
    fn test_turn_roles_are_raw_strings() {
        let turn = ChatTurn::new("Assistant", "mixed case survives storage");
        assert_eq!(turn.role, "Assistant");
    }
}
