//! Conversation-aware chat completion
//!
//! The chatbot sibling of the tool-augmented pipeline: stored history plus a
//! new user message, one completion call, no tool integration. The provider
//! text comes back verbatim, empty string included.

use std::sync::Arc;

use crate::logging::Logger;
use crate::providers::ChatClient;
use crate::sanitize::sanitize_error_text;
use crate::types::{CancellationToken, ChatMessage, ConversationHistory};

use super::error::EngineResult;
use super::{require_non_blank, EmptyResponsePolicy};

/// Multi-turn chat completion over stored history
pub struct ConversationEngine {
    chat: Arc<dyn ChatClient>,
    logger: Arc<dyn Logger>,
}

impl ConversationEngine {
    /// Create an engine over a chat client
    pub fn new(chat: Arc<dyn ChatClient>, logger: Arc<dyn Logger>) -> Self {
        Self { chat, logger }
    }

    /// Answer a new user message in the context of a stored conversation
    ///
    /// The history may be empty; the message and persona prompt may not.
    /// Errors are sanitized, logged once, and returned; nothing is swallowed.
    pub async fn complete(
        &self,
        history: &ConversationHistory,
        new_message: &str,
        system_prompt: &str,
        cancel: CancellationToken,
    ) -> EngineResult<String> {
        match self.run(history, new_message, system_prompt, cancel).await {
            Ok(text) => Ok(text),
            Err(err) => {
                self.logger.error(&format!(
                    "[ConversationEngine] completion failed: conversation={}, error={}",
                    history.conversation_id,
                    sanitize_error_text(&err.to_string())
                ));
                Err(err)
            }
        }
    }

    async fn run(
        &self,
        history: &ConversationHistory,
        new_message: &str,
        system_prompt: &str,
        cancel: CancellationToken,
    ) -> EngineResult<String> {
        require_non_blank(new_message, "newMessage")?;
        require_non_blank(system_prompt, "systemPrompt")?;

        let messages = build_messages(history, new_message, system_prompt);
        self.logger.info(&format!(
            "[ConversationEngine] completing: conversation={}, turns={}, messages={}",
            history.conversation_id,
            history.len(),
            messages.len()
        ));

        let text = self.chat.complete(messages, cancel).await?;

        self.logger.info(&format!(
            "[ConversationEngine] completion finished: conversation={}",
            history.conversation_id
        ));

        Ok(EmptyResponsePolicy::PassThrough.apply(text))
    }
}

/// Build the ordered message list for one completion
///
/// Stored roles are matched case-insensitively against `user`/`assistant`;
/// turns with any other role are dropped.
pub(crate) fn build_messages(
    history: &ConversationHistory,
    new_message: &str,
    system_prompt: &str,
) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage::system(system_prompt));

    for turn in &history.turns {
        match turn.role.trim().to_lowercase().as_str() {
            "user" => messages.push(ChatMessage::user(turn.content.clone())),
            "assistant" => messages.push(ChatMessage::assistant(turn.content.clone())),
            _ => {}
        }
    }

    messages.push(ChatMessage::user(new_message));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::NoOpLogger;
    use crate::providers::MockChatClient;
    use crate::types::ChatTurn;

    #[test]
    fn test_message_list_order() {
        // Scenario C: two stored turns plus the new message
        let history = ConversationHistory::new("conv-1", "alice")
            .with_turns(vec![ChatTurn::user("Hi"), ChatTurn::assistant("Hello!")]);

        let messages = build_messages(&history, "How are you?", "Be helpful");

        assert_eq!(
            messages,
            vec![
                ChatMessage::system("Be helpful"),
                ChatMessage::user("Hi"),
                ChatMessage::assistant("Hello!"),
                ChatMessage::user("How are you?"),
            ]
        );
    }

    #[test]
    fn test_roles_match_case_insensitively() {
        let history = ConversationHistory::new("conv-1", "alice").with_turns(vec![
            ChatTurn::new("User", "Hi"),
            ChatTurn::new("ASSISTANT", "Hello!"),
        ]);

        let messages = build_messages(&history, "next", "prompt");
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[1], ChatMessage::user("Hi"));
        assert_eq!(messages[2], ChatMessage::assistant("Hello!"));
    }

    #[test]
    fn test_unknown_roles_are_dropped() {
        let history = ConversationHistory::new("conv-1", "alice").with_turns(vec![
            ChatTurn::new("system", "injected"),
            ChatTurn::new("tool", "noise"),
            ChatTurn::user("Hi"),
        ]);

        let messages = build_messages(&history, "next", "prompt");
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1], ChatMessage::user("Hi"));
    }

    #[test]
    fn test_empty_history_is_fine() {
        let history = ConversationHistory::new("conv-1", "alice");
        let messages = build_messages(&history, "first message", "prompt");
        assert_eq!(messages.len(), 2);
    }

    #[tokio::test]
    async fn test_completion_returns_provider_text_verbatim() {
        let chat = Arc::new(MockChatClient::fixed("I'm doing well!"));
        let engine = ConversationEngine::new(chat, Arc::new(NoOpLogger));

        let history = ConversationHistory::new("conv-1", "alice")
            .with_turns(vec![ChatTurn::user("Hi"), ChatTurn::assistant("Hello!")]);
        let answer = engine
            .complete(&history, "How are you?", "Be helpful", CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(answer, "I'm doing well!");
    }

    #[tokio::test]
    async fn test_empty_provider_reply_passes_through() {
        // Unlike the tool-augmented pipeline, no fallback is substituted here
        let chat = Arc::new(MockChatClient::empty());
        let engine = ConversationEngine::new(chat, Arc::new(NoOpLogger));

        let history = ConversationHistory::new("conv-1", "alice");
        let answer = engine
            .complete(&history, "Hi", "Be helpful", CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(answer, "");
    }

    #[tokio::test]
    async fn test_blank_message_or_prompt_is_rejected() {
        let chat = Arc::new(MockChatClient::fixed("unused"));
        let engine = ConversationEngine::new(chat.clone(), Arc::new(NoOpLogger));

        let history = ConversationHistory::new("conv-1", "alice");
        assert!(engine
            .complete(&history, "  ", "prompt", CancellationToken::new())
            .await
            .is_err());
        assert!(engine
            .complete(&history, "message", "\t", CancellationToken::new())
            .await
            .is_err());
        assert_eq!(chat.call_count(), 0);
    }
}
