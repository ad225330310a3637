//! Tool-augmented response pipeline
//!
//! One pipeline run is a request-scoped flow with no shared mutable state:
//! validate, serialize, discover, select, optionally invoke, synthesize.
//! Log lines at the step boundaries carry only the plugin and function
//! identifiers plus counts; the request payload, tool arguments, and tool
//! results never reach the log.

use std::sync::Arc;

use serde::Serialize;

use crate::logging::Logger;
use crate::providers::ChatClient;
use crate::sanitize::sanitize_error_text;
use crate::toolserver::ToolServer;
use crate::types::{CancellationToken, ChatMessage, ToolDescriptor};

use super::error::{EngineError, EngineResult};
use super::selection::parse_tool_selection;
use super::{require_non_blank, EmptyResponsePolicy};

/// Returned instead of an empty synthesis reply
pub const NO_ANSWER_FALLBACK: &str =
    "I was unable to produce an answer for this request. Please try again.";

/// Single-shot agent pipeline: discover, select, invoke, synthesize
pub struct ResponseEngine {
    chat: Arc<dyn ChatClient>,
    tools: Arc<dyn ToolServer>,
    logger: Arc<dyn Logger>,
}

impl ResponseEngine {
    /// Create an engine over a chat client and a tool server
    pub fn new(
        chat: Arc<dyn ChatClient>,
        tools: Arc<dyn ToolServer>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            chat,
            tools,
            logger,
        }
    }

    /// Produce a tool-augmented answer for a typed request
    ///
    /// Fail-fast, single attempt: any step error is sanitized, logged once,
    /// and returned. Cancelling the token stops every in-flight sub-call.
    pub async fn generate<R: Serialize + Sync>(
        &self,
        request: &R,
        server_url: &str,
        plugin_name: &str,
        function_name: &str,
        cancel: CancellationToken,
    ) -> EngineResult<String> {
        match self
            .run(request, server_url, plugin_name, function_name, cancel)
            .await
        {
            Ok(answer) => Ok(answer),
            Err(err) => {
                self.logger.error(&format!(
                    "[ResponseEngine] pipeline failed: plugin={}, function={}, error={}",
                    plugin_name,
                    function_name,
                    sanitize_error_text(&err.to_string())
                ));
                Err(err)
            }
        }
    }

    async fn run<R: Serialize + Sync>(
        &self,
        request: &R,
        server_url: &str,
        plugin_name: &str,
        function_name: &str,
        cancel: CancellationToken,
    ) -> EngineResult<String> {
        require_non_blank(plugin_name, "pluginName")?;
        require_non_blank(function_name, "functionName")?;
        require_non_blank(server_url, "serverUrl")?;

        let serialized = serde_json::to_string(request).map_err(EngineError::RequestEncoding)?;

        self.logger.info(&format!(
            "[ResponseEngine] discovering tools: plugin={plugin_name}, function={function_name}"
        ));
        let catalog = self.tools.list_tools(server_url, &cancel).await?;
        self.logger.info(&format!(
            "[ResponseEngine] discovery complete: plugin={plugin_name}, function={function_name}, tools={}",
            catalog.len()
        ));

        let selection_messages = vec![
            ChatMessage::system(selection_prompt(&render_catalog(&catalog))),
            ChatMessage::user(serialized.clone()),
        ];
        let selection_reply = self
            .chat
            .complete(selection_messages, cancel.clone())
            .await?;
        let selection = parse_tool_selection(&selection_reply)?;
        self.logger.info(&format!(
            "[ResponseEngine] selection complete: plugin={plugin_name}, function={function_name}, tool_selected={}",
            selection.is_tool_selected()
        ));

        let tool_result = if selection.is_tool_selected() {
            let result = self
                .tools
                .invoke_tool(
                    server_url,
                    selection.tool_name.trim(),
                    selection.tool_arguments.clone(),
                    &cancel,
                )
                .await?;
            self.logger.info(&format!(
                "[ResponseEngine] invocation complete: plugin={plugin_name}, function={function_name}"
            ));
            Some((selection.tool_name.trim().to_string(), result))
        } else {
            // No tool applies: the tool server is not contacted again
            None
        };

        let synthesis_messages = vec![
            ChatMessage::system(synthesis_prompt(tool_result.as_ref())),
            ChatMessage::user(serialized),
        ];
        let answer = self.chat.complete(synthesis_messages, cancel).await?;
        self.logger.info(&format!(
            "[ResponseEngine] synthesis complete: plugin={plugin_name}, function={function_name}"
        ));

        Ok(EmptyResponsePolicy::Fallback.apply(answer))
    }
}

/// One line per tool, `- name: description`
fn render_catalog(tools: &[ToolDescriptor]) -> String {
    if tools.is_empty() {
        return "(no tools available)".to_string();
    }
    tools
        .iter()
        .map(|tool| format!("- {}: {}", tool.name, tool.description))
        .collect::<Vec<_>>()
        .join("\n")
}

fn selection_prompt(catalog: &str) -> String {
    format!(
        "You decide whether an external tool is needed to handle the user's input.\n\
         Available tools:\n\
         {catalog}\n\
         Reply with a single JSON object of the form \
         {{\"toolName\": \"...\", \"toolArguments\": {{...}}}}. \
         Use an empty toolName when none of the tools applies. Reply with JSON only."
    )
}

fn synthesis_prompt(tool_result: Option<&(String, String)>) -> String {
    match tool_result {
        Some((name, result)) => format!(
            "Answer the user's input helpfully and concisely. \
             The tool \"{name}\" was executed for this request; use its result \
             below as additional context:\n{result}"
        ),
        None => "Answer the user's input helpfully and concisely.".to_string(),
    }
}
