//! Core data types shared across the engine

mod cancellation;
mod conversation;
mod message;
mod provider;
mod tool;

pub use cancellation::CancellationToken;
pub use conversation::{ChatTurn, ConversationHistory};
pub use message::{ChatMessage, MessageRole};
pub use provider::{ProviderCapabilities, ProviderSettings, ServiceProvider};
pub use tool::{ToolDescriptor, ToolSelection};
