use serde::Serialize;

use super::ChatMessage;

pub const COMPLETION_MODEL: &str = "gpt-3.5-turbo";
pub const COMPLETION_TEMPERATURE: f64 = 0.7;
/// Kept small to stay under upstream token-rate limits.
pub const COMPLETION_MAX_TOKENS: u32 = 150;

/// Chat-completions request body. Every field except the message is fixed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<CompletionMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: String,
}

impl CompletionRequest {
    pub fn for_message(message: &ChatMessage) -> Self {
        Self {
            model: COMPLETION_MODEL.to_string(),
            messages: vec![CompletionMessage {
                role: "user".to_string(),
                content: message.text().to_string(),
            }],
            temperature: COMPLETION_TEMPERATURE,
            max_tokens: COMPLETION_MAX_TOKENS,
        }
    }

    /// Content of the (single) user message.
    pub fn user_content(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == "user")
            .map(|m| m.content.as_str())
    }
}
