use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Text typed by the operator. Never empty, including when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChatMessage(String);

impl ChatMessage {
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.is_empty() {
            return Err(DomainError::invalid_input("Please enter a message"));
        }
        Ok(Self(text))
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ChatMessage {
    type Error = DomainError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl From<ChatMessage> for String {
    fn from(message: ChatMessage) -> Self {
        message.0
    }
}

/// Text of the first completion choice returned upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatResponse(String);

impl ChatResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    pub fn into_text(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_is_rejected() {
        let err = ChatMessage::new("").unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(err.to_string(), "Please enter a message");
    }

    #[test]
    fn whitespace_message_is_accepted() {
        let msg = ChatMessage::new("  ").unwrap();
        assert_eq!(msg.text(), "  ");
    }

    #[test]
    fn deserializing_empty_message_fails() {
        let err = serde_json::from_str::<ChatMessage>("\"\"").unwrap_err();
        assert!(err.to_string().contains("Please enter a message"), "{err}");
    }

    #[test]
    fn deserialized_message_goes_through_validation() {
        let msg: ChatMessage = serde_json::from_str("\"Hi\"").unwrap();
        assert_eq!(msg.text(), "Hi");
        assert_eq!(serde_json::to_string(&msg).unwrap(), "\"Hi\"");
    }
}
