//! Ollama API request and response types.

use serde::{Deserialize, Serialize};

// =============================================================================
// Chat
// =============================================================================

/// Chat request for `POST /api/chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model to use (e.g., "llama3.1:latest")
    pub model: String,

    /// Conversation messages
    pub messages: Vec<Message>,

    /// Always false: the client waits for the whole reply
    pub stream: bool,

    /// Sampling options passed straight through to the runner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ChatOptions>,
}

impl ChatRequest {
    /// Create a new non-streaming chat request with the given model.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            stream: false,
            options: None,
        }
    }

    /// Add a message to the conversation.
    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Set temperature.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.options
            .get_or_insert_with(ChatOptions::default)
            .temperature = Some(temperature);
        self
    }
}

/// Runner options.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChatOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// Chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Role: "system", "user", "assistant"
    pub role: String,

    /// Message content
    pub content: String,
}

impl Message {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat response.
#[derive(Debug, Clone)]
pub struct ChatResponse {
    /// Assistant reply
    pub content: String,

    /// Model that produced the reply
    pub model: String,

    /// Tokens generated, when the service reports it
    pub eval_count: Option<u32>,
}

/// Raw chat response from the API (for internal parsing).
#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponseRaw {
    #[serde(default)]
    pub model: String,
    pub message: Option<ChatMessageResponse>,
    #[serde(default)]
    pub eval_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatMessageResponse {
    pub content: String,
}

/// Error body returned by the service (`{"error": "..."}`).
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

// =============================================================================
// Tags
// =============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct TagsResponse {
    #[serde(default)]
    pub models: Vec<ModelTag>,
}

/// An installed model as reported by `GET /api/tags`.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelTag {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_serializes_without_streaming() {
        let request = ChatRequest::new("llama3.1:latest").message(Message::user("hi"));
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "llama3.1:latest");
        assert_eq!(json["stream"], false);
        assert_eq!(json["messages"][0]["role"], "user");
        assert!(json.get("options").is_none());
    }

    #[test]
    fn test_temperature_sets_options() {
        let request = ChatRequest::new("m").temperature(0.2);
        let json = serde_json::to_value(&request).unwrap();

        let temperature = json["options"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.2).abs() < 1e-6);
    }
}
