//! Request and response bodies for Ollama's `/api/chat` and `/api/tags`.

use arena_domain::{AgentContext, AgentProfile, Message, Role};
use serde::{Deserialize, Serialize};

/// `POST /api/chat` request (non-streaming)
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
    /// `"json"` constrains the reply to a JSON document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<&'static str>,
    pub options: ChatOptions,
}

impl ChatRequest {
    pub fn new(profile: &AgentProfile, context: &AgentContext, json_mode: bool) -> Self {
        Self {
            model: profile.model.to_string(),
            messages: context.to_messages().iter().map(ChatMessage::from).collect(),
            stream: false,
            format: json_mode.then_some("json"),
            options: ChatOptions {
                temperature: profile.temperature,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl From<&Message> for ChatMessage {
    fn from(message: &Message) -> Self {
        let role = match message.role {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        Self {
            role: role.to_string(),
            content: message.content.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatOptions {
    pub temperature: f32,
}

/// `POST /api/chat` response
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub message: ChatMessage,
    #[serde(default)]
    pub done: bool,
}

/// Error body Ollama sends with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `GET /api/tags` response
#[derive(Debug, Clone, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub models: Vec<TagEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagEntry {
    pub name: String,
}
