//! Ollama Agent Gateway implementation

use super::error::{OllamaError, Result};
use super::protocol::{ChatRequest, ChatResponse, ErrorBody, TagsResponse};
use arena_application::{AgentGateway, GatewayError};
use arena_domain::{AgentContext, AgentProfile, Model, parse_json_object};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

/// Agent gateway backed by an Ollama server
pub struct OllamaGateway {
    client: reqwest::Client,
    base_url: String,
}

impl OllamaGateway {
    /// Create a gateway for `base_url` (e.g. `http://localhost:11434`).
    ///
    /// `timeout` bounds a whole request; `None` leaves it to the caller.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| OllamaError::Client(e.to_string()))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        info!("OllamaGateway initialized for {}", base_url);

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Models the server has pulled (`GET /api/tags`)
    pub async fn list_models(&self) -> Result<Vec<Model>> {
        let url = format!("{}/api/tags", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| OllamaError::from_reqwest(e, &url))?;
        let response = check_status(response).await?;
        let tags: TagsResponse = response
            .json()
            .await
            .map_err(|e| OllamaError::Decode(e.to_string()))?;

        Ok(tags
            .models
            .into_iter()
            .map(|entry| Model::from(entry.name.as_str()))
            .collect())
    }

    async fn chat(
        &self,
        profile: &AgentProfile,
        context: &AgentContext,
        json_mode: bool,
    ) -> Result<String> {
        let url = format!("{}/api/chat", self.base_url);
        let request = ChatRequest::new(profile, context, json_mode);

        debug!(
            role = %profile.role,
            model = %profile.model,
            messages = request.messages.len(),
            json_mode,
            "Sending chat request"
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| OllamaError::from_reqwest(e, &url))?;
        let response = check_status(response).await?;
        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| OllamaError::Decode(e.to_string()))?;

        debug!(role = %profile.role, chars = body.message.content.len(), "Received reply");
        Ok(body.message.content)
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error)
        .unwrap_or(text);
    Err(OllamaError::Status { status, message })
}

#[async_trait]
impl AgentGateway for OllamaGateway {
    async fn generate(
        &self,
        profile: &AgentProfile,
        context: &AgentContext,
    ) -> std::result::Result<String, GatewayError> {
        Ok(self.chat(profile, context, false).await?)
    }

    async fn generate_structured(
        &self,
        profile: &AgentProfile,
        context: &AgentContext,
    ) -> std::result::Result<Value, GatewayError> {
        let text = self.chat(profile, context, true).await?;
        parse_json_object(&text).ok_or_else(|| {
            GatewayError::MalformedReply(arena_domain::core::string::truncate(text.trim(), 200))
        })
    }
}
