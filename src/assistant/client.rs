//! Chat-completions HTTP client for the study assistant

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::config::AssistantConfig;
use crate::error::AssistantError;
use crate::types::{ChatRole, ChatTurn};

use super::Assistant;

/// Instructions prepended to every request
pub const SYSTEM_PROMPT: &str = "You are a helpful AI study assistant for students. Your role is to:
- Help students understand complex academic concepts
- Explain topics in clear, simple language
- Provide study tips and learning strategies
- Answer questions about various subjects
- Encourage critical thinking
- Be supportive and encouraging

Keep responses concise but informative. Use examples when helpful.";

/// Reply used when the service answers without any content
pub const FALLBACK_REPLY: &str = "Sorry, I could not generate a response.";

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatTurn>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Assistant backed by an OpenAI-compatible chat-completions endpoint
#[derive(Debug, Clone)]
pub struct ChatCompletionsAssistant {
    config: AssistantConfig,
    client: reqwest::Client,
}

impl ChatCompletionsAssistant {
    pub fn new(config: AssistantConfig) -> Self {
        if config.api_key.is_none() {
            warn!("assistant API key not set; requests will fail until OPENAI_API_KEY is configured");
        }
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    fn headers(&self) -> Result<HeaderMap, AssistantError> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| AssistantError::NotConfigured("OPENAI_API_KEY is not set".to_string()))?;

        let auth_value = HeaderValue::from_str(&format!("Bearer {}", key))
            .map_err(|_| AssistantError::NotConfigured("API key is not a valid header".to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    fn request_body<'a>(&'a self, history: &[ChatTurn]) -> CompletionRequest<'a> {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(ChatTurn::new(ChatRole::System, SYSTEM_PROMPT));
        messages.extend(history.iter().cloned());

        CompletionRequest {
            model: &self.config.model,
            messages,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }
}

#[async_trait]
impl Assistant for ChatCompletionsAssistant {
    async fn ask(&self, history: &[ChatTurn]) -> Result<String, AssistantError> {
        let headers = self.headers()?;
        let body = self.request_body(history);

        let resp = self
            .client
            .post(&self.config.url)
            .headers(headers)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "assistant request rejected");
            return Err(AssistantError::Upstream {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: CompletionResponse = resp.json().await?;
        Ok(first_content(parsed).unwrap_or_else(|| FALLBACK_REPLY.to_string()))
    }
}

fn first_content(response: CompletionResponse) -> Option<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .filter(|c| !c.trim().is_empty())
}
