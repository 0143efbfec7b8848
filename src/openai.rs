use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tokio::time::{timeout, Duration};

use crate::config::AppConfig;

pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 600;

#[derive(Debug, Error)]
pub enum OpenAiError {
    #[error("OpenAI integration missing: set OPENAI_API_KEY to a valid API key")]
    MissingApiKey,
    #[error("chat completion request timed out")]
    Timeout,
    #[error("failed to send chat completion request: {0}")]
    Request(#[from] reqwest::Error),
    #[error("chat completion request failed ({status}): {body}")]
    UpstreamStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("malformed chat completion reply: {0}")]
    MalformedReply(String),
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    usage: Option<TokenUsage>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// One completed upstream call: the assistant text, token counters, and the
/// untouched reply for pass-through display.
#[derive(Debug)]
pub struct ChatOutcome {
    pub content: String,
    pub usage: TokenUsage,
    pub raw: Value,
}

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    chat_url: String,
    model: String,
    timeout_ms: u64,
}

impl OpenAiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            chat_url: config.chat_url.clone(),
            model: config.model.clone(),
            timeout_ms: config.timeout_ms,
        }
    }

    pub async fn complete(&self, prompt: &str) -> Result<ChatOutcome, OpenAiError> {
        if self.api_key.trim().is_empty() {
            return Err(OpenAiError::MissingApiKey);
        }

        let payload = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let fut = self
            .http
            .post(&self.chat_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send();

        let response = timeout(Duration::from_millis(self.timeout_ms), fut)
            .await
            .map_err(|_| OpenAiError::Timeout)?
            .map_err(OpenAiError::Request)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response body>".to_string());
            return Err(OpenAiError::UpstreamStatus { status, body });
        }

        let raw: Value = response.json().await?;
        let reply: ChatCompletion = serde_json::from_value(raw.clone())
            .map_err(|e| OpenAiError::MalformedReply(e.to_string()))?;

        let first = reply
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| OpenAiError::MalformedReply("reply contained no choices".to_string()))?;

        Ok(ChatOutcome {
            content: first.message.content.unwrap_or_default(),
            usage: reply.usage.unwrap_or_default(),
            raw,
        })
    }
}
