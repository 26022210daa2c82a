/// Completion client — the single point of entry for all OpenRouter calls.
///
/// ARCHITECTURAL RULE: No other module may call the completion API directly.
/// All LLM interactions MUST go through this module.
///
/// One prompt, one request, one reply. No retries, no streaming, no timeout
/// override — each user action maps to exactly one upstream call.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1";
/// Default model for all completion calls.
pub const DEFAULT_MODEL: &str = "mistralai/mistral-7b-instruct";
/// Default output-token cap per completion.
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("completion returned no choices")]
    EmptyContent,
}

impl CompletionError {
    /// Formats the error as the text shown in place of an answer.
    /// API errors keep the raw status code and body so the user sees exactly
    /// what the remote service said.
    pub fn render(&self) -> String {
        match self {
            CompletionError::Api { status, body } => format!("Error: {status}\n{body}"),
            other => format!("Error: {other}"),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// The completion backend trait. Implement this to swap backends without
/// touching handler code.
///
/// Carried in `AppState` as `Arc<dyn Completion>`.
#[async_trait]
pub trait Completion: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

/// The OpenRouter-backed completion client used in production.
/// Sends a single user-role message per call and returns the first choice's
/// content unmodified.
#[derive(Clone)]
pub struct OpenRouterClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    http_referer: String,
    app_title: String,
}

impl OpenRouterClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: OPENROUTER_API_URL.to_string(),
            api_key: config.openrouter_api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            http_referer: config.http_referer.clone(),
            app_title: config.app_title.clone(),
        }
    }

    /// Overrides the API base URL. Used by tests to point at a local stub.
    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl Completion for OpenRouterClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("HTTP-Referer", &self.http_referer)
            .header("X-Title", &self.app_title)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let chat: ChatResponse = response.json().await?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(CompletionError::EmptyContent)?;

        debug!("completion succeeded ({} chars)", content.len());

        Ok(content)
    }
}
