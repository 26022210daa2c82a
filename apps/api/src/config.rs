use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
/// Every value has a default. A missing OPENROUTER_API_KEY is allowed:
/// requests are still sent and the remote service rejects them.
#[derive(Debug, Clone)]
pub struct Config {
    pub openrouter_api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub http_referer: String,
    pub app_title: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openrouter_api_key: std::env::var("OPENROUTER_API_KEY").unwrap_or_default(),
            model: std::env::var("OPENROUTER_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            max_tokens: std::env::var("OPENROUTER_MAX_TOKENS")
                .unwrap_or_else(|_| DEFAULT_MAX_TOKENS.to_string())
                .parse::<u32>()
                .context("OPENROUTER_MAX_TOKENS must be a number")?,
            http_referer: std::env::var("HTTP_REFERER")
                .unwrap_or_else(|_| "https://yourdomain.com".to_string()),
            app_title: std::env::var("APP_TITLE")
                .unwrap_or_else(|_| "AI Interview Prep".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

#[cfg(test)]
impl Config {
    /// A fixed config for tests — no environment reads.
    pub fn for_tests() -> Self {
        Config {
            openrouter_api_key: "test-key".to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            http_referer: "https://yourdomain.com".to_string(),
            app_title: "AI Interview Prep".to_string(),
            port: 0,
            rust_log: "info".to_string(),
        }
    }
}
