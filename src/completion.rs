//! Client for the hosted completion API (Groq's OpenAI-compatible
//! `POST /chat/completions` endpoint).
//!
//! Availability is decided once, at construction: [`CompletionClient::from_env`]
//! returns `None` when the API key environment variable is absent, and the
//! orchestrator runs in basic mode for the whole process. A call failure is
//! returned as an `Err` for the caller to pattern-match — there is no retry
//! and no timeout beyond whatever the HTTP client enforces; one failed call
//! means one basic-mode turn.

use anyhow::{bail, Result};
use serde::Serialize;

use crate::config::CompletionConfig;
use crate::models::ChatTurn;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatTurn],
    temperature: f32,
    max_tokens: u32,
}

/// Handle to the completion service, present only when the key is set.
pub struct CompletionClient {
    http: reqwest::Client,
    api_key: String,
    config: CompletionConfig,
}

impl CompletionClient {
    /// Explicit capability check: `Some` when `GROQ_API_KEY` is set,
    /// `None` otherwise. Never errors — absence of the key is a supported
    /// mode, not a failure.
    pub fn from_env(config: &CompletionConfig) -> Option<Self> {
        let api_key = std::env::var(API_KEY_ENV).ok()?;
        if api_key.trim().is_empty() {
            return None;
        }

        Some(Self {
            http: reqwest::Client::new(),
            api_key,
            config: config.clone(),
        })
    }

    /// Send one completion request and return the generated text.
    pub async fn complete(&self, messages: &[ChatTurn]) -> Result<String> {
        let body = CompletionRequest {
            model: &self.config.model,
            messages,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let url = format!(
            "{}/chat/completions",
            self.config.api_base.trim_end_matches('/')
        );
        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            bail!("Completion API error {}: {}", status, body_text);
        }

        let json: serde_json::Value = response.json().await?;
        parse_completion_response(&json)
    }
}

/// Extract `choices[0].message.content` from the API response JSON.
fn parse_completion_response(json: &serde_json::Value) -> Result<String> {
    let content = json
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str());

    match content {
        Some(text) => Ok(text.to_string()),
        None => bail!("Invalid completion response: missing choices[0].message.content"),
    }
}
