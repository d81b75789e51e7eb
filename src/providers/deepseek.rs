use crate::error::LlmError;
use crate::providers::{http_client::build_provider_client, traits::Provider};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";

const MAX_API_ERROR_CHARS: usize = 200;

/// OpenAI-compatible chat-completion client for the DeepSeek API.
pub struct DeepSeekProvider {
    /// Pre-computed `"Bearer <key>"` header value (avoids `format!` per request).
    cached_auth_header: Option<String>,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
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
    content: Option<String>,
}

impl DeepSeekProvider {
    pub fn new(api_key: Option<&str>, timeout_secs: u64) -> Self {
        Self {
            cached_auth_header: api_key.map(|k| format!("Bearer {k}")),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: build_provider_client(timeout_secs),
        }
    }

    /// Point the client at a different endpoint (local proxies, tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn build_request(prompt: &str, model: &str, temperature: f64) -> ChatRequest {
        ChatRequest {
            model: model.to_string(),
            messages: vec![Message {
                role: "user",
                content: prompt.to_string(),
            }],
            temperature,
        }
    }

    fn extract_text(chat_response: &ChatResponse) -> anyhow::Result<String> {
        chat_response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .ok_or_else(|| anyhow::anyhow!("No response from DeepSeek"))
    }

    async fn call_api(&self, request: &ChatRequest) -> anyhow::Result<ChatResponse> {
        let auth_header = self.cached_auth_header.as_ref().ok_or(LlmError::Auth {
            provider: "deepseek".to_string(),
        })?;

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", auth_header)
            .json(&request)
            .send()
            .await
            .context("DeepSeek request failed")?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        response
            .json()
            .await
            .context("DeepSeek response JSON decode failed")
    }
}

/// Map a non-2xx response to a readable error with a bounded body snippet.
async fn api_error(response: reqwest::Response) -> anyhow::Error {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let snippet: String = body.chars().take(MAX_API_ERROR_CHARS).collect();
    LlmError::Request {
        provider: "deepseek".to_string(),
        message: format!("{status}: {snippet}"),
    }
    .into()
}

#[async_trait]
impl Provider for DeepSeekProvider {
    async fn complete(
        &self,
        prompt: &str,
        model: &str,
        temperature: f64,
    ) -> anyhow::Result<String> {
        let request = Self::build_request(prompt, model, temperature);
        let chat_response = self.call_api(&request).await?;
        Self::extract_text(&chat_response)
    }
}
