//! OpenAI-compatible chat-completion client over HTTP.

use async_trait::async_trait;

use crate::config::LlmConfig;
use crate::error::LlmError;
use crate::message::{ChatRequest, ChatResponse};
use crate::provider::LlmProvider;

/// Maximum number of error-body bytes kept in `LlmError::Api`.
const ERROR_BODY_LIMIT: usize = 2048;

pub struct OpenAiClient {
    http: reqwest::Client,
    url: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        config.validate()?;
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            url: config.completions_url(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl LlmProvider for OpenAiClient {
    async fn complete(&self, request: ChatRequest) -> Result<String, LlmError> {
        tracing::info!(
            model = %request.model,
            messages = request.messages.len(),
            "Sending chat completion request"
        );

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Chat completion failed");
            let mut body = body;
            if body.len() > ERROR_BODY_LIMIT {
                let mut cut = ERROR_BODY_LIMIT;
                while !body.is_char_boundary(cut) {
                    cut -= 1;
                }
                body.truncate(cut);
            }
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)?;
        let text = parsed.first_text().to_string();
        tracing::debug!(chars = text.chars().count(), "Chat completion received");
        Ok(text)
    }

    fn name(&self) -> &str {
        "openai"
    }
}
