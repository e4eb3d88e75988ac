//! Provider construction from configuration.

use std::sync::Arc;

use anyhow::Context;

use crate::config::LlmConfig;
use crate::openai::OpenAiClient;
use crate::provider::LlmProvider;

/// Build the shared client used for the lifetime of the application.
pub fn create_llm_client(config: &LlmConfig) -> anyhow::Result<Arc<dyn LlmProvider>> {
    let client = OpenAiClient::new(config)
        .with_context(|| format!("failed to create client for {}", config.base_url))?;
    tracing::info!("Created LLM client for model: {} ({})", config.model, client.url());
    Ok(Arc::new(client))
}
