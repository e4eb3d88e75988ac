//! The provider seam between Muse and a remote model.

use async_trait::async_trait;

use crate::error::LlmError;
use crate::message::ChatRequest;

/// A chat-completion backend.
///
/// Implementations send the request and return the reply text of the first
/// choice. Anything beyond plain text (tool calls, streaming) is out of scope.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn complete(&self, request: ChatRequest) -> Result<String, LlmError>;

    /// Short label for logs.
    fn name(&self) -> &str {
        "llm"
    }
}
