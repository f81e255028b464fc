//! Trait seams between the agent and its collaborators.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ChatMessage, CompletionOutcome, CompletionParams};

/// An LLM completion backend. The agent holds this as a trait object so
/// tests can substitute a scripted implementation for the HTTP client.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Send a conversation to the completion service and return the
    /// reply text, or a typed `ServiceError`.
    async fn complete(
        &self,
        messages: &[ChatMessage],
        params: &CompletionParams,
    ) -> Result<CompletionOutcome>;

    /// Model identifier this service is configured for.
    fn model(&self) -> &str;
}
