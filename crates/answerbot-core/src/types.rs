//! Core data types shared across the pipeline.

use serde::{Deserialize, Serialize};

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One message in a conversation. Serializes to the standard
/// OpenAI-compatible wire shape `{"role": "...", "content": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// Knowledge document category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Services,
    Support,
    Pricing,
    Process,
    Security,
    Faq,
    Legal,
    Contact,
}

/// One indexed knowledge document. Created once at startup from the
/// static corpus and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeChunk {
    /// Unique ID across the corpus.
    pub id: String,
    pub title: String,
    pub category: Category,
    pub content: String,
    /// Pre-extracted lowercase keywords, in corpus order.
    pub keywords: Vec<String>,
}

/// Sampling parameters for a completion call.
#[derive(Debug, Clone)]
pub struct CompletionParams {
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_ms: u64,
    /// Organization name, used for the identifying `X-Title` header.
    pub organization: String,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            max_tokens: 500,
            temperature: 0.3,
            timeout_ms: 30_000,
            organization: String::new(),
        }
    }
}

/// Successful outcome of a completion call.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionOutcome {
    /// Reply text extracted from the first completion choice.
    pub reply: String,
    /// Model identifier that produced the reply.
    pub model: String,
}
