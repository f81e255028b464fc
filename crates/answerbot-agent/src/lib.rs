//! # Answerbot Agent
//!
//! The answer entry point consumed by the UI collaborator. One call
//! runs the whole pipeline: tokenize and rank the corpus, assemble the
//! grounding context, build the constrained conversation, and dispatch
//! it to the completion service.
//!
//! The corpus is an immutable snapshot taken at construction; history
//! is an immutable per-call snapshot owned by the caller. No state is
//! held between calls, so one agent serves concurrent requests without
//! locking.

pub mod conversation;

use serde::{Deserialize, Serialize};

use answerbot_core::config::BotConfig;
use answerbot_core::error::{Result, ServiceError};
use answerbot_core::traits::CompletionService;
use answerbot_core::types::{ChatMessage, CompletionParams, KnowledgeChunk};
use answerbot_providers::OpenRouterClient;
use answerbot_retrieval::{KnowledgeBase, build_context};

use conversation::{DEFAULT_MAX_HISTORY, build_conversation};

/// One question from the UI.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerRequest {
    pub message: String,
    /// Prior conversation, already trimmed by the caller's own policy.
    #[serde(default)]
    pub history: Vec<ChatMessage>,
    pub organization_name: String,
}

/// The reply handed back to the UI.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerResponse {
    pub reply: String,
    /// Whether the answer was grounded in retrieved documentation.
    pub has_context: bool,
    pub model: String,
}

/// The Answerbot agent. Holds the knowledge base and the completion
/// backend; both are read-only for the agent's lifetime.
pub struct Agent {
    config: BotConfig,
    knowledge: KnowledgeBase,
    completion: Box<dyn CompletionService>,
}

impl Agent {
    /// Create an agent over a corpus, talking to the configured
    /// completion endpoint.
    pub fn new(config: BotConfig, corpus: Vec<KnowledgeChunk>) -> Self {
        let completion = Box::new(OpenRouterClient::new(&config.llm));
        Self::with_completion(config, corpus, completion)
    }

    /// Create an agent with an explicit completion backend. This is the
    /// seam tests use to substitute a scripted service.
    pub fn with_completion(
        config: BotConfig,
        corpus: Vec<KnowledgeChunk>,
        completion: Box<dyn CompletionService>,
    ) -> Self {
        Self {
            config,
            knowledge: KnowledgeBase::new(corpus),
            completion,
        }
    }

    /// Answer one question. Retrieval and formatting never fail — an
    /// unanswerable question degrades to the refusal prompt. Only the
    /// completion call and input validation can produce errors.
    pub async fn answer(&self, request: &AnswerRequest) -> Result<AnswerResponse> {
        if request.message.trim().is_empty() {
            return Err(ServiceError::InvalidInput(
                "message must be a non-empty string".into(),
            ));
        }

        let results = self.knowledge.search(
            &request.message,
            self.config.retrieval.top_k,
            self.config.retrieval.min_score,
        );
        let context = build_context(&results);

        let built = build_conversation(
            &request.message,
            &context,
            &request.history,
            DEFAULT_MAX_HISTORY,
            &request.organization_name,
        );
        tracing::debug!(
            "Answering with {} document(s), has_context={}",
            results.len(),
            built.has_context
        );

        let params = CompletionParams {
            max_tokens: self.config.llm.max_tokens,
            temperature: self.config.llm.temperature,
            timeout_ms: self.config.llm.timeout_ms,
            organization: request.organization_name.clone(),
        };
        let outcome = self.completion.complete(&built.messages, &params).await?;

        Ok(AnswerResponse {
            reply: outcome.reply,
            has_context: built.has_context,
            model: outcome.model,
        })
    }
}
