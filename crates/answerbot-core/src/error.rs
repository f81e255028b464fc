//! Answerbot error taxonomy.
//!
//! A single tagged enum so every call site can branch exhaustively on
//! kind. Each variant carries internal diagnostic detail where useful;
//! the HTTP status and the user-facing message are derived via
//! [`ServiceError::status`] and [`ServiceError::user_message`] so that
//! internal detail is never shown to the end user.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The user message was missing or blank.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The completion call exceeded its timeout budget and was cancelled.
    #[error("completion call timed out after {0}ms")]
    Timeout(u64),

    /// The provider rejected our credentials (401/403).
    #[error("provider authentication failed (status {0})")]
    AuthFailure(u16),

    /// The provider rejected the request as malformed (400).
    #[error("provider rejected request: {0}")]
    BadUpstreamRequest(String),

    /// The provider is rate limiting us (429).
    #[error("provider rate limit hit")]
    RateLimited,

    /// Any other non-2xx provider status.
    #[error("provider error (status {status}): {detail}")]
    UpstreamError { status: u16, detail: String },

    /// Required credential absent from configuration.
    #[error("missing configuration: {0}")]
    ConfigMissing(String),

    /// Unclassified failure (transport errors, malformed responses).
    #[error("unexpected error: {0}")]
    Unknown(String),
}

impl ServiceError {
    /// Machine status code surfaced to the caller.
    pub fn status(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::Timeout(_) => 504,
            Self::AuthFailure(_) => 500,
            Self::BadUpstreamRequest(_) => 400,
            Self::RateLimited => 429,
            Self::UpstreamError { .. } => 500,
            Self::ConfigMissing(_) => 500,
            Self::Unknown(_) => 500,
        }
    }

    /// User-facing message. Never includes upstream bodies or internal
    /// diagnostics.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "Please provide a message.",
            Self::Timeout(_) => "The request took too long. Please try again.",
            Self::AuthFailure(_) => "The assistant is misconfigured. Please contact support.",
            Self::BadUpstreamRequest(_) => "Sorry, I couldn't process that message.",
            Self::RateLimited => "The service is busy right now. Please try again in a moment.",
            Self::UpstreamError { .. } => "Something went wrong. Please try again.",
            Self::ConfigMissing(_) => "The assistant is misconfigured. Please contact support.",
            Self::Unknown(_) => "Something went wrong. Please try again.",
        }
    }

    /// Whether the caller may reasonably retry with the same inputs.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout(_) | Self::RateLimited | Self::UpstreamError { .. }
        )
    }
}
