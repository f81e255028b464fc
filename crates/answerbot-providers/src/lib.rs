//! # Answerbot Providers
//!
//! The HTTPS completion client. One OpenAI-compatible chat-completions
//! call per request, bearer-token auth, a hard timeout that cancels the
//! in-flight request, and HTTP outcomes mapped onto the `ServiceError`
//! taxonomy. No retries — the caller decides whether to re-invoke.

pub mod openrouter;

pub use openrouter::OpenRouterClient;
