//! # Answerbot Core
//!
//! Shared foundation for the Answerbot support pipeline: chat and
//! knowledge types, the configuration system, the `ServiceError`
//! taxonomy, and the `CompletionService` trait that decouples the
//! agent from any concrete LLM provider.

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use error::{Result, ServiceError};
