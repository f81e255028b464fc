//! Answerbot configuration system.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, ServiceError};

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            llm: LlmConfig::default(),
            retrieval: RetrievalConfig::default(),
        }
    }
}

impl BotConfig {
    /// Load config from a TOML file. A missing file is not an error —
    /// defaults apply (the API key can still come from the environment).
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| ServiceError::Unknown(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| ServiceError::Unknown(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }
}

/// Completion provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// API key. Falls back to `OPENROUTER_API_KEY` when empty.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Origin tag sent as the `HTTP-Referer` header.
    #[serde(default = "default_referer")]
    pub referer: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_model() -> String { "openai/gpt-4o-mini".into() }
fn default_endpoint() -> String { "https://openrouter.ai/api/v1".into() }
fn default_referer() -> String { "https://answerbot.dev".into() }
fn default_max_tokens() -> u32 { 500 }
fn default_temperature() -> f32 { 0.3 }
fn default_timeout_ms() -> u64 { 30_000 }

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            endpoint: default_endpoint(),
            referer: default_referer(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl LlmConfig {
    /// Resolve the API key: config value first, then environment.
    pub fn resolve_api_key(&self) -> String {
        if !self.api_key.is_empty() {
            self.api_key.clone()
        } else {
            std::env::var("OPENROUTER_API_KEY").unwrap_or_default()
        }
    }
}

/// Retrieval tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Result cap for the answer path.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Relevance floor — results scoring strictly below are dropped.
    #[serde(default = "default_min_score")]
    pub min_score: f32,
}

fn default_top_k() -> usize { 4 }
fn default_min_score() -> f32 { 2.0 }

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            min_score: default_min_score(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BotConfig::default();
        assert_eq!(config.llm.model, "openai/gpt-4o-mini");
        assert_eq!(config.llm.endpoint, "https://openrouter.ai/api/v1");
        assert_eq!(config.llm.max_tokens, 500);
        assert_eq!(config.llm.timeout_ms, 30_000);
        assert_eq!(config.retrieval.top_k, 4);
        assert!((config.retrieval.min_score - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
            [llm]
            model = "anthropic/claude-3-haiku"
            api_key = "sk-test"

            [retrieval]
            top_k = 2
        "#;

        let config: BotConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.llm.model, "anthropic/claude-3-haiku");
        assert_eq!(config.llm.api_key, "sk-test");
        assert_eq!(config.retrieval.top_k, 2);
        // Unspecified fields use defaults.
        assert!((config.llm.temperature - 0.3).abs() < 0.001);
        assert!((config.retrieval.min_score - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_config_missing_fields_use_defaults() {
        let config: BotConfig = toml::from_str("").unwrap();
        assert_eq!(config.llm.model, "openai/gpt-4o-mini");
        assert_eq!(config.retrieval.top_k, 4);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = BotConfig::load_from(Path::new("/nonexistent/answerbot.toml")).unwrap();
        assert_eq!(config.llm.endpoint, "https://openrouter.ai/api/v1");
    }
}
