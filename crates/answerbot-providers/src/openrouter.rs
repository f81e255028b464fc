//! OpenRouter-style chat-completions client.
//!
//! A single struct that talks to any OpenAI-compatible chat endpoint.
//! Credentials and the model identifier are injected via `LlmConfig`
//! rather than read from global state, so the retrieval and prompt
//! logic never touch configuration sourcing.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};

use answerbot_core::config::LlmConfig;
use answerbot_core::error::{Result, ServiceError};
use answerbot_core::traits::CompletionService;
use answerbot_core::types::{ChatMessage, CompletionOutcome, CompletionParams};

/// Substituted when a 2xx response carries no reply text. An empty
/// successful completion is not an error.
const FALLBACK_REPLY: &str = "Sorry, I could not generate a response. Please try again.";

pub struct OpenRouterClient {
    api_key: String,
    model: String,
    base_url: String,
    /// Origin tag sent as `HTTP-Referer`.
    referer: String,
    client: reqwest::Client,
}

impl OpenRouterClient {
    /// Create a client from configuration. The API key falls back to
    /// `OPENROUTER_API_KEY`; its absence is only an error at call time.
    pub fn new(config: &LlmConfig) -> Self {
        Self {
            api_key: config.resolve_api_key(),
            model: config.model.clone(),
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            referer: config.referer.clone(),
            client: reqwest::Client::new(),
        }
    }

    /// `X-Title` header: organization name plus a fixed suffix.
    fn title_header(organization: &str) -> String {
        if organization.trim().is_empty() {
            "Support Assistant".to_string()
        } else {
            format!("{} Support Assistant", organization.trim())
        }
    }
}

/// Map a non-success provider status onto the error taxonomy. The body
/// is kept as internal diagnostic detail only.
fn classify_status(status: u16, body: String) -> ServiceError {
    match status {
        401 | 403 => ServiceError::AuthFailure(status),
        400 => ServiceError::BadUpstreamRequest(body),
        429 => ServiceError::RateLimited,
        _ => ServiceError::UpstreamError { status, detail: body },
    }
}

#[async_trait]
impl CompletionService for OpenRouterClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        params: &CompletionParams,
    ) -> Result<CompletionOutcome> {
        if self.api_key.is_empty() {
            return Err(ServiceError::ConfigMissing("llm.api_key".into()));
        }

        let body = json!({
            "model": self.model,
            "messages": messages,
            "max_tokens": params.max_tokens,
            "temperature": params.temperature,
        });

        let url = format!("{}/chat/completions", self.base_url);
        let request = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", Self::title_header(&params.organization))
            .json(&body);

        // The whole exchange runs under one timer. When it elapses the
        // future is dropped, which cancels the in-flight request — the
        // only client-initiated cancellation path.
        let exchange = async {
            let resp = request
                .send()
                .await
                .map_err(|e| ServiceError::Unknown(format!("connection failed ({url}): {e}")))?;

            if !resp.status().is_success() {
                let status = resp.status().as_u16();
                let text = resp.text().await.unwrap_or_default();
                tracing::warn!("Completion API error {status}: {text}");
                return Err(classify_status(status, text));
            }

            let json: Value = resp
                .json()
                .await
                .map_err(|e| ServiceError::Unknown(format!("malformed response body: {e}")))?;

            let reply = json["choices"][0]["message"]["content"]
                .as_str()
                .filter(|s| !s.is_empty())
                .map(String::from)
                .unwrap_or_else(|| FALLBACK_REPLY.to_string());

            Ok(CompletionOutcome { reply, model: self.model.clone() })
        };

        match tokio::time::timeout(Duration::from_millis(params.timeout_ms), exchange).await {
            Ok(outcome) => outcome,
            Err(_) => {
                tracing::warn!("Completion call cancelled after {}ms", params.timeout_ms);
                Err(ServiceError::Timeout(params.timeout_ms))
            }
        }
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn test_config(endpoint: &str) -> LlmConfig {
        LlmConfig {
            api_key: "sk-test".into(),
            endpoint: endpoint.into(),
            ..LlmConfig::default()
        }
    }

    fn test_params() -> CompletionParams {
        CompletionParams {
            timeout_ms: 2_000,
            organization: "Acme Studio".into(),
            ..CompletionParams::default()
        }
    }

    /// Serve one connection with a canned HTTP response, then close.
    async fn spawn_one_shot(response: &'static str) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf).await;
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        });
        addr
    }

    #[test]
    fn test_status_classification() {
        assert!(matches!(
            classify_status(401, String::new()),
            ServiceError::AuthFailure(401)
        ));
        assert!(matches!(
            classify_status(403, String::new()),
            ServiceError::AuthFailure(403)
        ));
        assert!(matches!(
            classify_status(400, String::new()),
            ServiceError::BadUpstreamRequest(_)
        ));
        assert!(matches!(classify_status(429, String::new()), ServiceError::RateLimited));
        assert!(matches!(
            classify_status(503, String::new()),
            ServiceError::UpstreamError { status: 503, .. }
        ));
    }

    #[test]
    fn test_title_header() {
        assert_eq!(
            OpenRouterClient::title_header("Acme Studio"),
            "Acme Studio Support Assistant"
        );
        assert_eq!(OpenRouterClient::title_header("  "), "Support Assistant");
    }

    #[tokio::test]
    async fn test_successful_completion() {
        // Body is delimited by connection close, no content-length needed.
        let addr = spawn_one_shot(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\nconnection: close\r\n\r\n{\"choices\":[{\"message\":{\"role\":\"assistant\",\"content\":\"Projects start at $2,500.\"}}]}",
        )
        .await;

        let client = OpenRouterClient::new(&test_config(&format!("http://{addr}")));
        let outcome = client
            .complete(&[ChatMessage::user("how much?")], &test_params())
            .await
            .unwrap();
        assert_eq!(outcome.reply, "Projects start at $2,500.");
        assert_eq!(outcome.model, "openai/gpt-4o-mini");
    }

    #[tokio::test]
    async fn test_empty_choice_substitutes_fallback() {
        let addr = spawn_one_shot(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\nconnection: close\r\n\r\n{\"choices\":[]}",
        )
        .await;

        let client = OpenRouterClient::new(&test_config(&format!("http://{addr}")));
        let outcome = client
            .complete(&[ChatMessage::user("hello")], &test_params())
            .await
            .unwrap();
        assert_eq!(outcome.reply, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_rate_limit_maps_to_typed_error_without_leaking_body() {
        let addr = spawn_one_shot(
            "HTTP/1.1 429 Too Many Requests\r\ncontent-type: text/plain\r\nconnection: close\r\n\r\nupstream-flood",
        )
        .await;

        let client = OpenRouterClient::new(&test_config(&format!("http://{addr}")));
        let err = client
            .complete(&[ChatMessage::user("hello")], &test_params())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::RateLimited));
        assert_eq!(err.status(), 429);
        assert!(!err.user_message().contains("upstream-flood"));
    }

    #[tokio::test]
    async fn test_timeout_cancels_and_maps_to_504() {
        // Accept the connection but never respond.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf).await;
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let client = OpenRouterClient::new(&test_config(&format!("http://{addr}")));
        let params = CompletionParams { timeout_ms: 150, ..test_params() };
        let err = client
            .complete(&[ChatMessage::user("hello")], &params)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Timeout(150)));
        assert_eq!(err.status(), 504);
        assert!(err.user_message().contains("took too long"));
    }
}
