//! HTTP client for the upstream chat-completion API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client attaches the bearer credential and
//! application identifier, sends the fixed sampling parameters, and maps upstream
//! failures to `ChatApiError`.

mod async_wrapper;
pub use async_wrapper::{AsyncChatClient, AsyncChatClientImpl};

use crate::config::{env_or, Config, CHAT_API_KEY_VAR, DEFAULT_CHAT_MODEL};
use crate::error::{ChatApiError, ChatApiResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::{ChatCompletionRequest, ChatCompletionResponse, ChatTurn};
use std::sync::Arc;
use std::time::Duration;

/// Path of the completion endpoint, relative to the base URL.
pub const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// Header carrying the application identifier.
pub const APP_ID_HEADER: &str = "X-App-Id";

/// Sampling temperature sent with every request.
pub const TEMPERATURE: f64 = 0.7;

/// Maximum output size sent with every request.
pub const MAX_TOKENS: u32 = 800;

/// HTTP client for the upstream chat-completion API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`. One request per
/// call; no retry and no streaming.
#[derive(Clone)]
pub struct ChatClient {
    /// Base URL for the upstream API
    base_url: String,

    /// Bearer credential loaded at startup; the environment overrides it per request
    api_key: String,

    /// Application identifier header value
    app_id: String,

    /// Model identifier
    model: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ChatClient {
    /// Create a new ChatClient from configuration.
    pub fn new(config: &Config) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(secs) = config.request_timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Self {
            base_url: config.chat_api_url.clone(),
            api_key: config.chat_api_key.clone(),
            app_id: config.chat_app_id.clone(),
            model: config.chat_model.clone(),
            agent: Arc::new(builder.build()),
            metrics: Metrics::new(),
        }
    }

    /// Create a ChatClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let config = Config {
            chat_api_url: base_url,
            chat_api_key: api_key,
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            ..Config::default()
        };
        Self::new(&config)
    }

    /// Share an existing metrics collector with this client.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a POST request with authentication and JSON body.
    fn post(&self, path: &str, body: &serde_json::Value) -> Result<ureq::Response, ChatApiError> {
        let timer = HttpTimer::new(self.metrics.clone());
        let url = self.build_url(path);
        let api_key = env_or(CHAT_API_KEY_VAR, &self.api_key);

        tracing::debug!("POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", api_key))
            .set(APP_ID_HEADER, &self.app_id)
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        match &result {
            Ok(response) => {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
                timer.complete();
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
                timer.complete_with_error();
            }
        }

        result
    }

    /// Map a ureq error to a ChatApiError.
    ///
    /// The upstream error body is logged here, before it is folded into the error.
    fn map_error(&self, error: ureq::Error) -> ChatApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                tracing::error!(status = code, body = %message, "Upstream chat API returned an error");

                ChatApiError::Upstream {
                    status: code,
                    message,
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    ChatApiError::HttpError("Connection failed".to_string())
                } else if is_timeout(&transport) {
                    ChatApiError::Timeout
                } else {
                    ChatApiError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Forward a conversation and return the parsed upstream response.
    ///
    /// Each turn is reduced to `{role, content}`. The conversation is sent as
    /// is, with no length cap.
    pub fn complete(&self, messages: &[ChatTurn]) -> ChatApiResult<ChatCompletionResponse> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: messages.to_vec(),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };
        let body = serde_json::to_value(&request).map_err(ChatApiError::JsonError)?;

        tracing::debug!(
            model = %request.model,
            turns = request.messages.len(),
            "Sending chat completion request"
        );

        let response = self.post(CHAT_COMPLETIONS_PATH, &body)?;
        let response_body = response
            .into_string()
            .map_err(|e| ChatApiError::HttpError(e.to_string()))?;

        serde_json::from_str(&response_body).map_err(ChatApiError::JsonError)
    }
}

/// Whether a transport failure is an expired read or write deadline.
///
/// Only `Io` errors whose underlying `io::Error` timed out count; resets and
/// early EOFs stay plain transport errors.
fn is_timeout(transport: &ureq::Transport) -> bool {
    use std::error::Error as _;

    transport.kind() == ureq::ErrorKind::Io
        && transport
            .source()
            .and_then(|e| e.downcast_ref::<std::io::Error>())
            .is_some_and(|e| {
                matches!(
                    e.kind(),
                    std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
                )
            })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_trims_slashes() {
        let client = ChatClient::with_base_url("https://llm.example.com/v1/".to_string(), "k".to_string());
        assert_eq!(
            client.build_url(CHAT_COMPLETIONS_PATH),
            "https://llm.example.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_new_uses_config_values() {
        let config = Config {
            chat_api_url: "http://localhost:9999".to_string(),
            chat_api_key: "key".to_string(),
            chat_app_id: "site".to_string(),
            chat_model: "custom-model".to_string(),
            request_timeout: Some(5),
            ..Config::default()
        };
        let client = ChatClient::new(&config);
        assert_eq!(client.base_url, "http://localhost:9999");
        assert_eq!(client.app_id, "site");
        assert_eq!(client.model, "custom-model");
    }

    #[test]
    fn test_with_metrics_shares_collector() {
        let metrics = Metrics::new();
        let client = ChatClient::with_base_url("http://localhost".to_string(), String::new())
            .with_metrics(metrics.clone());
        client.metrics().record_http_error();
        assert_eq!(metrics.http_errors_total(), 1);
    }
}
