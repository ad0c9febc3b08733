//! Async wrapper around the synchronous ChatClient.
//!
//! This module provides an async interface to the synchronous ChatClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::ChatClient;
use crate::error::{ChatApiError, ChatApiResult};
use crate::models::{ChatCompletionResponse, ChatTurn};
use async_trait::async_trait;
use std::sync::Arc;

/// Async interface to the upstream completion service.
///
/// The service layer depends on this trait, so tests can substitute a
/// canned implementation without any HTTP.
#[async_trait]
pub trait AsyncChatClient: Send + Sync {
    async fn complete(&self, messages: Vec<ChatTurn>) -> ChatApiResult<ChatCompletionResponse>;
}

/// Async wrapper around synchronous ChatClient.
#[derive(Clone)]
pub struct AsyncChatClientImpl {
    client: Arc<ChatClient>,
}

impl AsyncChatClientImpl {
    pub fn new(client: ChatClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncChatClient for AsyncChatClientImpl {
    async fn complete(&self, messages: Vec<ChatTurn>) -> ChatApiResult<ChatCompletionResponse> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.complete(&messages))
            .await
            .map_err(|e| ChatApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
