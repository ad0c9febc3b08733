//! Chat service layer.
//!
//! Forwards a conversation to the upstream completion service and extracts
//! the reply text.

use crate::client::AsyncChatClient;
use crate::error::ServiceResult;
use crate::metrics::Metrics;
use crate::models::{ChatTurn, FALLBACK_REPLY};
use async_trait::async_trait;
use std::sync::Arc;

/// Chat service trait.
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Return the upstream reply for a conversation.
    ///
    /// A non-success upstream status fails with `Upstream` carrying that
    /// status. A success without reply content yields [`FALLBACK_REPLY`].
    async fn complete(&self, conversation: Vec<ChatTurn>) -> ServiceResult<String>;
}

/// Default implementation of ChatService.
pub struct ChatServiceImpl {
    client: Arc<dyn AsyncChatClient>,
    metrics: Metrics,
}

impl ChatServiceImpl {
    /// Create a new chat service.
    pub fn new(client: Arc<dyn AsyncChatClient>, metrics: Metrics) -> Self {
        Self { client, metrics }
    }
}

#[async_trait]
impl ChatService for ChatServiceImpl {
    async fn complete(&self, conversation: Vec<ChatTurn>) -> ServiceResult<String> {
        let response = self.client.complete(conversation).await?;

        let reply = match response.first_content() {
            Some(content) => {
                self.metrics.record_chat_reply(false);
                content
            }
            None => {
                tracing::warn!("Upstream reply had no content, using fallback");
                self.metrics.record_chat_reply(true);
                FALLBACK_REPLY.to_string()
            }
        };

        Ok(reply)
    }
}
