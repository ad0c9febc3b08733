//! Contact service layer.
//!
//! Validates contact-form submissions and records them in the repository.

use crate::domain::require_field;
use crate::error::ServiceResult;
use crate::metrics::Metrics;
use crate::models::{ContactMessage, ContactSubmission};
use crate::repositories::ContactMessageRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Contact service trait for inbox operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Store a submission. Fails with `Validation` when any field is empty or absent.
    async fn submit(&self, submission: ContactSubmission) -> ServiceResult<ContactMessage>;

    /// Every stored message in arrival order. No access control is applied.
    async fn list_all(&self) -> ServiceResult<Vec<ContactMessage>>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    messages: Arc<dyn ContactMessageRepository>,
    metrics: Metrics,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(messages: Arc<dyn ContactMessageRepository>, metrics: Metrics) -> Self {
        Self { messages, metrics }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn submit(&self, submission: ContactSubmission) -> ServiceResult<ContactMessage> {
        let name = require_field("name", submission.name)?;
        let phone = require_field("phone", submission.phone)?;
        let email = require_field("email", submission.email)?;
        let message = require_field("message", submission.message)?;

        let stored = self
            .messages
            .put(ContactMessage::new(name, phone, email, message))
            .await?;

        tracing::info!(message_id = %stored.id, "Stored contact message");
        self.metrics.record_contact_submission();
        Ok(stored)
    }

    async fn list_all(&self) -> ServiceResult<Vec<ContactMessage>> {
        self.messages.list_all().await
    }
}
