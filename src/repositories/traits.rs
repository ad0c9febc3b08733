use crate::domain::RecordId;
use crate::error::ServiceResult;
use crate::models::*;
use async_trait::async_trait;

/// Repository for registered users, keyed by email.
///
/// Provides abstraction over user storage so that the in-memory backend can
/// be replaced by a persistent one without touching the service layer.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user.
    ///
    /// Fails with `ServiceError::DuplicateEmail` when a user with the same
    /// email (exact, case-sensitive) already exists. The check and the insert
    /// happen as one step.
    async fn put(&self, user: User) -> ServiceResult<User>;

    /// Look up a user by exact email.
    async fn get_by_key(&self, email: &str) -> ServiceResult<Option<User>>;

    /// All users in insertion order.
    async fn list_all(&self) -> ServiceResult<Vec<User>>;
}

/// Repository for contact-form messages, keyed by record ID.
#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    /// Append a message.
    async fn put(&self, message: ContactMessage) -> ServiceResult<ContactMessage>;

    /// Look up a message by ID.
    async fn get_by_key(&self, id: &RecordId) -> ServiceResult<Option<ContactMessage>>;

    /// All messages in insertion order.
    async fn list_all(&self) -> ServiceResult<Vec<ContactMessage>>;
}
