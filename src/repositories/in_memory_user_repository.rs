use crate::error::{ServiceError, ServiceResult};
use crate::models::User;
use crate::repositories::traits::UserRepository;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Process-local user store.
///
/// Records live in an insertion-ordered `Vec` for the lifetime of the process.
/// There is no eviction and no size bound; a restart loses everything.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn put(&self, user: User) -> ServiceResult<User> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.email == user.email) {
            return Err(ServiceError::DuplicateEmail(user.email));
        }

        users.push(user.clone());
        Ok(user)
    }

    async fn get_by_key(&self, email: &str) -> ServiceResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn list_all(&self) -> ServiceResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }
}
