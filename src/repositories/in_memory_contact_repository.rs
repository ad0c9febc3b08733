use crate::domain::RecordId;
use crate::error::ServiceResult;
use crate::models::ContactMessage;
use crate::repositories::traits::ContactMessageRepository;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Process-local contact message store.
///
/// Append-only; enumeration returns messages in the order they arrived.
#[derive(Default)]
pub struct InMemoryContactMessageRepository {
    messages: RwLock<Vec<ContactMessage>>,
}

impl InMemoryContactMessageRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactMessageRepository for InMemoryContactMessageRepository {
    async fn put(&self, message: ContactMessage) -> ServiceResult<ContactMessage> {
        self.messages.write().await.push(message.clone());
        Ok(message)
    }

    async fn get_by_key(&self, id: &RecordId) -> ServiceResult<Option<ContactMessage>> {
        let messages = self.messages.read().await;
        Ok(messages.iter().find(|m| &m.id == id).cloned())
    }

    async fn list_all(&self) -> ServiceResult<Vec<ContactMessage>> {
        Ok(self.messages.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(name: &str) -> ContactMessage {
        ContactMessage::new(
            name.to_string(),
            "555-0000".to_string(),
            format!("{}@x.com", name),
            "hello".to_string(),
        )
    }

    #[tokio::test]
    async fn test_put_then_get_by_key() {
        let repo = InMemoryContactMessageRepository::new();
        let stored = repo.put(message("bob")).await.unwrap();

        let found = repo.get_by_key(&stored.id).await.unwrap();
        assert_eq!(found, Some(stored));
        assert!(repo
            .get_by_key(&RecordId::generate())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_list_all_in_arrival_order() {
        let repo = InMemoryContactMessageRepository::new();
        repo.put(message("first")).await.unwrap();
        repo.put(message("second")).await.unwrap();

        let names: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["first", "second"]);
    }
}
