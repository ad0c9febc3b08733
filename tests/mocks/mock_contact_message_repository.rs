use async_trait::async_trait;
use site_backend::domain::RecordId;
use site_backend::error::{ServiceError, ServiceResult};
use site_backend::models::ContactMessage;
use site_backend::repositories::ContactMessageRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact message repository for testing.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactMessageRepository {
    messages: Arc<Mutex<Vec<ContactMessage>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_writes: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockContactMessageRepository {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            fail_writes: Arc::new(Mutex::new(false)),
        }
    }

    pub fn len(&self) -> usize {
        self.messages.lock().unwrap().len()
    }

    /// Make every subsequent `put` fail with an unexpected error.
    pub fn fail_writes(&self) {
        *self.fail_writes.lock().unwrap() = true;
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockContactMessageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactMessageRepository for MockContactMessageRepository {
    async fn put(&self, message: ContactMessage) -> ServiceResult<ContactMessage> {
        self.track_call("put");

        if *self.fail_writes.lock().unwrap() {
            return Err(ServiceError::Unexpected("storage unavailable".to_string()));
        }

        self.messages.lock().unwrap().push(message.clone());
        Ok(message)
    }

    async fn get_by_key(&self, id: &RecordId) -> ServiceResult<Option<ContactMessage>> {
        self.track_call("get_by_key");

        let messages = self.messages.lock().unwrap();
        Ok(messages.iter().find(|m| &m.id == id).cloned())
    }

    async fn list_all(&self) -> ServiceResult<Vec<ContactMessage>> {
        self.track_call("list_all");
        Ok(self.messages.lock().unwrap().clone())
    }
}
