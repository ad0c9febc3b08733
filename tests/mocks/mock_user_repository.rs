use async_trait::async_trait;
use site_backend::error::{ServiceError, ServiceResult};
use site_backend::models::User;
use site_backend::repositories::UserRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock user repository for testing.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockUserRepository {
    users: Arc<Mutex<Vec<User>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_writes: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            fail_writes: Arc::new(Mutex::new(false)),
        }
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
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

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn put(&self, user: User) -> ServiceResult<User> {
        self.track_call("put");

        if *self.fail_writes.lock().unwrap() {
            return Err(ServiceError::Unexpected("storage unavailable".to_string()));
        }

        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(ServiceError::DuplicateEmail(user.email));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn get_by_key(&self, email: &str) -> ServiceResult<Option<User>> {
        self.track_call("get_by_key");

        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn list_all(&self) -> ServiceResult<Vec<User>> {
        self.track_call("list_all");
        Ok(self.users.lock().unwrap().clone())
    }
}
