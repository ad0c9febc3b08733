//! Identity service layer.
//!
//! Registration and login against the user repository.

use crate::domain::require_field;
use crate::error::{ServiceError, ServiceResult};
use crate::metrics::Metrics;
use crate::models::{LoginRequest, RegistrationRequest, User, UserProfile};
use crate::repositories::UserRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Identity service trait for account operations.
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Register a new user. Fails with `DuplicateEmail` when the email is taken.
    async fn register(&self, request: RegistrationRequest) -> ServiceResult<UserProfile>;

    /// Check credentials. Fails with `NotFound` for an unknown email and
    /// `InvalidCredentials` for a wrong password.
    async fn login(&self, request: LoginRequest) -> ServiceResult<UserProfile>;

    /// Every registered user in insertion order, without passwords.
    async fn list_all(&self) -> ServiceResult<Vec<UserProfile>>;
}

/// Default implementation of IdentityService.
pub struct IdentityServiceImpl {
    users: Arc<dyn UserRepository>,
    metrics: Metrics,
}

impl IdentityServiceImpl {
    /// Create a new identity service.
    pub fn new(users: Arc<dyn UserRepository>, metrics: Metrics) -> Self {
        Self { users, metrics }
    }
}

#[async_trait]
impl IdentityService for IdentityServiceImpl {
    async fn register(&self, request: RegistrationRequest) -> ServiceResult<UserProfile> {
        let name = require_field("name", request.name)?;
        let email = require_field("email", request.email)?;
        let password = require_field("password", request.password)?;

        let user = self.users.put(User::new(name, email, &password)).await?;

        tracing::info!(user_id = %user.id, "Registered user");
        self.metrics.record_registration();
        Ok(user.profile())
    }

    async fn login(&self, request: LoginRequest) -> ServiceResult<UserProfile> {
        let email = require_field("email", request.email)?;
        let password = require_field("password", request.password)?;

        let user = self
            .users
            .get_by_key(&email)
            .await?
            .ok_or_else(|| ServiceError::NotFound(email.clone()))?;

        if !user.password_hash.verify(&password) {
            tracing::warn!(user_id = %user.id, "Rejected login: wrong password");
            return Err(ServiceError::InvalidCredentials);
        }

        self.metrics.record_login();
        Ok(user.profile())
    }

    async fn list_all(&self) -> ServiceResult<Vec<UserProfile>> {
        let users = self.users.list_all().await?;
        Ok(users.iter().map(UserProfile::from).collect())
    }
}
