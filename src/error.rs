//! Error types for the site backend.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when talking to the upstream chat-completion API.
#[derive(Error, Debug)]
pub enum ChatApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Upstream returned a non-success status code
    #[error("Upstream error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,
}

/// Errors surfaced by the service layer to the HTTP boundary.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// A required field was empty or absent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A user with this email is already registered
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    /// No record matches the lookup key
    #[error("Not found: {0}")]
    NotFound(String),

    /// The password does not match the stored digest
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Upstream completion service answered with a non-success status
    #[error("Upstream error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    /// Anything else that went wrong while handling a request
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<ChatApiError> for ServiceError {
    fn from(err: ChatApiError) -> Self {
        match err {
            ChatApiError::Upstream { status, message } => ServiceError::Upstream { status, message },
            other => ServiceError::Unexpected(other.to_string()),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ChatApiError
pub type ChatApiResult<T> = Result<T, ChatApiError>;

/// Convenience type alias for Results with ServiceError
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
