//! Axum route handlers.
//!
//! Handlers translate `ServiceError` into status codes and the JSON body
//! shape each endpoint promises. Bodies that fail to decode count as
//! unexpected errors, not client errors.

use super::AppState;
use crate::error::ServiceError;
use crate::features;
use crate::models::{
    ChatReply, ChatRequest, ContactSubmission, LoginRequest, RegistrationRequest,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

const CONTACT_FIELDS_REQUIRED: &str = "All fields are required";
const CONTACT_RECEIVED: &str = "Message received";
const CHAT_UPSTREAM_FAILED: &str = "Failed to get a reply from the chat service";
const INTERNAL_ERROR: &str = "Internal server error";

/// `{success: false, message}` with the given status.
fn failure(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "success": false, "message": message }))).into_response()
}

/// `{error}` with the given status, as the chat endpoint reports failures.
fn chat_failure(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// GET /health: liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// POST /api/chat: forward a conversation upstream.
///
/// Request:  `{messages: [{role, content}]}`
/// Response: `{response}`, or `{error}` with the upstream status.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(body) => body,
        Err(rejection) => {
            tracing::error!("Unreadable chat request: {}", rejection);
            return chat_failure(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR);
        }
    };

    match state.chat.complete(request.messages).await {
        Ok(response) => Json(ChatReply { response }).into_response(),
        Err(ServiceError::Upstream { status, .. }) => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            chat_failure(status, CHAT_UPSTREAM_FAILED)
        }
        Err(e) => {
            tracing::error!("Chat request failed: {}", e);
            chat_failure(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
        }
    }
}

/// POST /api/contact: record a contact-form submission.
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Response {
    let Json(submission) = match payload {
        Ok(body) => body,
        Err(rejection) => {
            tracing::error!("Unreadable contact submission: {}", rejection);
            return failure(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR);
        }
    };

    match state.contacts.submit(submission).await {
        Ok(message) => (
            StatusCode::CREATED,
            Json(json!({
                "success": true,
                "message": CONTACT_RECEIVED,
                "data": message,
            })),
        )
            .into_response(),
        Err(ServiceError::Validation(e)) => {
            tracing::warn!("Rejected contact submission: {}", e);
            failure(StatusCode::BAD_REQUEST, CONTACT_FIELDS_REQUIRED)
        }
        Err(e) => {
            tracing::error!("Contact submission failed: {}", e);
            failure(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
        }
    }
}

/// GET /api/contact: every stored message.
pub async fn list_contacts(State(state): State<AppState>) -> Response {
    match state.contacts.list_all().await {
        Ok(messages) => Json(json!({ "success": true, "data": messages })).into_response(),
        Err(e) => {
            tracing::error!("Listing contact messages failed: {}", e);
            failure(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
        }
    }
}

/// Status and message for an identity failure.
fn identity_failure(err: ServiceError) -> Response {
    match err {
        ServiceError::Validation(e) => failure(StatusCode::BAD_REQUEST, &e.to_string()),
        ServiceError::DuplicateEmail(_) => failure(StatusCode::CONFLICT, "Email already registered"),
        ServiceError::NotFound(_) => failure(StatusCode::NOT_FOUND, "User not found"),
        ServiceError::InvalidCredentials => failure(StatusCode::UNAUTHORIZED, "Invalid credentials"),
        other => {
            tracing::error!("Identity request failed: {}", other);
            failure(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
        }
    }
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegistrationRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(body) => body,
        Err(rejection) => return failure(StatusCode::BAD_REQUEST, &rejection.body_text()),
    };

    match state.identity.register(request).await {
        Ok(user) => (
            StatusCode::CREATED,
            Json(json!({ "success": true, "data": user })),
        )
            .into_response(),
        Err(e) => identity_failure(e),
    }
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(body) => body,
        Err(rejection) => return failure(StatusCode::BAD_REQUEST, &rejection.body_text()),
    };

    match state.identity.login(request).await {
        Ok(user) => Json(json!({ "success": true, "data": user })).into_response(),
        Err(e) => identity_failure(e),
    }
}

/// GET /api/auth/users
pub async fn list_users(State(state): State<AppState>) -> Response {
    match state.identity.list_all().await {
        Ok(users) => Json(json!({ "success": true, "data": users })).into_response(),
        Err(e) => identity_failure(e),
    }
}

/// GET /api/features/{page}: the fixed notice for a disabled page.
pub async fn feature_notice(Path(page): Path<String>) -> Response {
    match features::lookup(&page) {
        Some(stub) => Json(stub).into_response(),
        None => failure(StatusCode::NOT_FOUND, "Unknown page"),
    }
}

/// GET /api/videos/{name}: resolve a video asset against the configured base URL.
pub async fn video_url(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match state.config.video_url(&name) {
        Some(url) => Json(json!({ "url": url })).into_response(),
        None => failure(StatusCode::NOT_FOUND, "Video hosting is not configured"),
    }
}

/// GET /api/metrics
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.metrics.summary())
}
