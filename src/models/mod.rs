//! Data models for the site backend.
//!
//! This module contains the records held by the in-memory stores, the request
//! bodies accepted at the HTTP boundary, and the wire types exchanged with the
//! upstream chat-completion API.

pub mod chat;
pub mod contact_message;
pub mod user;

pub use chat::{
    ChatCompletionRequest, ChatCompletionResponse, ChatReply, ChatRequest, ChatTurn, FALLBACK_REPLY,
};
pub use contact_message::{ContactMessage, ContactSubmission};
pub use user::{LoginRequest, RegistrationRequest, User, UserProfile};
