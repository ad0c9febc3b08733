//! Application service layer.
//!
//! Services contain the request-level rules (presence checks, credential
//! checks, reply extraction) and sit between the HTTP handlers and the
//! repositories or upstream client.

mod chat_service;
mod contact_service;
mod identity_service;

pub use chat_service::{ChatService, ChatServiceImpl};
pub use contact_service::{ContactService, ContactServiceImpl};
pub use identity_service::{IdentityService, IdentityServiceImpl};
