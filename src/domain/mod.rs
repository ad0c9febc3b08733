//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for domain concepts like record
//! identifiers and password digests, plus the presence checks applied to
//! user-supplied input.

pub mod errors;
pub mod password;
pub mod record_id;

pub use errors::{require_field, ValidationError};
pub use password::PasswordHash;
pub use record_id::RecordId;
