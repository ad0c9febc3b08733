//! Contact message model representing an inbound inquiry from the site's contact form.

use crate::domain::RecordId;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A stored contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    /// Opaque unique identifier
    pub id: RecordId,

    /// Sender name
    pub name: String,

    /// Sender phone number (free text, not normalized)
    pub phone: String,

    /// Sender email address
    pub email: String,

    /// Free-text message body
    pub message: String,

    /// When the message was received (RFC 3339 timestamp)
    pub created_at: String,
}

impl ContactMessage {
    /// Stamp a new message with a fresh identifier and the current time.
    pub fn new(name: String, phone: String, email: String, message: String) -> Self {
        Self {
            id: RecordId::generate(),
            name,
            phone,
            email,
            message,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Contact-form request body as posted by the site.
///
/// Form scripts often post the phone number as a JSON number, so every field
/// takes a string or a number. Other JSON types count as absent.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ContactSubmission {
    #[serde(deserialize_with = "string_or_number")]
    pub name: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub email: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub message: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

impl ContactSubmission {
    pub fn new(name: &str, phone: &str, email: &str, message: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            phone: Some(phone.to_string()),
            email: Some(email.to_string()),
            message: Some(message.to_string()),
        }
    }
}
