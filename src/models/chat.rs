//! Chat models: the conversation accepted from the site and the
//! chat-completion wire format spoken with the upstream service.

use serde::{Deserialize, Serialize};

/// Reply used when the upstream answers successfully but carries no content.
pub const FALLBACK_REPLY: &str = "unable to retrieve reply";

/// One turn of a conversation. Extra fields sent by the client are dropped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

impl ChatTurn {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// Chat endpoint request body.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatTurn>,
}

/// Chat endpoint success body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatReply {
    pub response: String,
}

/// Body posted to the upstream `/chat/completions` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatTurn>,
    pub temperature: f64,
    pub max_tokens: u32,
}

/// Upstream success body. Every level is optional so that a sparse response
/// degrades to the fallback reply instead of a decode error.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if present and non-empty.
    pub fn first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_drops_extra_fields() {
        let req: ChatRequest = serde_json::from_str(
            r#"{"messages":[{"role":"user","content":"hi","id":7,"timestamp":"now"}]}"#,
        )
        .unwrap();
        assert_eq!(req.messages, vec![ChatTurn::new("user", "hi")]);

        let json = serde_json::to_value(&req.messages[0]).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_reply_from_first_choice() {
        let resp: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"hello"}},{"message":{"content":"other"}}]}"#,
        )
        .unwrap();
        assert_eq!(resp.first_content().as_deref(), Some("hello"));
    }

    #[test]
    fn test_empty_content_counts_as_absent() {
        let resp: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":""}}]}"#).unwrap();
        assert_eq!(resp.first_content(), None);
    }

    #[test]
    fn test_missing_choices_has_no_content() {
        let resp: ChatCompletionResponse = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
        assert_eq!(resp.first_content(), None);
    }

    #[test]
    fn test_missing_message_or_content_has_no_content() {
        let resp: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"index":0}]}"#).unwrap();
        assert_eq!(resp.first_content(), None);

        let resp: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"role":"assistant"}}]}"#).unwrap();
        assert_eq!(resp.first_content(), None);
    }

    #[test]
    fn test_completion_request_shape() {
        let req = ChatCompletionRequest {
            model: "m".to_string(),
            messages: vec![ChatTurn::new("user", "hi")],
            temperature: 0.7,
            max_tokens: 800,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], "m");
        assert_eq!(json["max_tokens"], 800);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["temperature"], 0.7);
        assert!(serde_json::to_string(&req).unwrap().contains(r#""temperature":0.7,"#));
    }
}
