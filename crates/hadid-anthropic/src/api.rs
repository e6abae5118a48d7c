//! Request / response structs for Anthropic's `v1/messages` endpoint.
//!
//! Only the fields this workspace actually sends or reads are modelled;
//! unknown response fields are ignored by serde.

use serde::{Deserialize, Serialize};

#[macro_export]
macro_rules! impl_builder_methods {
    ($builder:ident, $($field:ident: $field_type:ty),*) => {
        impl $builder {
            $(
                pub fn $field(mut self, $field: $field_type) -> Self {
                    self.$field = Some($field);
                    self
                }
            )*
        }
    };
}

#[derive(Debug, Serialize, Clone)]
pub struct MessagesRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<MessageParam>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl MessagesRequest {
    pub fn new(model: String, max_tokens: u32, messages: Vec<MessageParam>) -> Self {
        Self {
            model,
            max_tokens,
            messages,
            system: None,
            temperature: None,
        }
    }
}

impl_builder_methods!(
    MessagesRequest,
    system: String,
    temperature: f64
);

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MessageParam {
    pub role: MessageRole,
    pub content: String,
}

impl MessageParam {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MessagesResponse {
    pub id: String,
    pub model: String,
    pub content: Vec<ContentBlock>,
    pub stop_reason: Option<StopReason>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: String },
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    EndTurn,
    MaxTokens,
    StopSequence,
    ToolUse,
    Refusal,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
pub struct Usage {
    pub input_tokens: i64,
    pub output_tokens: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serialises_without_absent_optionals() {
        let request = MessagesRequest::new(
            "claude-3-5-sonnet-20241022".into(),
            2048,
            vec![MessageParam::user("hello")],
        );
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "claude-3-5-sonnet-20241022");
        assert_eq!(value["max_tokens"], 2048);
        assert_eq!(value["messages"][0]["role"], "user");
        assert!(value.get("system").is_none());
        assert!(value.get("temperature").is_none());
    }

    #[test]
    fn builder_methods_set_optionals() {
        let request = MessagesRequest::new("m".into(), 16, vec![])
            .system("be terse".into())
            .temperature(0.1);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["system"], "be terse");
        assert_eq!(value["temperature"], 0.1);
    }

    #[test]
    fn response_parses_text_blocks_and_usage() {
        let body = r##"{
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "model": "claude-3-5-sonnet-20241022",
            "content": [{"type": "text", "text": "# heading"}],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 10, "output_tokens": 4}
        }"##;
        let response: MessagesResponse = serde_json::from_str(body).unwrap();
        let ContentBlock::Text { text } = &response.content[0];
        assert_eq!(text, "# heading");
        assert_eq!(response.stop_reason, Some(StopReason::EndTurn));
        assert_eq!(response.usage.input_tokens, 10);
    }
}
