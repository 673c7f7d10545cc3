//! Response handling for chat completions.

use crate::{Error, Role, Usage};
use serde::Deserialize;

/// A complete chat-completion response from the gateway.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// One candidate response.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub index: u32,
    pub message: ChoiceMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// The message carried by a choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub content: Option<MessageContent>,
}

/// Message content: either plain text or a list of parts.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentItem>),
}

/// One element of a content array: a bare string or a typed part.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ContentItem {
    Text(String),
    Part(ContentPart),
}

/// A single content part, e.g. `{"type": "text", "text": "..."}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentPart {
    #[serde(default)]
    pub r#type: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl MessageContent {
    /// Get the text content. Parts are joined with a single space.
    pub fn text(&self) -> String {
        match self {
            MessageContent::Text(text) => text.clone(),
            MessageContent::Parts(parts) => parts
                .iter()
                .filter_map(|item| match item {
                    ContentItem::Text(text) => Some(text.as_str()),
                    ContentItem::Part(part) => part.text.as_deref(),
                })
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
                .trim()
                .to_string(),
        }
    }
}

impl ChatCompletion {
    /// Get the text of the first choice.
    pub fn first_choice_text(&self) -> Result<String, Error> {
        let choice = self
            .choices
            .first()
            .ok_or_else(|| Error::response_shape("response contained no choices"))?;

        choice
            .message
            .content
            .as_ref()
            .map(MessageContent::text)
            .ok_or_else(|| Error::response_shape("first choice has no message content"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> ChatCompletion {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_first_choice_text() {
        let completion = parse(json!({
            "id": "chatcmpl-1",
            "model": "claude",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "first"}, "finish_reason": "stop"},
                {"index": 1, "message": {"role": "assistant", "content": "second"}}
            ],
            "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
        }));

        assert_eq!(completion.first_choice_text().unwrap(), "first");
        assert_eq!(completion.usage.unwrap().total_tokens, 15);
    }

    #[test]
    fn test_content_parts_are_joined() {
        let completion = parse(json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": [
                        {"type": "text", "text": "Portkey is"},
                        {"type": "image_url"},
                        {"type": "text", "text": "an AI gateway."}
                    ]
                }
            }]
        }));

        assert_eq!(completion.first_choice_text().unwrap(), "Portkey is an AI gateway.");
    }

    #[test]
    fn test_bare_string_parts_are_joined() {
        let completion = parse(json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": ["Portkey is", {"type": "text", "text": "an AI gateway."}]
                }
            }]
        }));

        assert_eq!(completion.first_choice_text().unwrap(), "Portkey is an AI gateway.");
    }

    #[test]
    fn test_message_without_role() {
        let completion = parse(json!({
            "choices": [{"message": {"content": "Portkey is an AI gateway."}}]
        }));

        assert!(completion.choices[0].message.role.is_none());
        assert_eq!(completion.first_choice_text().unwrap(), "Portkey is an AI gateway.");
    }

    #[test]
    fn test_empty_choices_is_shape_error() {
        let completion = parse(json!({"choices": []}));
        assert!(matches!(
            completion.first_choice_text(),
            Err(Error::ResponseShape(_))
        ));
    }

    #[test]
    fn test_null_content_is_shape_error() {
        let completion = parse(json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        }));
        match completion.first_choice_text() {
            Err(Error::ResponseShape(message)) => assert!(message.contains("no message content")),
            other => panic!("Expected shape error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_choices_fails_to_parse() {
        let result = serde_json::from_value::<ChatCompletion>(json!({"id": "x"}));
        assert!(result.is_err());
    }
}
