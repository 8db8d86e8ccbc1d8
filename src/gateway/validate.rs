use thiserror::Error;

use crate::models::chat::{ ChatMessage, Conversation, Message, Role };

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("conversation must contain at least one message")]
    EmptyConversation,
    #[error("message {index}: unknown role '{role}'")]
    UnknownRole {
        index: usize,
        role: String,
    },
    #[error("message {index}: content must not be empty")]
    EmptyContent {
        index: usize,
    },
    #[error("temperature {0} is outside the allowed range 0.0..=2.0")]
    TemperatureOutOfRange(f32),
}

/// Turns the raw wire messages into a validated `Conversation`, preserving
/// order and trimming content. Pure; the first violated constraint wins and
/// reports the offending index.
pub fn validate_conversation(raw: &[ChatMessage]) -> Result<Conversation, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::EmptyConversation);
    }

    let mut messages = Vec::with_capacity(raw.len());
    for (index, msg) in raw.iter().enumerate() {
        let role = Role::parse(&msg.role).ok_or_else(|| ValidationError::UnknownRole {
            index,
            role: msg.role.clone(),
        })?;

        let content = msg.content.trim();
        if content.is_empty() {
            return Err(ValidationError::EmptyContent { index });
        }

        messages.push(Message {
            role,
            content: content.to_string(),
        });
    }

    Ok(Conversation { messages })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(role: &str, content: &str) -> ChatMessage {
        ChatMessage {
            role: role.into(),
            content: content.into(),
        }
    }

    #[test]
    fn accepts_a_well_formed_conversation() {
        let conversation = validate_conversation(
            &[raw("system", "be brief"), raw("user", "hello"), raw("assistant", "hi")]
        ).unwrap();

        assert_eq!(conversation.len(), 3);
        assert_eq!(conversation.messages[0].role, Role::System);
        assert_eq!(conversation.messages[1].content, "hello");
        assert_eq!(conversation.messages[2].role, Role::Assistant);
    }

    #[test]
    fn rejects_an_empty_conversation() {
        assert_eq!(validate_conversation(&[]), Err(ValidationError::EmptyConversation));
    }

    #[test]
    fn rejects_an_unknown_role_with_its_index() {
        let err = validate_conversation(
            &[raw("user", "hello"), raw("moderator", "stop")]
        ).unwrap_err();

        assert_eq!(err, ValidationError::UnknownRole {
            index: 1,
            role: "moderator".into(),
        });
    }

    #[test]
    fn rejects_whitespace_only_content_with_its_index() {
        let err = validate_conversation(&[raw("user", "   \t")]).unwrap_err();
        assert_eq!(err, ValidationError::EmptyContent { index: 0 });
    }

    #[test]
    fn trims_content_and_preserves_order() {
        let conversation = validate_conversation(
            &[raw("user", "  hi  "), raw("assistant", "yo")]
        ).unwrap();

        assert_eq!(conversation.messages[0].content, "hi");
        assert_eq!(conversation.messages[1].content, "yo");
    }
}
