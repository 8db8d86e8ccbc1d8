use async_trait::async_trait;
use log::debug;

use super::{ BackendError, ChatBackend };
use crate::models::chat::Conversation;

/// Default backend used when no remote backend is configured. Replies with
/// the most recent user turn behind a fixed tag, which keeps the whole
/// request path exercisable without any upstream service.
#[derive(Debug, Clone, Default)]
pub struct EchoBackend;

impl EchoBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChatBackend for EchoBackend {
    async fn generate(
        &self,
        conversation: &Conversation,
        model: &str,
        _temperature: f32
    ) -> Result<String, BackendError> {
        debug!("echo backend replying for model '{}'", model);
        Ok(format!("Echo: {}", conversation.last_user_content()))
    }
}
