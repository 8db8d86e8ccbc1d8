pub mod validate;

use std::sync::Arc;
use log::{ debug, error };
use thiserror::Error;

use crate::llm::GenerationDefaults;
use crate::llm::chat::{ BackendError, ChatBackend };
use crate::models::chat::{ ChatReply, ChatRequest };
use self::validate::{ validate_conversation, ValidationError };

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Orchestrates one chat completion: parameter defaulting, validation,
/// backend dispatch, response shaping. Holds no per-request state, so a
/// single instance serves any number of concurrent requests.
pub struct ChatGateway {
    backend: Arc<dyn ChatBackend>,
    defaults: GenerationDefaults,
}

impl ChatGateway {
    pub fn new(backend: Arc<dyn ChatBackend>, defaults: GenerationDefaults) -> Self {
        Self { backend, defaults }
    }

    pub async fn handle(&self, request: ChatRequest) -> Result<ChatReply, GatewayError> {
        let model = request.model.unwrap_or_else(|| self.defaults.model.clone());
        let temperature = request.temperature.unwrap_or(self.defaults.temperature);

        if !(0.0..=2.0).contains(&temperature) {
            return Err(ValidationError::TemperatureOutOfRange(temperature).into());
        }

        let conversation = validate_conversation(&request.messages)?;

        // A conversation without a user turn dispatches with an empty
        // prompt rather than failing.
        let prompt = conversation.last_user_content();
        debug!(
            "dispatching {} message(s) (model: {}, temperature: {}, prompt bytes: {})",
            conversation.len(),
            model,
            temperature,
            prompt.len()
        );

        match self.backend.generate(&conversation, &model, temperature).await {
            Ok(text) => Ok(ChatReply { text }),
            Err(e) => {
                error!("backend generate failed: {}", e);
                Err(e.into())
            }
        }
    }
}
