pub mod echo;
pub mod litellm;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use super::{ BackendConfig, BackendType };
use self::echo::EchoBackend;
use self::litellm::LiteLlmClient;
use crate::models::chat::Conversation;

/// Fault raised inside a text-generation backend. The gateway surfaces the
/// message verbatim; it never retries or reclassifies.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed backend response: {0}")]
    MalformedResponse(String),
}

/// The gateway's sole extension point. Implementations turn a validated
/// conversation into reply text; swapping one in never changes the
/// gateway contract.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn generate(
        &self,
        conversation: &Conversation,
        model: &str,
        temperature: f32
    ) -> Result<String, BackendError>;
}

pub fn new_backend(config: &BackendConfig) -> Arc<dyn ChatBackend> {
    match config.backend_type {
        BackendType::Echo => Arc::new(EchoBackend::new()),
        BackendType::LiteLlm => Arc::new(LiteLlmClient::from_config(config)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chat::{ Message, Role };

    #[tokio::test]
    async fn default_config_yields_the_echo_backend() {
        let backend = new_backend(&BackendConfig::default());
        let convo = Conversation {
            messages: vec![Message { role: Role::User, content: "ping".into() }],
        };

        let reply = backend.generate(&convo, "lite-llm", 0.7).await.unwrap();
        assert_eq!(reply, "Echo: ping");
    }
}
