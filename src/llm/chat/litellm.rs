use reqwest::Client as HttpClient;
use serde::{ Deserialize, Serialize };
use async_trait::async_trait;
use log::debug;

use super::{ BackendError, ChatBackend };
use crate::llm::BackendConfig;
use crate::models::chat::Conversation;

/// Remote backend speaking the LiteLLM-style generate API: the full
/// conversation goes out as JSON, the reply comes back as `{"reply": ...}`.
#[derive(Debug, Clone)]
pub struct LiteLlmClient {
    http: HttpClient,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    messages: Vec<WireMessage<'a>>,
    model: &'a str,
    temperature: f32,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    reply: String,
}

impl LiteLlmClient {
    pub fn new(base_url: Option<String>, api_key: Option<String>) -> Self {
        let url = base_url.unwrap_or_else(|| "http://localhost:8000".into());

        Self {
            http: HttpClient::new(),
            base_url: url,
            api_key,
        }
    }

    pub fn from_config(config: &BackendConfig) -> Self {
        Self::new(config.base_url.clone(), config.api_key.clone())
    }

    fn payload<'a>(
        conversation: &'a Conversation,
        model: &'a str,
        temperature: f32
    ) -> GenerateRequest<'a> {
        GenerateRequest {
            messages: conversation
                .messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            model,
            temperature,
        }
    }
}

#[async_trait]
impl ChatBackend for LiteLlmClient {
    async fn generate(
        &self,
        conversation: &Conversation,
        model: &str,
        temperature: f32
    ) -> Result<String, BackendError> {
        let url = format!("{}/api/generate", self.base_url.trim_end_matches('/'));
        let req = Self::payload(conversation, model, temperature);
        debug!("dispatching {} message(s) to {}", conversation.len(), url);

        let mut call = self.http.post(&url).json(&req);
        if let Some(key) = &self.api_key {
            call = call.bearer_auth(key);
        }

        let resp = call.send().await?.error_for_status()?;
        let data = resp
            .json::<GenerateResponse>().await
            .map_err(|e| BackendError::MalformedResponse(e.to_string()))?;
        Ok(data.reply)
    }
}
