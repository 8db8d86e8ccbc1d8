pub mod chat;
use std::str::FromStr;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendType {
    Echo,
    LiteLlm,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseBackendTypeError {
    message: String,
}

impl fmt::Display for ParseBackendTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseBackendTypeError {}

impl FromStr for BackendType {
    type Err = ParseBackendTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "echo" => Ok(BackendType::Echo),
            "litellm" | "lite-llm" => Ok(BackendType::LiteLlm),
            _ =>
                Err(ParseBackendTypeError {
                    message: format!("Invalid backend type: '{}'", s),
                }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub backend_type: BackendType,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            backend_type: BackendType::Echo,
            api_key: None,
            base_url: None,
        }
    }
}

/// Service-wide generation parameters applied when a request omits them.
#[derive(Debug, Clone)]
pub struct GenerationDefaults {
    pub model: String,
    pub temperature: f32,
}

impl Default for GenerationDefaults {
    fn default() -> Self {
        Self {
            model: "lite-llm".to_string(),
            temperature: 0.7,
        }
    }
}
