use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ai::client::{GeminiClient, TextGenerator};
use crate::config::AiConfig;

/// one piece of a prompt sent to the text generator
#[derive(Debug, Clone, PartialEq)]
pub enum PromptPart {
    Text(String),
    /// base64 encoded file contents, sent along with the prompt
    InlineData { mime_type: String, data: String },
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum AiStatus {
    Success,
    Error,
}

/// what every ai endpoint returns. Failures are reported in-band with [`AiStatus::Error`]
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct AiResponse {
    pub text: String,
    pub status: AiStatus,
}

impl AiResponse {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: AiStatus::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: AiStatus::Error,
        }
    }
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ChatRequest {
    pub query: String,
}

/// managed state holding the text generator, if one could be configured
pub struct AiState {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl AiState {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    pub fn disabled() -> Self {
        Self { generator: None }
    }

    /// builds the gemini client from config. Any problem (disabled, missing api key, bad client setup) leaves
    /// ai features turned off instead of stopping startup
    pub fn from_config(config: &AiConfig) -> Self {
        if !config.enabled {
            log::info!("AI features are disabled in config");
            return Self::disabled();
        }
        let api_key = match std::env::var(&config.api_key_env) {
            Ok(key) if !key.trim().is_empty() => key,
            _ => {
                log::warn!(
                    "No api key found in environment variable {}, AI features will be unavailable",
                    config.api_key_env
                );
                return Self::disabled();
            }
        };
        let timeout = match config.timeout() {
            Ok(timeout) => timeout,
            Err(e) => {
                log::warn!("Invalid ai timeout {}: {e}", config.timeout);
                return Self::disabled();
            }
        };
        match GeminiClient::new(&config.base_url, &config.model, api_key, timeout) {
            Ok(client) => {
                log::info!("AI features enabled using model {}", config.model);
                Self::new(Arc::new(client))
            }
            Err(e) => {
                log::error!("Failed to create ai client: {e}");
                Self::disabled()
            }
        }
    }

    pub fn generator(&self) -> Option<&dyn TextGenerator> {
        self.generator.as_deref()
    }
}
