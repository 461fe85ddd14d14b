use std::time::Duration;

use rocket::async_trait;
use serde::{Deserialize, Serialize};

use crate::ai::error::AiError;
use crate::ai::PromptPart;

/// anything that can turn a prompt into text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, parts: Vec<PromptPart>) -> Result<String, AiError>;
}

/// calls the gemini `generateContent` endpoint
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

#[derive(Serialize, Debug)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
}

#[derive(Serialize, Debug)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
enum RequestPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: Blob,
    },
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Blob {
    mime_type: String,
    data: String,
}

impl From<PromptPart> for RequestPart {
    fn from(value: PromptPart) -> Self {
        match value {
            PromptPart::Text(text) => RequestPart::Text { text },
            PromptPart::InlineData { mime_type, data } => RequestPart::InlineData {
                inline_data: Blob { mime_type, data },
            },
        }
    }
}

#[derive(Deserialize, Debug)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize, Debug)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize, Debug)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// all text parts of the first candidate joined together. Empty if the model produced no text
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

impl GeminiClient {
    pub fn new(
        base_url: &str,
        model: &str,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self, AiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: generate_endpoint(base_url, model),
            api_key,
        })
    }
}

fn generate_endpoint(base_url: &str, model: &str) -> String {
    format!(
        "{}/models/{model}:generateContent",
        base_url.trim_end_matches('/')
    )
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, parts: Vec<PromptPart>) -> Result<String, AiError> {
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: parts.into_iter().map(RequestPart::from).collect(),
            }],
        };
        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AiError::UnexpectedResponse(e.to_string()))?;
        Ok(parsed.into_text())
    }
}
