use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::llm::client::CompletionClient;
use crate::notes::Credential;
use crate::AnalysisError;

const DEFAULT_GROQ_ENDPOINT: &str = "https://api.groq.com/openai/v1";
const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 2048;

/// Groq's OpenAI-compatible chat completion API.
pub struct GroqClient {
    http: Client,
    model: String,
    endpoint: String,
}

impl GroqClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let model = if settings.llm.model.trim().is_empty() {
            DEFAULT_GROQ_MODEL.to_string()
        } else {
            settings.llm.model.trim().to_string()
        };

        let endpoint = if settings.llm.endpoint.trim().is_empty() {
            DEFAULT_GROQ_ENDPOINT.to_string()
        } else {
            settings
                .llm
                .endpoint
                .trim()
                .trim_end_matches('/')
                .to_string()
        };

        Ok(Self {
            http: Client::builder()
                .build()
                .context("Failed to build Groq HTTP client")?,
            model,
            endpoint,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, credential: &Credential, prompt: &str) -> crate::Result<String> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        tracing::debug!(model = %self.model, prompt_chars = prompt.len(), "Calling Groq chat completion");

        let response = self
            .http
            .post(self.request_url())
            .bearer_auth(credential.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| AnalysisError::Network(format!("Groq request failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AnalysisError::Network(format!("Failed to read Groq response: {e}")))?;

        if !status.is_success() {
            return Err(classify_status(status, &text));
        }

        let payload: ChatCompletionResponse = serde_json::from_str(&text).map_err(|e| {
            AnalysisError::MalformedResponse(format!("Failed to decode Groq completion: {e}"))
        })?;

        let content = payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                AnalysisError::MalformedResponse(
                    "Groq completion did not contain message content".to_string(),
                )
            })?;

        tracing::debug!(content_chars = content.len(), "Groq completion received");
        Ok(content)
    }
}

/// Map a non-success status to an error kind, keeping the endpoint's message.
fn classify_status(status: StatusCode, body: &str) -> AnalysisError {
    let message = match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => format!("{status}: {}", envelope.error.message),
        Err(_) if body.trim().is_empty() => status.to_string(),
        Err(_) => format!("{status}: {}", body.trim()),
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AnalysisError::Auth(message),
        StatusCode::TOO_MANY_REQUESTS => AnalysisError::RateLimited(message),
        _ => AnalysisError::Network(message),
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}
