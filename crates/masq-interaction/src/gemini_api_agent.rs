//! GeminiApiAgent - Direct REST API implementation for Gemini.
//!
//! Calls the Gemini REST API without any CLI dependency. Safety blocks and
//! empty responses are surfaced as typed [`AgentError`] variants so the
//! service layer can translate them for the user.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::agent::{Agent, AgentError};
use crate::config::SecretConfig;

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-pro-exp-03-25";
const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Agent implementation that talks to the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiApiAgent {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiApiAgent {
    /// Creates a new agent with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Creates an agent from a loaded [`SecretConfig`].
    ///
    /// Model name defaults to `gemini-2.5-pro-exp-03-25` if not specified.
    pub fn from_config(config: &SecretConfig) -> Self {
        let model = config
            .model_name
            .clone()
            .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());
        tracing::info!("[GeminiApiAgent] Configured for model: {}", model);
        Self::new(config.gemini_api_key.clone(), model)
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    async fn send_request(&self, body: &GenerateContentRequest) -> Result<String, AgentError> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = self.model,
            api_key = self.api_key
        );

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| AgentError::Process {
                status_code: None,
                message: format!("Gemini API request failed: {err}"),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| AgentError::Other(format!("Failed to parse Gemini response: {err}")))?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl Agent for GeminiApiAgent {
    fn expertise(&self) -> &str {
        "Gemini API client for persona-flavored text generation"
    }

    async fn execute(&self, prompt: &str) -> Result<String, AgentError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };
        self.send_request(&request).await
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<ContentResponse>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

fn extract_text_response(response: GenerateContentResponse) -> Result<String, AgentError> {
    if let Some(reason) = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        return Err(AgentError::Blocked { reason });
    }

    let candidate = response
        .candidates
        .and_then(|candidates| candidates.into_iter().next());

    let Some(Candidate {
        content,
        finish_reason,
    }) = candidate
    else {
        return Err(AgentError::EmptyResponse);
    };

    let text = content
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .filter(|text| !text.trim().is_empty());

    if let Some(text) = text {
        return Ok(text);
    }

    // A candidate with no text and a non-STOP finish reason was cut off by
    // the service, most commonly by the safety filter.
    match finish_reason {
        Some(reason) if reason != "STOP" => Err(AgentError::Blocked { reason }),
        _ => Err(AgentError::EmptyResponse),
    }
}

fn map_http_error(status: StatusCode, body: String) -> AgentError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    AgentError::Process {
        status_code: Some(status.as_u16()),
        message,
    }
}
