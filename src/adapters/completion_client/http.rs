//! OpenAI-compatible chat completion client using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use url::Url;

use crate::domain::{AppError, CompletionSettings, EndpointConfig, UpstreamError};
use crate::ports::{CompletionClient, CompletionRequest};

const MAX_ERROR_BODY_CHARS: usize = 512;

/// HTTP client for a chat completion endpoint.
#[derive(Clone)]
pub struct HttpCompletionClient {
    api_key: String,
    completions_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpCompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCompletionClient")
            .field("completions_url", &self.completions_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpCompletionClient {
    /// Create a new HTTP client for the given endpoint.
    pub fn new(endpoint: &EndpointConfig, settings: &CompletionSettings) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key: endpoint.api_key().to_string(),
            completions_url: endpoint.completions_url()?,
            client,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    #[serde(default)]
    message: Option<ApiMessage>,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    #[serde(default)]
    content: Option<String>,
}

impl CompletionClient for HttpCompletionClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError> {
        let response = self
            .client
            .post(self.completions_url.clone())
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| UpstreamError::Transport(e.without_url().to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY_CHARS),
            }
            .into());
        }

        let body = response.text().map_err(|e| UpstreamError::Transport(e.to_string()))?;
        extract_content(&body).map_err(AppError::from)
    }
}

/// Pull the first choice's message content out of a response body.
fn extract_content(body: &str) -> Result<String, UpstreamError> {
    let api_response: ApiResponse =
        serde_json::from_str(body).map_err(|e| UpstreamError::MalformedPayload(e.to_string()))?;

    let first = api_response.choices.into_iter().next().ok_or(UpstreamError::EmptyChoices)?;

    first.message.and_then(|message| message.content).ok_or(UpstreamError::MissingContent)
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}
