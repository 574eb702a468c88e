//! Chat-completions client used as the analysis service.

use std::time::Duration;

use radar_core::AppConfig;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::error::TriageError;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/";

/// OpenAI-compatible chat-completions client. Sends one user message per
/// call and returns the first choice's content.
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
    temperature: f32,
    base_url: Url,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl OpenAiClient {
    /// Creates a client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(
        api_key: &str,
        model: &str,
        temperature: f32,
        timeout_secs: u64,
    ) -> Result<Self, TriageError> {
        Self::with_base_url(api_key, model, temperature, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Builds a client from application config, honoring the
    /// `RADAR_OPENAI_BASE_URL` override.
    ///
    /// # Errors
    ///
    /// See [`OpenAiClient::with_base_url`].
    pub fn from_app_config(config: &AppConfig) -> Result<Self, TriageError> {
        Self::with_base_url(
            &config.openai_api_key,
            &config.model,
            config.temperature,
            config.request_timeout_secs,
            config.openai_base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
        )
    }

    /// Creates a client with a custom base URL (for testing with wiremock, or
    /// for any OpenAI-compatible gateway).
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`TriageError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        temperature: f32,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, TriageError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("radar/0.1 (literature-triage)")
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| TriageError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            temperature,
            base_url,
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends `prompt` as a single user message and returns the reply text.
    ///
    /// # Errors
    ///
    /// - [`TriageError::Http`] on network failure or timeout.
    /// - [`TriageError::CompletionApi`] on a non-2xx status.
    /// - [`TriageError::Deserialize`] if the body is not a chat completion.
    /// - [`TriageError::EmptyCompletion`] if there is no choice or its content is null.
    pub async fn complete(&self, prompt: &str) -> Result<String, TriageError> {
        let url = self
            .base_url
            .join("v1/chat/completions")
            .map_err(|e| TriageError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;

        let request = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map_or_else(|_| body.trim().to_string(), |e| e.error.message);
            return Err(TriageError::CompletionApi {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|e| TriageError::Deserialize {
                context: format!("chat completion (model={})", self.model),
                source: e,
            })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(TriageError::EmptyCompletion)
    }
}
