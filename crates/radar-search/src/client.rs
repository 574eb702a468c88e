//! HTTP client for the Tavily search API.
//!
//! One call per run: [`TavilyClient::search`] posts the query with the
//! domain allowlist and returns candidates in the order the service ranked
//! them. There is no retry; a failed call fails the run.

use std::time::Duration;

use chrono::Local;
use radar_core::{AppConfig, Candidate, SearchCriteria};
use reqwest::{Client, Url};

use crate::error::SearchError;
use crate::types::{ErrorResponse, SearchRequest, SearchResponse};

const DEFAULT_BASE_URL: &str = "https://api.tavily.com/";

/// Client for the Tavily `/search` endpoint.
///
/// Use [`TavilyClient::new`] for production or [`TavilyClient::with_base_url`]
/// to point at a mock server in tests.
pub struct TavilyClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl TavilyClient {
    /// Creates a new client pointed at the production Tavily API.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, SearchError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Builds a client from application config, honoring the
    /// `RADAR_TAVILY_BASE_URL` override.
    ///
    /// # Errors
    ///
    /// See [`TavilyClient::with_base_url`].
    pub fn from_app_config(config: &AppConfig) -> Result<Self, SearchError> {
        Self::with_base_url(
            &config.tavily_api_key,
            config.request_timeout_secs,
            config.tavily_base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
        )
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SearchError::InvalidBaseUrl`] if `base_url`
    /// does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("radar/0.1 (literature-triage)")
            .build()?;

        // Exactly one trailing slash, so joining "search" appends a segment
        // instead of replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| SearchError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Runs one advanced search restricted to the criteria's domain allowlist
    /// and to results published within the last `days_back` days.
    ///
    /// An empty result list is a successful response, not an error.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Http`] on network failure.
    /// - [`SearchError::Api`] on a non-2xx status.
    /// - [`SearchError::Deserialize`] if the body does not match the expected
    ///   shape, including hits missing `title`, `url`, or `content`.
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Candidate>, SearchError> {
        let url = self.search_url()?;
        let request = SearchRequest::new(criteria, Local::now().date_naive());

        tracing::debug!(
            query = criteria.query(),
            max_results = criteria.max_results(),
            start_date = %request.start_date,
            "sending Tavily search"
        );

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
            return Err(SearchError::Api {
                status: status.as_u16(),
                message: Self::error_message(&body),
            });
        }

        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Deserialize {
                context: format!("search(query={})", criteria.query()),
                source: e,
            })?;

        tracing::debug!(
            query = criteria.query(),
            count = parsed.results.len(),
            "Tavily search returned"
        );

        Ok(parsed.results.into_iter().map(Candidate::from).collect())
    }

    fn search_url(&self) -> Result<Url, SearchError> {
        self.base_url
            .join("search")
            .map_err(|e| SearchError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    /// Pulls the human-readable message out of an error body, falling back to
    /// the raw body text.
    fn error_message(body: &str) -> String {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(envelope) => envelope.detail.into_message(),
            Err(_) if body.trim().is_empty() => "empty response body".to_string(),
            Err(_) => body.trim().to_string(),
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
