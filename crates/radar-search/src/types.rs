//! Tavily `/search` request and response bodies.

use chrono::{Days, NaiveDate};
use radar_core::{Candidate, SearchCriteria};
use serde::{Deserialize, Serialize};

/// Search depth sent with every request.
pub const SEARCH_DEPTH: &str = "advanced";

/// Topic sent with every request. `start_date` is honored on this topic,
/// unlike `days`, which Tavily only applies to `news`.
pub const SEARCH_TOPIC: &str = "general";

#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
    pub topic: &'static str,
    pub search_depth: &'static str,
    pub max_results: u32,
    pub include_domains: Vec<&'a str>,
    /// Earliest publication date, `YYYY-MM-DD`.
    pub start_date: String,
}

impl<'a> SearchRequest<'a> {
    /// Builds the request body with the date window ending at `today`.
    #[must_use]
    pub fn new(criteria: &'a SearchCriteria, today: NaiveDate) -> Self {
        Self {
            query: criteria.query(),
            topic: SEARCH_TOPIC,
            search_depth: SEARCH_DEPTH,
            max_results: criteria.max_results(),
            include_domains: criteria.domains(),
            start_date: window_start(today, criteria.days_back())
                .format("%Y-%m-%d")
                .to_string(),
        }
    }
}

/// First day of a window of `days_back` days ending at `today`.
#[must_use]
pub fn window_start(today: NaiveDate, days_back: u32) -> NaiveDate {
    today
        .checked_sub_days(Days::new(u64::from(days_back)))
        .unwrap_or(NaiveDate::MIN)
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: Option<String>,
    pub results: Vec<SearchHit>,
}

/// One result object. `title`, `url`, and `content` are required; a hit
/// missing any of them fails deserialization of the whole response.
#[derive(Debug, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub content: String,
    #[serde(default)]
    pub score: Option<f64>,
}

impl From<SearchHit> for Candidate {
    fn from(hit: SearchHit) -> Self {
        Candidate {
            title: hit.title,
            snippet: hit.content,
            url: hit.url,
        }
    }
}

/// Error envelope. Tavily reports failures either as
/// `{"detail": {"error": "..."}}` or `{"detail": "..."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub(crate) detail: ErrorDetail,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ErrorDetail {
    Nested { error: String },
    Message(String),
}

impl ErrorDetail {
    pub(crate) fn into_message(self) -> String {
        match self {
            ErrorDetail::Nested { error } | ErrorDetail::Message(error) => error,
        }
    }
}
