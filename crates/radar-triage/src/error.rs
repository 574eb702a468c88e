use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriageError {
    #[error("search failed: {0}")]
    Search(#[from] radar_search::SearchError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("completion API error (HTTP {status}): {message}")]
    CompletionApi { status: u16, message: String },

    #[error("completion response contained no message content")]
    EmptyCompletion,

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV export error: {0}")]
    Export(String),
}
