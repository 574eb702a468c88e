use thiserror::Error;

/// Validation failures for domain values built from user input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("search query must not be empty")]
    EmptyQuery,

    #[error("max results must be between {min} and {max}, got {value}")]
    MaxResultsOutOfRange { value: u32, min: u32, max: u32 },

    #[error("date window must be between 1 and {max} days, got {value}")]
    DaysBackOutOfRange { value: u32, max: u32 },

    #[error("result domain allowlist must not be empty")]
    EmptyDomains,

    #[error("unknown persona: {0}")]
    UnknownPersona(String),

    #[error("unknown locale: {0}")]
    UnknownLocale(String),
}

/// Errors raised while loading [`crate::AppConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
