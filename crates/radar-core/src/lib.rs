//! Shared domain types and configuration for the research radar.
//!
//! Everything here is pure data: search and scoring criteria, the rank
//! scale, persona policies, and environment-driven application config.
//! HTTP clients and the analysis pipeline live in sibling crates.

pub mod app_config;
pub mod config;
pub mod criteria;
pub mod error;
pub mod locale;
pub mod persona;
pub mod rank;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use criteria::{
    AnalyzedItem, Candidate, ScoringCriteria, SearchCriteria, ACADEMIC_DOMAINS, DEFAULT_DAYS_BACK,
    DEFAULT_FOCUS, DEFAULT_MAX_RESULTS, DEFAULT_QUERY, MAX_DAYS_BACK, MAX_RESULTS_RANGE,
};
pub use error::{ConfigError, CoreError};
pub use locale::Locale;
pub use persona::{CriteriaWeight, Emphasis, Persona, PersonaPolicy};
pub use rank::Rank;
