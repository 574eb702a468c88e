//! Client for the Tavily web search API, restricted to an academic domain
//! allowlist. Produces ordered [`radar_core::Candidate`] lists for the
//! triage pipeline.

pub mod client;
pub mod error;
pub mod types;

pub use client::TavilyClient;
pub use error::SearchError;
