//! Literature triage pipeline.
//!
//! Takes one search, asks a chat model to rank and summarize every hit
//! against the user's focus criteria, and assembles the results into a
//! report sorted by rank. Hits are analyzed one at a time, in search order.

pub mod error;
pub mod extract;
pub mod llm;
pub mod pipeline;
pub mod prompt;
pub mod report;

pub use error::TriageError;
pub use extract::extract_rank;
pub use llm::OpenAiClient;
pub use pipeline::{AnalysisService, Pipeline, Progress, ScanOutcome, SearchGateway};
pub use prompt::{build_prompt, instruction_block};
pub use report::{assemble, export_file_name, Report, ReportEntry};
