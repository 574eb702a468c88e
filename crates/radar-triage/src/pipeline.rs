//! Search → analyze → rank → assemble, one candidate at a time.

use std::future::Future;

use radar_core::{AnalyzedItem, Candidate, Locale, ScoringCriteria, SearchCriteria};
use radar_search::{SearchError, TavilyClient};

use crate::error::TriageError;
use crate::extract::extract_rank;
use crate::llm::OpenAiClient;
use crate::prompt::build_prompt;
use crate::report::Report;

/// Source of candidates for a run.
pub trait SearchGateway {
    fn search(
        &self,
        criteria: &SearchCriteria,
    ) -> impl Future<Output = Result<Vec<Candidate>, SearchError>> + Send;
}

/// Turns one prompt into free-form ranked text.
pub trait AnalysisService {
    fn analyze(&self, prompt: &str) -> impl Future<Output = Result<String, TriageError>> + Send;
}

impl SearchGateway for TavilyClient {
    fn search(
        &self,
        criteria: &SearchCriteria,
    ) -> impl Future<Output = Result<Vec<Candidate>, SearchError>> + Send {
        TavilyClient::search(self, criteria)
    }
}

impl AnalysisService for OpenAiClient {
    fn analyze(&self, prompt: &str) -> impl Future<Output = Result<String, TriageError>> + Send {
        self.complete(prompt)
    }
}

/// Result of a run that reached the search service successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The search returned nothing. Not an error.
    NoResults,
    Completed {
        report: Report,
        /// Candidates dropped because their analysis call failed.
        skipped: usize,
    },
}

impl ScanOutcome {
    #[must_use]
    pub fn report(&self) -> Option<&Report> {
        match self {
            ScanOutcome::NoResults => None,
            ScanOutcome::Completed { report, .. } => Some(report),
        }
    }

    /// The report, or an empty one for [`ScanOutcome::NoResults`].
    #[must_use]
    pub fn into_report(self) -> Report {
        match self {
            ScanOutcome::NoResults => Report::default(),
            ScanOutcome::Completed { report, .. } => report,
        }
    }
}

/// Per-candidate progress, reported after each analysis attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    /// Completion in `0..=100`.
    #[must_use]
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        let pct = (self.completed.min(self.total) * 100) / self.total;
        u8::try_from(pct).unwrap_or(100)
    }
}

/// A configured triage run. Holds no state between runs.
pub struct Pipeline<'a, G, A> {
    gateway: &'a G,
    analyst: &'a A,
    locale: Locale,
}

impl<'a, G, A> Pipeline<'a, G, A>
where
    G: SearchGateway,
    A: AnalysisService,
{
    #[must_use]
    pub fn new(gateway: &'a G, analyst: &'a A, locale: Locale) -> Self {
        Self {
            gateway,
            analyst,
            locale,
        }
    }

    /// Runs one scan without progress reporting.
    ///
    /// # Errors
    ///
    /// See [`Pipeline::run_with_progress`].
    pub async fn run(
        &self,
        criteria: &SearchCriteria,
        scoring: &ScoringCriteria,
    ) -> Result<ScanOutcome, TriageError> {
        self.run_with_progress(criteria, scoring, |_| {}).await
    }

    /// Runs one scan.
    ///
    /// Calls the search gateway once, then analyzes each candidate in search
    /// order. A candidate whose analysis fails is dropped and the run moves
    /// on; `on_progress` fires after every candidate either way.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::Search`] if the search gateway fails. Analysis
    /// failures never fail the run.
    pub async fn run_with_progress<F>(
        &self,
        criteria: &SearchCriteria,
        scoring: &ScoringCriteria,
        mut on_progress: F,
    ) -> Result<ScanOutcome, TriageError>
    where
        F: FnMut(Progress),
    {
        let candidates = self.gateway.search(criteria).await?;

        if candidates.is_empty() {
            tracing::info!(query = criteria.query(), "search returned no candidates");
            return Ok(ScanOutcome::NoResults);
        }

        let total = candidates.len();
        tracing::info!(
            query = criteria.query(),
            candidates = total,
            persona = %scoring.persona,
            "starting analysis"
        );

        let mut items: Vec<AnalyzedItem> = Vec::with_capacity(total);
        let mut skipped = 0usize;

        for (index, candidate) in candidates.into_iter().enumerate() {
            let prompt = build_prompt(&candidate, scoring, self.locale);

            match self.analyst.analyze(&prompt).await {
                Ok(analysis) => {
                    let rank = extract_rank(&analysis);
                    tracing::debug!(url = %candidate.url, %rank, "candidate analyzed");
                    items.push(AnalyzedItem::from_candidate(candidate, rank, analysis));
                }
                Err(e) => {
                    tracing::warn!(
                        url = %candidate.url,
                        error = %e,
                        "analysis failed, dropping candidate"
                    );
                    skipped += 1;
                }
            }

            on_progress(Progress {
                completed: index + 1,
                total,
            });
        }

        let report = Report::assemble(items);
        tracing::info!(
            query = criteria.query(),
            analyzed = report.len(),
            skipped,
            "scan complete"
        );

        Ok(ScanOutcome::Completed { report, skipped })
    }
}
