//! Per-run inputs and the records produced from them.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::persona::Persona;
use crate::rank::Rank;

/// Academic publisher and repository hosts searched by default.
pub const ACADEMIC_DOMAINS: [&str; 5] = [
    "nature.com",
    "sciencedirect.com",
    "pubmed.ncbi.nlm.nih.gov",
    "wiley.com",
    "biorxiv.org",
];

pub const MAX_RESULTS_RANGE: RangeInclusive<u32> = 3..=20;
pub const MAX_DAYS_BACK: u32 = 365;

pub const DEFAULT_QUERY: &str = "Thymic regeneration cell sheet engineering";
pub const DEFAULT_DAYS_BACK: u32 = 30;
pub const DEFAULT_MAX_RESULTS: u32 = 5;
pub const DEFAULT_FOCUS: &str =
    "胸腺上皮細胞の分化誘導効率、または細胞シートの積層技術に関する新規性があるか？";

/// What to search for. Validated on construction and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchCriteria {
    query: String,
    domains: BTreeSet<String>,
    max_results: u32,
    days_back: u32,
}

impl SearchCriteria {
    /// Builds criteria restricted to [`ACADEMIC_DOMAINS`].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError`] if the query is blank, `max_results` falls outside
    /// [`MAX_RESULTS_RANGE`], or `days_back` is outside `1..=MAX_DAYS_BACK`.
    pub fn new(query: &str, max_results: u32, days_back: u32) -> Result<Self, CoreError> {
        Self::with_domains(query, max_results, days_back, ACADEMIC_DOMAINS)
    }

    /// Builds criteria with a custom domain allowlist.
    ///
    /// # Errors
    ///
    /// Same as [`SearchCriteria::new`], plus [`CoreError::EmptyDomains`] when
    /// no non-blank domain is given.
    pub fn with_domains<I, S>(
        query: &str,
        max_results: u32,
        days_back: u32,
        domains: I,
    ) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let query = query.trim();
        if query.is_empty() {
            return Err(CoreError::EmptyQuery);
        }
        if !MAX_RESULTS_RANGE.contains(&max_results) {
            return Err(CoreError::MaxResultsOutOfRange {
                value: max_results,
                min: *MAX_RESULTS_RANGE.start(),
                max: *MAX_RESULTS_RANGE.end(),
            });
        }
        if days_back == 0 || days_back > MAX_DAYS_BACK {
            return Err(CoreError::DaysBackOutOfRange {
                value: days_back,
                max: MAX_DAYS_BACK,
            });
        }

        let domains: BTreeSet<String> = domains
            .into_iter()
            .map(|d| d.as_ref().trim().to_ascii_lowercase())
            .filter(|d| !d.is_empty())
            .collect();
        if domains.is_empty() {
            return Err(CoreError::EmptyDomains);
        }

        Ok(Self {
            query: query.to_string(),
            domains,
            max_results,
            days_back,
        })
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Domain allowlist in sorted order.
    #[must_use]
    pub fn domains(&self) -> Vec<&str> {
        self.domains.iter().map(String::as_str).collect()
    }

    #[must_use]
    pub fn max_results(&self) -> u32 {
        self.max_results
    }

    #[must_use]
    pub fn days_back(&self) -> u32 {
        self.days_back
    }
}

/// How results are judged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringCriteria {
    /// Inclusion text: what makes a document worth reading.
    pub focus: String,
    /// Exclusion text. Empty means no exclusion criteria.
    #[serde(default)]
    pub exclusion: String,
    #[serde(default)]
    pub persona: Persona,
}

impl ScoringCriteria {
    #[must_use]
    pub fn new(focus: impl Into<String>, exclusion: Option<String>, persona: Persona) -> Self {
        Self {
            focus: focus.into(),
            exclusion: exclusion.unwrap_or_default(),
            persona,
        }
    }
}

/// One search hit, before analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub title: String,
    pub snippet: String,
    pub url: String,
}

/// A candidate after the model has ranked and summarized it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedItem {
    pub rank: Rank,
    pub title: String,
    /// Full model response, kept verbatim.
    pub analysis: String,
    pub url: String,
}

impl AnalyzedItem {
    #[must_use]
    pub fn from_candidate(candidate: Candidate, rank: Rank, analysis: String) -> Self {
        Self {
            rank,
            title: candidate.title,
            analysis,
            url: candidate.url,
        }
    }
}
