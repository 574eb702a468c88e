use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use radar_core::{
    CoreError, Locale, Persona, Rank, ScoringCriteria, SearchCriteria, DEFAULT_DAYS_BACK,
    DEFAULT_FOCUS, DEFAULT_MAX_RESULTS, DEFAULT_QUERY,
};
use radar_triage::{Pipeline, ScanOutcome, TriageError};
use serde::{Deserialize, Serialize};

use crate::html::FormValues;
use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

/// Scan parameters, shared by the JSON API body and the `/scan` query string.
/// Every field is optional and falls back to the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ScanRequest {
    pub query: Option<String>,
    pub days_back: Option<u32>,
    pub max_results: Option<u32>,
    pub focus: Option<String>,
    pub exclusion: Option<String>,
    pub persona: Option<Persona>,
    pub locale: Option<Locale>,
    pub domains: Option<Vec<String>>,
}

/// A validated request, ready to run.
#[derive(Debug)]
pub(super) struct ResolvedScan {
    pub criteria: SearchCriteria,
    pub scoring: ScoringCriteria,
    pub locale: Locale,
}

impl ScanRequest {
    pub(super) fn resolve(&self, default_locale: Locale) -> Result<ResolvedScan, CoreError> {
        let query = self.query.as_deref().unwrap_or(DEFAULT_QUERY);
        let max_results = self.max_results.unwrap_or(DEFAULT_MAX_RESULTS);
        let days_back = self.days_back.unwrap_or(DEFAULT_DAYS_BACK);

        let criteria = match &self.domains {
            Some(domains) => SearchCriteria::with_domains(query, max_results, days_back, domains)?,
            None => SearchCriteria::new(query, max_results, days_back)?,
        };
        let scoring = ScoringCriteria::new(
            self.focus.as_deref().unwrap_or(DEFAULT_FOCUS),
            self.exclusion.clone(),
            self.persona.unwrap_or_default(),
        );

        Ok(ResolvedScan {
            criteria,
            scoring,
            locale: self.locale.unwrap_or(default_locale),
        })
    }

    pub(super) fn form_values(&self, default_locale: Locale) -> FormValues<'_> {
        FormValues {
            query: self.query.as_deref().unwrap_or(DEFAULT_QUERY),
            days_back: self.days_back.unwrap_or(DEFAULT_DAYS_BACK),
            max_results: self.max_results.unwrap_or(DEFAULT_MAX_RESULTS),
            focus: self.focus.as_deref().unwrap_or(DEFAULT_FOCUS),
            exclusion: self.exclusion.as_deref().unwrap_or_default(),
            persona: self.persona.unwrap_or_default(),
            locale: self.locale.unwrap_or(default_locale),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub(super) enum ScanStatus {
    Completed,
    NoResults,
}

#[derive(Debug, Serialize)]
pub(super) struct RankCount {
    pub rank: Rank,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub(super) struct ScanItem {
    pub rank: Rank,
    pub title: String,
    pub analysis: String,
    pub url: String,
    /// Whether the persona's display policy opens this item by default.
    pub expanded: bool,
}

#[derive(Debug, Serialize)]
pub(super) struct ScanData {
    pub status: ScanStatus,
    pub query: String,
    pub persona: Persona,
    pub locale: Locale,
    pub skipped: usize,
    pub counts: Vec<RankCount>,
    pub items: Vec<ScanItem>,
}

impl ScanData {
    fn new(resolved: &ResolvedScan, outcome: &ScanOutcome) -> Self {
        let persona = resolved.scoring.persona;
        let (status, skipped) = match outcome {
            ScanOutcome::NoResults => (ScanStatus::NoResults, 0),
            ScanOutcome::Completed { skipped, .. } => (ScanStatus::Completed, *skipped),
        };

        let (counts, items) = match outcome.report() {
            Some(report) => (
                Rank::ALL
                    .iter()
                    .map(|rank| RankCount {
                        rank: *rank,
                        count: report.count(*rank),
                    })
                    .collect(),
                report
                    .entries(persona)
                    .map(|entry| ScanItem {
                        rank: entry.item.rank,
                        title: entry.item.title.clone(),
                        analysis: entry.item.analysis.clone(),
                        url: entry.item.url.clone(),
                        expanded: entry.expanded,
                    })
                    .collect(),
            ),
            None => (
                Rank::ALL
                    .iter()
                    .map(|rank| RankCount {
                        rank: *rank,
                        count: 0,
                    })
                    .collect(),
                Vec::new(),
            ),
        };

        Self {
            status,
            query: resolved.criteria.query().to_string(),
            persona,
            locale: resolved.locale,
            skipped,
            counts,
            items,
        }
    }
}

/// Runs one scan over the shared clients.
pub(super) async fn run(state: &AppState, resolved: &ResolvedScan) -> Result<ScanOutcome, TriageError> {
    Pipeline::new(state.search.as_ref(), state.analyst.as_ref(), resolved.locale)
        .run(&resolved.criteria, &resolved.scoring)
        .await
}

pub(super) fn map_triage_error(request_id: String, error: &TriageError) -> ApiError {
    match error {
        TriageError::Search(e) => {
            tracing::error!(error = %e, "search request failed");
            ApiError::new(
                request_id,
                "upstream_error",
                format!("search service request failed: {e}"),
            )
        }
        other => {
            tracing::error!(error = %other, "scan failed");
            ApiError::new(request_id, "internal_error", "scan failed")
        }
    }
}

pub(super) async fn scan_json(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<ScanRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<ScanData>>, ApiError> {
    let Json(request) = payload
        .map_err(|e| ApiError::new(req_id.0.clone(), "validation_error", e.body_text()))?;

    let resolved = request
        .resolve(state.default_locale)
        .map_err(|e| ApiError::new(req_id.0.clone(), "validation_error", e.to_string()))?;

    let outcome = run(&state, &resolved)
        .await
        .map_err(|e| map_triage_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: ScanData::new(&resolved, &outcome),
        meta: ResponseMeta::new(req_id.0),
    }))
}
