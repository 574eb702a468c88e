use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::Html,
};
use chrono::Local;
use radar_triage::ScanOutcome;

use crate::html;

use super::scan::{self, ScanRequest};
use super::AppState;

pub(super) async fn index(State(state): State<AppState>) -> Html<String> {
    let request = ScanRequest::default();
    Html(html::page(&request.form_values(state.default_locale), ""))
}

/// Runs a scan from the form's query string and renders the report page.
/// Errors are shown inline above an intact form.
pub(super) async fn scan_page(
    State(state): State<AppState>,
    query: Result<Query<ScanRequest>, QueryRejection>,
) -> (StatusCode, Html<String>) {
    let request = match query {
        Ok(Query(request)) => request,
        Err(e) => {
            let blank = ScanRequest::default();
            let form = blank.form_values(state.default_locale);
            return (
                StatusCode::BAD_REQUEST,
                Html(html::page(&form, &html::error_box(&e.body_text()))),
            );
        }
    };
    let form = request.form_values(state.default_locale);

    let resolved = match request.resolve(state.default_locale) {
        Ok(resolved) => resolved,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Html(html::page(&form, &html::error_box(&e.to_string()))),
            );
        }
    };

    let (status, body) = match scan::run(&state, &resolved).await {
        Ok(ScanOutcome::NoResults) => (
            StatusCode::OK,
            html::notice(resolved.locale.no_results_message()),
        ),
        Ok(ScanOutcome::Completed { report, skipped }) => match html::report_section(
            &report,
            resolved.scoring.persona,
            resolved.locale,
            skipped,
            Local::now().date_naive(),
        ) {
            Ok(section) => (StatusCode::OK, section),
            Err(e) => {
                tracing::error!(error = %e, "report rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    html::error_box("report rendering failed"),
                )
            }
        },
        Err(e) => {
            tracing::error!(error = %e, "scan failed");
            (StatusCode::BAD_GATEWAY, html::error_box(&e.to_string()))
        }
    };

    (status, Html(html::page(&form, &body)))
}
