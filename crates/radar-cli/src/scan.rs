//! `scan` command: one search, one triage pass, one printed report.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Local;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use radar_core::{
    AppConfig, Locale, Persona, ScoringCriteria, SearchCriteria, DEFAULT_DAYS_BACK, DEFAULT_FOCUS,
    DEFAULT_MAX_RESULTS, DEFAULT_QUERY,
};
use radar_search::TavilyClient;
use radar_triage::{export_file_name, OpenAiClient, Pipeline, Progress, Report, ScanOutcome};

use crate::render;

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Search keywords
    #[arg(long, default_value = DEFAULT_QUERY)]
    pub query: String,

    /// How many days back to search
    #[arg(long, default_value_t = DEFAULT_DAYS_BACK)]
    pub days: u32,

    /// Number of results to fetch (3-20)
    #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
    pub max_results: u32,

    /// What a relevant paper should contain; drives the ranking
    #[arg(long, default_value = DEFAULT_FOCUS)]
    pub focus: String,

    /// What to rank down or rule out
    #[arg(long)]
    pub exclude: Option<String>,

    /// Evaluation stance: student, researcher, or engineer
    #[arg(long, default_value = "researcher")]
    pub persona: Persona,

    /// Prompt and report language (ja or en); defaults to `RADAR_LOCALE`
    #[arg(long)]
    pub locale: Option<Locale>,

    /// Restrict the search to this host; repeatable. Defaults to the academic allowlist
    #[arg(long = "domain")]
    pub domains: Vec<String>,

    /// Write the report as CSV to this path
    #[arg(long, conflicts_with = "csv_default")]
    pub csv: Option<PathBuf>,

    /// Write the report as CSV to a dated file in the current directory
    #[arg(long)]
    pub csv_default: bool,
}

impl ScanArgs {
    /// Validated search criteria for this invocation.
    ///
    /// # Errors
    ///
    /// Returns an error if the query is blank or a numeric bound is out of
    /// range.
    pub fn search_criteria(&self) -> anyhow::Result<SearchCriteria> {
        let criteria = if self.domains.is_empty() {
            SearchCriteria::new(&self.query, self.max_results, self.days)?
        } else {
            SearchCriteria::with_domains(&self.query, self.max_results, self.days, &self.domains)?
        };
        Ok(criteria)
    }

    #[must_use]
    pub fn scoring_criteria(&self) -> ScoringCriteria {
        ScoringCriteria::new(self.focus.clone(), self.exclude.clone(), self.persona)
    }

    /// Where to write the CSV export, if anywhere.
    #[must_use]
    pub fn csv_target(&self) -> Option<PathBuf> {
        if let Some(path) = &self.csv {
            return Some(path.clone());
        }
        self.csv_default
            .then(|| PathBuf::from(export_file_name(Local::now().date_naive())))
    }
}

fn progress_bar() -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<10} [{bar:30.cyan/dim}] {pos}/{len} {msg}",
    )?);
    pb.set_prefix("Searching");
    pb.enable_steady_tick(Duration::from_millis(120));
    Ok(pb)
}

fn on_progress(pb: &ProgressBar, progress: Progress) {
    pb.set_prefix("Analyzing");
    pb.set_length(u64::try_from(progress.total).unwrap_or(u64::MAX));
    pb.set_position(u64::try_from(progress.completed).unwrap_or(u64::MAX));
    pb.set_message(format!("{}%", progress.percent()));
}

/// Run one scan and print the report to stdout.
///
/// # Errors
///
/// Returns an error if the arguments are invalid, a client cannot be built,
/// the search call fails, or the CSV file cannot be written. Individual
/// analysis failures are logged and skipped.
pub(crate) async fn run_scan(config: &AppConfig, args: ScanArgs) -> anyhow::Result<()> {
    let criteria = args.search_criteria()?;
    let scoring = args.scoring_criteria();
    let locale = args.locale.unwrap_or(config.locale);

    let search = TavilyClient::from_app_config(config)?;
    let analyst = OpenAiClient::from_app_config(config)?;

    tracing::info!(
        query = criteria.query(),
        max_results = criteria.max_results(),
        days_back = criteria.days_back(),
        persona = %scoring.persona,
        %locale,
        model = analyst.model(),
        "starting scan"
    );

    let pb = progress_bar()?;
    let result = Pipeline::new(&search, &analyst, locale)
        .run_with_progress(&criteria, &scoring, |p| on_progress(&pb, p))
        .await;
    pb.finish_and_clear();

    match result? {
        ScanOutcome::NoResults => {
            println!("{}", locale.no_results_message());
            Ok(())
        }
        ScanOutcome::Completed { report, skipped } => {
            print!("{}", render::render_report(&report, scoring.persona, locale));
            if skipped > 0 {
                eprintln!("{skipped} result(s) skipped because their analysis failed");
            }
            if let Some(path) = args.csv_target() {
                write_csv(&report, &path)?;
                eprintln!("wrote {} rows to {}", report.len(), path.display());
            }
            Ok(())
        }
    }
}

fn write_csv(report: &Report, path: &Path) -> anyhow::Result<()> {
    let bytes = report.to_csv()?;
    std::fs::write(path, bytes)
        .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))
}
