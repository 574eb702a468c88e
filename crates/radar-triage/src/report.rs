//! Report assembly and CSV export.

use chrono::NaiveDate;
use radar_core::{AnalyzedItem, Persona, Rank};
use serde::Serialize;

use crate::error::TriageError;

pub const CSV_HEADER: [&str; 4] = ["Rank", "Title", "Analysis", "URL"];

/// Analyzed items ordered by rank, `S` first. Items of equal rank keep the
/// order the search service returned them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    items: Vec<AnalyzedItem>,
}

/// One report item paired with its default display state.
#[derive(Debug, Clone, Copy)]
pub struct ReportEntry<'a> {
    pub item: &'a AnalyzedItem,
    pub expanded: bool,
}

/// Sorts items into a [`Report`]. The sort is stable.
#[must_use]
pub fn assemble(items: Vec<AnalyzedItem>) -> Report {
    Report::assemble(items)
}

/// Dated download name, e.g. `radar_report_2026-10-19.csv`.
#[must_use]
pub fn export_file_name(date: NaiveDate) -> String {
    format!("radar_report_{}.csv", date.format("%Y-%m-%d"))
}

impl Report {
    #[must_use]
    pub fn assemble(mut items: Vec<AnalyzedItem>) -> Self {
        // `sort_by_key` is stable; equal ranks keep search order.
        items.sort_by_key(|item| item.rank);
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[AnalyzedItem] {
        &self.items
    }

    #[must_use]
    pub fn into_items(self) -> Vec<AnalyzedItem> {
        self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn count(&self, rank: Rank) -> usize {
        self.items.iter().filter(|item| item.rank == rank).count()
    }

    /// Items with the expand flag the persona's display policy assigns.
    pub fn entries(&self, persona: Persona) -> impl Iterator<Item = ReportEntry<'_>> {
        self.items.iter().map(move |item| ReportEntry {
            item,
            expanded: persona.expands(item.rank),
        })
    }

    /// Serializes the report as UTF-8 CSV with a `Rank,Title,Analysis,URL`
    /// header row.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::Csv`] if a row cannot be written.
    pub fn to_csv(&self) -> Result<Vec<u8>, TriageError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(CSV_HEADER)?;
        for item in &self.items {
            writer.write_record([
                item.rank.label(),
                item.title.as_str(),
                item.analysis.as_str(),
                item.url.as_str(),
            ])?;
        }
        writer
            .into_inner()
            .map_err(|e| TriageError::Export(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(rank: Rank, title: &str) -> AnalyzedItem {
        AnalyzedItem {
            rank,
            title: title.to_string(),
            analysis: format!("analysis of {title}"),
            url: format!("https://example.org/{title}"),
        }
    }

    fn titles(report: &Report) -> Vec<&str> {
        report.items().iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn sorts_by_rank_precedence() {
        let report = assemble(vec![
            item(Rank::C, "c"),
            item(Rank::B, "b"),
            item(Rank::S, "s"),
            item(Rank::A, "a"),
        ]);
        assert_eq!(titles(&report), vec!["s", "a", "b", "c"]);
    }

    #[test]
    fn equal_ranks_keep_input_order() {
        let report = assemble(vec![
            item(Rank::B, "b1"),
            item(Rank::A, "a1"),
            item(Rank::B, "b2"),
            item(Rank::A, "a2"),
            item(Rank::B, "b3"),
        ]);
        assert_eq!(titles(&report), vec!["a1", "a2", "b1", "b2", "b3"]);
    }

    #[test]
    fn ranks_are_non_decreasing() {
        let ranks = [Rank::B, Rank::C, Rank::S, Rank::B, Rank::A, Rank::S, Rank::C];
        let items = ranks
            .iter()
            .enumerate()
            .map(|(i, r)| item(*r, &i.to_string()))
            .collect();
        let report = assemble(items);
        assert!(report
            .items()
            .windows(2)
            .all(|pair| pair[0].rank <= pair[1].rank));
    }

    #[test]
    fn assemble_is_idempotent() {
        let once = assemble(vec![
            item(Rank::C, "1"),
            item(Rank::S, "2"),
            item(Rank::C, "3"),
            item(Rank::A, "4"),
        ]);
        let twice = assemble(once.clone().into_items());
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_input_gives_empty_report() {
        let report = assemble(Vec::new());
        assert!(report.is_empty());
        assert_eq!(report, Report::default());
    }

    #[test]
    fn counts_per_rank() {
        let report = assemble(vec![item(Rank::A, "1"), item(Rank::A, "2"), item(Rank::C, "3")]);
        assert_eq!(report.count(Rank::A), 2);
        assert_eq!(report.count(Rank::C), 1);
        assert_eq!(report.count(Rank::S), 0);
        assert_eq!(report.len(), 3);
    }

    #[test]
    fn entries_follow_persona_expansion() {
        let report = assemble(vec![item(Rank::S, "s"), item(Rank::B, "b"), item(Rank::C, "c")]);

        let student: Vec<bool> = report.entries(Persona::Student).map(|e| e.expanded).collect();
        assert_eq!(student, vec![true, true, false]);

        let engineer: Vec<bool> = report.entries(Persona::Engineer).map(|e| e.expanded).collect();
        assert_eq!(engineer, vec![true, false, false]);
    }

    #[test]
    fn csv_has_header_and_one_row_per_item() {
        let report = assemble(vec![item(Rank::B, "second"), item(Rank::S, "first")]);
        let csv = String::from_utf8(report.to_csv().expect("csv")).expect("utf-8");
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Rank,Title,Analysis,URL");
        assert_eq!(
            lines[1],
            "S,first,analysis of first,https://example.org/first"
        );
        assert_eq!(
            lines[2],
            "B,second,analysis of second,https://example.org/second"
        );
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn csv_quotes_multiline_analysis_and_keeps_utf8() {
        let report = assemble(vec![AnalyzedItem {
            rank: Rank::A,
            title: "胸腺, 再生".to_string(),
            analysis: "判定ランク: A\n要約: 有益".to_string(),
            url: "https://nature.com/x".to_string(),
        }]);
        let csv = String::from_utf8(report.to_csv().unwrap()).unwrap();
        assert!(csv.contains("\"胸腺, 再生\""));
        assert!(csv.contains("\"判定ランク: A\n要約: 有益\""));
    }

    #[test]
    fn empty_report_csv_is_header_only() {
        let csv = String::from_utf8(Report::default().to_csv().unwrap()).unwrap();
        assert_eq!(csv, "Rank,Title,Analysis,URL\n");
    }

    #[test]
    fn export_file_name_is_dated() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(export_file_name(date), "radar_report_2026-10-19.csv");
    }
}
