//! Plain-text rendering for terminal output.

use radar_core::{Locale, Persona, Rank};
use radar_triage::Report;

/// Render a report, one section per item in report order.
///
/// Items the persona expands print their URL and full analysis; the rest
/// print only the header line. Must-read items carry the locale's callout.
pub(crate) fn render_report(report: &Report, persona: Persona, locale: Locale) -> String {
    let mut out = String::new();

    let counts: Vec<String> = Rank::ALL
        .iter()
        .map(|rank| format!("{rank}: {}", report.count(*rank)))
        .collect();
    out.push_str(&format!("{}  ({persona})\n\n", counts.join("  ")));

    for entry in report.entries(persona) {
        let item = entry.item;
        out.push_str(&format!("【{}】 {}\n", item.rank, item.title));
        if !entry.expanded {
            continue;
        }

        out.push_str(&format!("    {}\n", item.url));
        if item.rank.is_must_read() {
            out.push_str(&format!("    >> {}\n", locale.must_read_callout()));
        }
        for line in item.analysis.lines() {
            out.push_str(&format!("    {line}\n"));
        }
        out.push('\n');
    }

    out
}

/// One block per persona: expanded ranks, then its policy flags.
pub(crate) fn render_personas() -> String {
    let mut out = String::new();
    for persona in Persona::ALL {
        let policy = persona.policy();
        let expanded: Vec<&str> = persona.expanded_ranks().iter().map(|r| r.label()).collect();

        out.push_str(&format!("{persona}\n"));
        out.push_str(&format!("  expanded ranks:   {}\n", expanded.join(", ")));
        out.push_str(&format!("  cost sensitive:   {}\n", policy.cost_sensitive));
        out.push_str(&format!("  strict relevance: {}\n", policy.strict_relevance));
        out.push_str(&format!("  criteria weight:  {:?}\n", policy.criteria_weight));
        out.push_str(&format!("  emphasis:         {:?}\n", policy.emphasis));
        out.push_str(&format!("  critical:         {}\n", policy.critical));
    }
    out
}

#[cfg(test)]
mod tests {
    use radar_core::AnalyzedItem;
    use radar_triage::assemble;

    use super::*;

    fn item(rank: Rank, title: &str, analysis: &str) -> AnalyzedItem {
        AnalyzedItem {
            rank,
            title: title.to_string(),
            analysis: analysis.to_string(),
            url: format!("https://www.nature.com/articles/{title}"),
        }
    }

    fn sample() -> Report {
        assemble(vec![
            item(Rank::C, "off-topic", "Rank: C\nSummary: unrelated"),
            item(Rank::B, "background", "Rank: B\nSummary: context"),
            item(Rank::S, "organoids", "Rank: S\nSummary: direct hit"),
        ])
    }

    #[test]
    fn sections_follow_report_order() {
        let out = render_report(&sample(), Persona::Researcher, Locale::En);
        let s = out.find("【S】 organoids").expect("S header");
        let b = out.find("【B】 background").expect("B header");
        let c = out.find("【C】 off-topic").expect("C header");
        assert!(s < b && b < c);
    }

    #[test]
    fn collapsed_items_print_header_only() {
        let out = render_report(&sample(), Persona::Researcher, Locale::En);
        assert!(out.contains("Summary: direct hit"));
        assert!(!out.contains("Summary: context"));
        assert!(!out.contains("Summary: unrelated"));
        assert!(!out.contains("https://www.nature.com/articles/background"));
    }

    #[test]
    fn student_expands_b_items() {
        let out = render_report(&sample(), Persona::Student, Locale::En);
        assert!(out.contains("Summary: context"));
        assert!(!out.contains("Summary: unrelated"));
    }

    #[test]
    fn must_read_items_carry_callout() {
        let out = render_report(&sample(), Persona::Engineer, Locale::Ja);
        assert_eq!(out.matches(Locale::Ja.must_read_callout()).count(), 1);
    }

    #[test]
    fn summary_line_counts_each_rank() {
        let out = render_report(&sample(), Persona::Researcher, Locale::En);
        let first = out.lines().next().expect("summary line");
        assert_eq!(first, "S: 1  A: 0  B: 1  C: 1  (researcher)");
    }

    #[test]
    fn expanded_item_lines_are_indented_under_header() {
        let out = render_report(&sample(), Persona::Researcher, Locale::En);
        assert!(out.starts_with("S: 1  A: 0  B: 1  C: 1  (researcher)\n\n【S】 organoids\n"));
        assert!(out.contains(
            "    https://www.nature.com/articles/organoids\n    >> "
        ));
        assert!(out.contains("    Rank: S\n    Summary: direct hit\n\n【B】 background\n"));
    }

    #[test]
    fn personas_listing_covers_all_personas() {
        let out = render_personas();
        for persona in Persona::ALL {
            assert!(out.contains(persona.name()));
        }
        assert!(out.contains("expanded ranks:   S, A, B"));
    }
}
