//! Server-rendered pages for the browser UI.
//!
//! Everything is built with `format!` over small templates. The CSV export
//! is embedded in the page as a `data:` URI, so nothing about a report is
//! kept on the server after the response is sent.

use chrono::NaiveDate;
use percent_encoding::{percent_encode, NON_ALPHANUMERIC};
use radar_core::{Locale, Persona, Rank, MAX_DAYS_BACK, MAX_RESULTS_RANGE};
use radar_triage::{export_file_name, Report, TriageError};

/// Current form state, echoed back into the inputs on every page.
#[derive(Debug, Clone)]
pub struct FormValues<'a> {
    pub query: &'a str,
    pub days_back: u32,
    pub max_results: u32,
    pub focus: &'a str,
    pub exclusion: &'a str,
    pub persona: Persona,
    pub locale: Locale,
}

struct Labels {
    caption: &'static str,
    parameters: &'static str,
    query: &'static str,
    days_back: &'static str,
    max_results: &'static str,
    focus: &'static str,
    exclusion: &'static str,
    persona: &'static str,
    language: &'static str,
    submit: &'static str,
    report: &'static str,
    analysis: &'static str,
    download: &'static str,
}

fn labels(locale: Locale) -> Labels {
    match locale {
        Locale::Ja => Labels {
            caption: "最新文献・技術情報の「収集」と「査定」を自動化する",
            parameters: "検索条件",
            query: "検索キーワード",
            days_back: "検索範囲（過去n日）",
            max_results: "取得件数",
            focus: "査定の重点ポイント",
            exclusion: "除外条件",
            persona: "評価モード",
            language: "言語",
            submit: "レーダー照射 (検索開始)",
            report: "Intelligence Report",
            analysis: "AI査定",
            download: "レポートをCSVで保存",
        },
        Locale::En => Labels {
            caption: "Automates collecting and triaging the latest literature",
            parameters: "Search parameters",
            query: "Keywords",
            days_back: "Date window (days)",
            max_results: "Results to fetch",
            focus: "Focus points",
            exclusion: "Exclusion criteria",
            persona: "Persona",
            language: "Language",
            submit: "Scan",
            report: "Intelligence Report",
            analysis: "Analysis",
            download: "Download report as CSV",
        },
    }
}

fn skipped_notice(locale: Locale, skipped: usize) -> String {
    match locale {
        Locale::Ja => format!("{skipped} 件は査定に失敗したため除外しました。"),
        Locale::En => format!("{skipped} result(s) were left out because their analysis failed."),
    }
}

/// Escapes text for use in element content and quoted attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `data:` URI carrying the CSV bytes, percent-encoded.
#[must_use]
pub fn csv_data_uri(csv: &[u8]) -> String {
    format!(
        "data:text/csv;charset=utf-8,{}",
        percent_encode(csv, NON_ALPHANUMERIC)
    )
}

fn is_web_url(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}

/// Wraps `body` in the full page layout with the search form on top.
#[must_use]
pub fn page(form: &FormValues<'_>, body: &str) -> String {
    let l = labels(form.locale);
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Strategic Intelligence Radar</title>
<style>
body {{ font-family: system-ui, sans-serif; max-width: 960px; margin: 2rem auto; padding: 0 1rem; }}
form {{ display: grid; grid-template-columns: 12rem 1fr; gap: .5rem 1rem; }}
form textarea {{ min-height: 4rem; }}
details {{ border: 1px solid #ddd; border-radius: 6px; margin: .5rem 0; padding: .5rem 1rem; }}
summary {{ cursor: pointer; font-weight: 600; }}
pre.analysis {{ white-space: pre-wrap; font-family: inherit; }}
.callout {{ background: #fdecea; color: #b71c1c; padding: .5rem; border-radius: 4px; }}
.error {{ background: #fdecea; padding: .75rem; border-radius: 4px; }}
.notice {{ background: #fff8e1; padding: .75rem; border-radius: 4px; }}
</style>
</head>
<body>
<h1>Strategic Intelligence Radar</h1>
<p>{caption}</p>
{form}
{body}
</body>
</html>
"#,
        lang = form.locale.code(),
        caption = l.caption,
        form = search_form(form),
    )
}

fn search_form(form: &FormValues<'_>) -> String {
    let l = labels(form.locale);

    let mut personas = String::new();
    for persona in Persona::ALL {
        let selected = if persona == form.persona { " selected" } else { "" };
        personas.push_str(&format!(
            r#"<option value="{persona}"{selected}>{persona}</option>"#
        ));
    }

    let mut locales = String::new();
    for locale in Locale::ALL {
        let selected = if locale == form.locale { " selected" } else { "" };
        locales.push_str(&format!(
            r#"<option value="{locale}"{selected}>{locale}</option>"#
        ));
    }

    format!(
        r#"<h2>{parameters}</h2>
<form method="get" action="/scan">
<label for="query">{query_label}</label>
<input id="query" name="query" value="{query}" required>
<label for="days_back">{days_label}</label>
<input id="days_back" name="days_back" type="number" min="1" max="{max_days}" value="{days_back}">
<label for="max_results">{max_label}</label>
<input id="max_results" name="max_results" type="number" min="{min_results}" max="{max_results_cap}" value="{max_results}">
<label for="focus">{focus_label}</label>
<textarea id="focus" name="focus">{focus}</textarea>
<label for="exclusion">{exclusion_label}</label>
<textarea id="exclusion" name="exclusion">{exclusion}</textarea>
<label for="persona">{persona_label}</label>
<select id="persona" name="persona">{personas}</select>
<label for="locale">{language_label}</label>
<select id="locale" name="locale">{locales}</select>
<span></span>
<button type="submit">{submit}</button>
</form>"#,
        parameters = l.parameters,
        query_label = l.query,
        query = escape(form.query),
        days_label = l.days_back,
        max_days = MAX_DAYS_BACK,
        days_back = form.days_back,
        max_label = l.max_results,
        min_results = MAX_RESULTS_RANGE.start(),
        max_results_cap = MAX_RESULTS_RANGE.end(),
        max_results = form.max_results,
        focus_label = l.focus,
        focus = escape(form.focus),
        exclusion_label = l.exclusion,
        exclusion = escape(form.exclusion),
        persona_label = l.persona,
        language_label = l.language,
        submit = l.submit,
    )
}

/// The report: one `<details>` per item, opened for the persona's expanded
/// ranks, followed by the CSV download link.
///
/// # Errors
///
/// Returns [`TriageError`] if the CSV export cannot be produced.
pub fn report_section(
    report: &Report,
    persona: Persona,
    locale: Locale,
    skipped: usize,
    today: NaiveDate,
) -> Result<String, TriageError> {
    let l = labels(locale);
    let mut out = String::new();

    out.push_str(&format!("<h2>{}</h2>\n", l.report));
    if skipped > 0 {
        out.push_str(&format!(
            "<p class=\"notice\">{}</p>\n",
            skipped_notice(locale, skipped)
        ));
    }

    for entry in report.entries(persona) {
        let item = entry.item;
        let open = if entry.expanded { " open" } else { "" };
        out.push_str(&format!(
            r#"<details class="item rank-{rank}"{open}>
<summary><span style="color: {color}">【{rank}】</span> {title}</summary>
"#,
            rank = item.rank,
            color = item.rank.color(),
            title = escape(&item.title),
        ));

        let url = escape(&item.url);
        if is_web_url(&item.url) {
            out.push_str(&format!(
                r#"<p><strong>URL</strong>: <a href="{url}" target="_blank" rel="noopener noreferrer">{url}</a></p>
"#
            ));
        } else {
            out.push_str(&format!("<p><strong>URL</strong>: {url}</p>\n"));
        }

        out.push_str(&format!(
            r#"<p><strong>{}</strong>:</p>
<pre class="analysis">{}</pre>
"#,
            l.analysis,
            escape(&item.analysis),
        ));
        if item.rank == Rank::S {
            out.push_str(&format!(
                "<p class=\"callout\">{}</p>\n",
                locale.must_read_callout()
            ));
        }
        out.push_str("</details>\n");
    }

    let csv = report.to_csv()?;
    out.push_str(&format!(
        r#"<p><a download="{file}" href="{href}">{label}</a></p>
"#,
        file = export_file_name(today),
        href = csv_data_uri(&csv),
        label = l.download,
    ));

    Ok(out)
}

/// A notice box, e.g. for an empty search.
#[must_use]
pub fn notice(message: &str) -> String {
    format!(r#"<p class="notice">{}</p>"#, escape(message))
}

/// An error box shown above the form's results area.
#[must_use]
pub fn error_box(message: &str) -> String {
    format!(r#"<p class="error" role="alert">{}</p>"#, escape(message))
}
