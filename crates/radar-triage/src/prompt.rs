//! Prompt construction.
//!
//! The instruction block is rendered from the persona's [`PersonaPolicy`],
//! one sentence per policy field, so the wording lives here and the policy
//! stays plain data in `radar-core`.

use radar_core::{
    Candidate, CriteriaWeight, Emphasis, Locale, Persona, PersonaPolicy, Rank, ScoringCriteria,
};

/// Renders the persona-specific instruction block.
#[must_use]
pub fn instruction_block(persona: Persona, locale: Locale) -> String {
    let policy = persona.policy();
    let mut lines = vec![role_line(persona, locale).to_string()];
    lines.extend(policy_lines(policy, locale).iter().map(|s| format!("- {s}")));
    lines.join("\n")
}

/// Builds the full prompt for one candidate.
///
/// Always embeds the instruction block, the focus and exclusion text (an
/// empty exclusion is embedded as-is), the candidate's title, snippet, and
/// URL, and the fixed three-line output format.
#[must_use]
pub fn build_prompt(candidate: &Candidate, scoring: &ScoringCriteria, locale: Locale) -> String {
    let instructions = instruction_block(scoring.persona, locale);
    let format_block = output_format(locale);

    match locale {
        Locale::Ja => format!(
            "{instructions}\n\n\
             【重点ポイント】\n{focus}\n\n\
             【除外条件】\n{exclusion}\n\n\
             【文献情報】\n\
             タイトル: {title}\n\
             内容スニペット: {snippet}\n\
             URL: {url}\n\n\
             【出力フォーマット】\n\
             以下の形式で日本語で出力せよ。余計な前置きは不要。\n\n\
             {format_block}",
            focus = scoring.focus,
            exclusion = scoring.exclusion,
            title = candidate.title,
            snippet = candidate.snippet,
            url = candidate.url,
        ),
        Locale::En => format!(
            "{instructions}\n\n\
             [Focus points]\n{focus}\n\n\
             [Exclusion criteria]\n{exclusion}\n\n\
             [Document]\n\
             Title: {title}\n\
             Snippet: {snippet}\n\
             URL: {url}\n\n\
             [Output format]\n\
             Answer in English using exactly the format below. No preamble.\n\n\
             {format_block}",
            focus = scoring.focus,
            exclusion = scoring.exclusion,
            title = candidate.title,
            snippet = candidate.snippet,
            url = candidate.url,
        ),
    }
}

fn role_line(persona: Persona, locale: Locale) -> &'static str {
    match (locale, persona) {
        (Locale::Ja, Persona::Student) => {
            "あなたは学生の学習を支える専門家です。以下の文献情報を読み、ユーザーの「重点ポイント」に基づいて査定してください。"
        }
        (Locale::Ja, Persona::Researcher) => {
            "あなたはこの分野の専門家（PI）です。以下の文献情報を読み、ユーザーの「重点ポイント」に基づいて査定してください。"
        }
        (Locale::Ja, Persona::Engineer) => {
            "あなたは実用化を担うエンジニアです。以下の文献情報を読み、ユーザーの「重点ポイント」に基づいて査定してください。"
        }
        (Locale::En, Persona::Student) => {
            "You are an expert helping a student learn the field. Read the document below and assess it against the user's focus points."
        }
        (Locale::En, Persona::Researcher) => {
            "You are a principal investigator in this field. Read the document below and assess it against the user's focus points."
        }
        (Locale::En, Persona::Engineer) => {
            "You are an engineer responsible for bringing research into production. Read the document below and assess it against the user's focus points."
        }
    }
}

fn policy_lines(policy: PersonaPolicy, locale: Locale) -> Vec<&'static str> {
    let mut lines = Vec::with_capacity(5);

    lines.push(match (locale, policy.cost_sensitive) {
        (Locale::Ja, true) => "コスト、製造可能性、スケールアップの実現性を考慮せよ。",
        (Locale::Ja, false) => "コストや実現可能性は考慮しなくてよい。",
        (Locale::En, true) => "Weigh cost, manufacturability, and scale-up feasibility.",
        (Locale::En, false) => "Ignore cost and feasibility.",
    });

    lines.push(match (locale, policy.strict_relevance) {
        (Locale::Ja, true) => {
            "テーマとの適合性は厳密に判定し、重点ポイントと関係のないものは必ずCとせよ。"
        }
        (Locale::Ja, false) => "テーマとの緩やかな重なりでも関連ありとみなしてよい。",
        (Locale::En, true) => {
            "Judge topical fit strictly. Anything not relevant to the focus points must be ranked C."
        }
        (Locale::En, false) => "Treat loose topical overlap as relevant.",
    });

    lines.push(match (locale, policy.criteria_weight) {
        (Locale::Ja, CriteriaWeight::TopPriority) => "重点ポイントと除外条件を最優先で適用せよ。",
        (Locale::Ja, CriteriaWeight::Relaxed) => {
            "重点ポイントは目安とし、除外条件は軽く考慮する程度でよい。"
        }
        (Locale::En, CriteriaWeight::TopPriority) => {
            "The focus points and exclusion criteria take priority over every other consideration."
        }
        (Locale::En, CriteriaWeight::Relaxed) => {
            "Use the focus points as guidance and apply the exclusion criteria only lightly."
        }
    });

    lines.push(match (locale, policy.emphasis) {
        (Locale::Ja, Emphasis::Conceptual) => {
            "概念の理解や分野の全体像をつかむ助けになる文献を高く評価せよ。"
        }
        (Locale::Ja, Emphasis::Evidentiary) => {
            "研究デザイン、データの質、学術的新規性など、エビデンスの厳密さを重視せよ。"
        }
        (Locale::Ja, Emphasis::Practical) => "実際の製品やプロセスへの応用可能性を重視せよ。",
        (Locale::En, Emphasis::Conceptual) => {
            "Favor documents that build conceptual understanding of the field."
        }
        (Locale::En, Emphasis::Evidentiary) => {
            "Favor evidentiary rigor: study design, data quality, and academic novelty."
        }
        (Locale::En, Emphasis::Practical) => {
            "Favor practical applicability to real products and processes."
        }
    });

    if policy.critical {
        lines.push(match locale {
            Locale::Ja => "報告された結果を鵜呑みにせず、批判的に評価せよ。",
            Locale::En => "Evaluate claims critically rather than at face value.",
        });
    }

    lines
}

fn output_format(locale: Locale) -> String {
    let legend = Rank::ALL
        .iter()
        .map(|rank| format!("{}: {}", rank.label(), locale.rank_meaning(*rank)))
        .collect::<Vec<_>>()
        .join(" / ");

    let (summary_hint, rationale_hint) = match locale {
        Locale::Ja => (
            "50文字以内で簡潔に",
            "なぜそのランクなのか、重点ポイントとどう関わるか",
        ),
        Locale::En => (
            "one short sentence",
            "why this rank, and how it relates to the focus points",
        ),
    };

    format!(
        "{rank}: ({legend})\n{summary}: ({summary_hint})\n{rationale}: ({rationale_hint})",
        rank = locale.rank_label(),
        summary = locale.summary_label(),
        rationale = locale.rationale_label(),
    )
}
