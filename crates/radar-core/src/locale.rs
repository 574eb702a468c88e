//! UI language. Decides the prompt language and the labels the model is
//! asked to emit, which in turn are the markers the rank extractor reads.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::rank::Rank;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Ja, Locale::En];

    /// Label preceding the rank letter on the first line of a model response.
    #[must_use]
    pub fn rank_label(self) -> &'static str {
        match self {
            Locale::Ja => "判定ランク",
            Locale::En => "Rank",
        }
    }

    #[must_use]
    pub fn summary_label(self) -> &'static str {
        match self {
            Locale::Ja => "要約",
            Locale::En => "Summary",
        }
    }

    #[must_use]
    pub fn rationale_label(self) -> &'static str {
        match self {
            Locale::Ja => "理由",
            Locale::En => "Rationale",
        }
    }

    /// Short gloss shown next to each rank in the output-format legend.
    #[must_use]
    pub fn rank_meaning(self, rank: Rank) -> &'static str {
        match (self, rank) {
            (Locale::Ja, Rank::S) => "必読",
            (Locale::Ja, Rank::A) => "有益",
            (Locale::Ja, Rank::B) => "参考程度",
            (Locale::Ja, Rank::C) => "無関係",
            (Locale::En, Rank::S) => "must-read",
            (Locale::En, Rank::A) => "useful",
            (Locale::En, Rank::B) => "reference only",
            (Locale::En, Rank::C) => "irrelevant",
        }
    }

    /// Callout attached to must-read items in rendered reports.
    #[must_use]
    pub fn must_read_callout(self) -> &'static str {
        match self {
            Locale::Ja => "これは「重点ポイント」に深く刺さる重要文献です！",
            Locale::En => "This one hits the focus criteria directly. Read it first.",
        }
    }

    /// Shown instead of a report when the search returned nothing.
    #[must_use]
    pub fn no_results_message(self) -> &'static str {
        match self {
            Locale::Ja => "該当する文献が見つかりませんでした。検索条件を変えて再実行してください。",
            Locale::En => "No documents matched. Try a broader query or a longer date window.",
        }
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::Ja => "ja",
            Locale::En => "en",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Locale {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ja" | "japanese" => Ok(Locale::Ja),
            "en" | "english" => Ok(Locale::En),
            other => Err(CoreError::UnknownLocale(other.to_string())),
        }
    }
}
