//! The four-step triage scale assigned to every analyzed search result.

use serde::{Deserialize, Serialize};

/// Triage rank, declared in report order: `S` sorts first, `C` last.
///
/// The derived `Ord` is the report precedence, so sorting a slice of ranks
/// ascending yields `S, A, B, C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Must-read.
    S,
    /// Useful.
    A,
    /// Reference only.
    B,
    /// Irrelevant.
    C,
}

impl Rank {
    /// All ranks in report order.
    pub const ALL: [Rank; 4] = [Rank::S, Rank::A, Rank::B, Rank::C];

    /// Single-letter label used in prompts, CSV rows, and headers.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Rank::S => "S",
            Rank::A => "A",
            Rank::B => "B",
            Rank::C => "C",
        }
    }

    /// Display color for rendered reports.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Rank::S => "red",
            Rank::A => "orange",
            Rank::B => "blue",
            Rank::C => "gray",
        }
    }

    /// Whether rendered views should add the "must-read" callout.
    #[must_use]
    pub fn is_must_read(self) -> bool {
        self == Rank::S
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ord_matches_report_precedence() {
        let mut ranks = vec![Rank::C, Rank::B, Rank::S, Rank::A];
        ranks.sort();
        assert_eq!(ranks, Rank::ALL.to_vec());
    }

    #[test]
    fn display_is_the_label() {
        let shown: Vec<String> = Rank::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(shown, ["S", "A", "B", "C"]);
    }

    #[test]
    fn serializes_as_bare_letter() {
        let json = serde_json::to_string(&Rank::A).expect("serialize");
        assert_eq!(json, "\"A\"");
    }

    #[test]
    fn only_s_is_must_read() {
        assert!(Rank::S.is_must_read());
        assert!(!Rank::A.is_must_read());
        assert!(!Rank::C.is_must_read());
    }
}
