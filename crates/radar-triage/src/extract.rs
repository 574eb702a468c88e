//! Rank extraction from free-form model output.

use radar_core::{Locale, Rank};

/// Ranks checked in priority order. `B` is the fallback, never searched for.
const SEARCH_ORDER: [Rank; 3] = [Rank::S, Rank::A, Rank::C];

/// Pulls the rank out of a model response.
///
/// Looks for the literal marker `"<label>: S"`, then `A`, then `C`, where
/// `<label>` is the rank label of any supported locale. The first rank whose
/// marker appears anywhere in the text wins, so surrounding prose is
/// ignored. Returns [`Rank::B`] when no marker is present.
#[must_use]
pub fn extract_rank(response: &str) -> Rank {
    SEARCH_ORDER
        .into_iter()
        .find(|rank| {
            Locale::ALL
                .iter()
                .any(|locale| response.contains(&marker(*locale, *rank)))
        })
        .unwrap_or(Rank::B)
}

fn marker(locale: Locale, rank: Rank) -> String {
    format!("{}: {}", locale.rank_label(), rank.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_japanese_markers() {
        assert_eq!(extract_rank("判定ランク: S\n要約: ..."), Rank::S);
        assert_eq!(extract_rank("判定ランク: A"), Rank::A);
        assert_eq!(extract_rank("判定ランク: C\n理由: 無関係"), Rank::C);
    }

    #[test]
    fn finds_english_markers() {
        assert_eq!(extract_rank("Rank: S\nSummary: great"), Rank::S);
        assert_eq!(extract_rank("Rank: A"), Rank::A);
        assert_eq!(extract_rank("Rank: C"), Rank::C);
    }

    #[test]
    fn ignores_surrounding_prose() {
        let text = "Sure! Here is my assessment.\n\n**Rank: A**\nSummary: solid work.\nThanks.";
        assert_eq!(extract_rank(text), Rank::A);
    }

    #[test]
    fn defaults_to_b_without_marker() {
        assert_eq!(extract_rank(""), Rank::B);
        assert_eq!(extract_rank("This paper is fine, I guess."), Rank::B);
        assert_eq!(extract_rank("rank: s"), Rank::B, "match is case-sensitive");
    }

    #[test]
    fn explicit_b_marker_is_b() {
        assert_eq!(extract_rank("判定ランク: B"), Rank::B);
    }

    #[test]
    fn s_takes_priority_over_a_and_c() {
        assert_eq!(extract_rank("Rank: C\nRank: A\nRank: S"), Rank::S);
        assert_eq!(extract_rank("Rank: C then Rank: A"), Rank::A);
    }

    #[test]
    fn full_width_colon_is_not_a_marker() {
        assert_eq!(extract_rank("判定ランク：S"), Rank::B);
    }
}
