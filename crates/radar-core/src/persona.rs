//! Evaluation personas.
//!
//! A persona only changes two things: the instruction block rendered into
//! each prompt (via its [`PersonaPolicy`]) and which ranks a rendered report
//! shows expanded by default. Rank extraction and report ordering do not
//! depend on it.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::rank::Rank;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    Student,
    #[default]
    Researcher,
    Engineer,
}

/// How strongly the user's inclusion/exclusion text steers the rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriteriaWeight {
    /// Inclusion text is a hint; exclusion text is down-weighted.
    Relaxed,
    /// Inclusion and exclusion text override everything else.
    TopPriority,
}

/// What kind of value the persona looks for in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    Conceptual,
    Evidentiary,
    Practical,
}

/// Policy data behind a persona's instruction block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonaPolicy {
    /// Weigh cost, manufacturability, and scale-up feasibility.
    pub cost_sensitive: bool,
    /// Judge topical fit strictly; anything off-topic is forced to `C`.
    pub strict_relevance: bool,
    pub criteria_weight: CriteriaWeight,
    pub emphasis: Emphasis,
    /// Evaluate claims critically rather than at face value.
    pub critical: bool,
}

impl Persona {
    pub const ALL: [Persona; 3] = [Persona::Student, Persona::Researcher, Persona::Engineer];

    #[must_use]
    pub fn policy(self) -> PersonaPolicy {
        match self {
            Persona::Student => PersonaPolicy {
                cost_sensitive: false,
                strict_relevance: false,
                criteria_weight: CriteriaWeight::Relaxed,
                emphasis: Emphasis::Conceptual,
                critical: false,
            },
            Persona::Researcher => PersonaPolicy {
                cost_sensitive: false,
                strict_relevance: true,
                criteria_weight: CriteriaWeight::TopPriority,
                emphasis: Emphasis::Evidentiary,
                critical: false,
            },
            Persona::Engineer => PersonaPolicy {
                cost_sensitive: true,
                strict_relevance: true,
                criteria_weight: CriteriaWeight::TopPriority,
                emphasis: Emphasis::Practical,
                critical: true,
            },
        }
    }

    /// Ranks whose report sections start expanded.
    #[must_use]
    pub fn expanded_ranks(self) -> &'static [Rank] {
        match self {
            Persona::Student => &[Rank::S, Rank::A, Rank::B],
            Persona::Researcher | Persona::Engineer => &[Rank::S, Rank::A],
        }
    }

    #[must_use]
    pub fn expands(self, rank: Rank) -> bool {
        self.expanded_ranks().contains(&rank)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Persona::Student => "student",
            Persona::Researcher => "researcher",
            Persona::Engineer => "engineer",
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Persona {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Persona::Student),
            "researcher" => Ok(Persona::Researcher),
            "engineer" => Ok(Persona::Engineer),
            other => Err(CoreError::UnknownPersona(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_expands_s_a_b() {
        assert!(Persona::Student.expands(Rank::S));
        assert!(Persona::Student.expands(Rank::A));
        assert!(Persona::Student.expands(Rank::B));
        assert!(!Persona::Student.expands(Rank::C));
    }

    #[test]
    fn researcher_and_engineer_expand_only_s_a() {
        for persona in [Persona::Researcher, Persona::Engineer] {
            assert_eq!(persona.expanded_ranks(), &[Rank::S, Rank::A]);
            assert!(!persona.expands(Rank::B));
        }
    }

    #[test]
    fn only_engineer_is_cost_sensitive() {
        assert!(!Persona::Student.policy().cost_sensitive);
        assert!(!Persona::Researcher.policy().cost_sensitive);
        assert!(Persona::Engineer.policy().cost_sensitive);
    }

    #[test]
    fn student_is_the_only_lenient_persona() {
        assert!(!Persona::Student.policy().strict_relevance);
        assert_eq!(
            Persona::Student.policy().criteria_weight,
            CriteriaWeight::Relaxed
        );
        for persona in [Persona::Researcher, Persona::Engineer] {
            assert!(persona.policy().strict_relevance);
            assert_eq!(persona.policy().criteria_weight, CriteriaWeight::TopPriority);
        }
    }

    #[test]
    fn parses_names_round_trip_through_display() {
        for persona in Persona::ALL {
            assert_eq!(persona.to_string().parse::<Persona>().unwrap(), persona);
        }
        assert!(matches!(
            "manager".parse::<Persona>(),
            Err(CoreError::UnknownPersona(_))
        ));
    }
}
