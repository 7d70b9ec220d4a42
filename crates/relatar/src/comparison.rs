//! Comparison kinds and their failure-outcome phrases.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The relational operator used by an assertion.
///
/// The set of known kinds is closed; a token outside the set is carried
/// verbatim as [`ComparisonKind::Other`] so a single unexpected value cannot
/// abort a report pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComparisonKind {
    /// The examined element or value must exist
    Exists,
    /// The examined element or value must not exist
    NotExists,
    /// The examined value must equal the expected value
    Is,
    /// The examined value must not equal the expected value
    IsNot,
    /// The examined value must include the expected value
    Includes,
    /// The examined value must not include the expected value
    Excludes,
    /// The examined value must match the expected regular expression
    Matches,
    /// The examined value must be a valid regular expression
    IsRegExp,
    /// A comparison token with no known outcome phrase
    Other(String),
}

impl ComparisonKind {
    /// The phrase describing what is true once this assertion has failed.
    ///
    /// Unknown kinds resolve to `None`, a sentinel distinct from any real
    /// phrase; summaries render it as an empty phrase rather than raising.
    #[must_use]
    pub fn outcome(&self) -> Option<&'static str> {
        match self {
            Self::Exists => Some("does not exist"),
            Self::NotExists => Some("does exist"),
            Self::Is => Some("is not equal to"),
            Self::IsNot => Some("is equal to"),
            Self::Includes => Some("does not include"),
            Self::Excludes => Some("does not exclude"),
            Self::Matches => Some("does not match regular expression"),
            Self::IsRegExp => Some("is not a valid regular expression"),
            Self::Other(_) => None,
        }
    }

    /// The outcome phrase, or the empty phrase for unknown kinds
    #[must_use]
    pub fn outcome_or_empty(&self) -> &'static str {
        self.outcome().unwrap_or("")
    }

    /// The preposition connecting an outcome phrase to a value identifier.
    ///
    /// `matches` compares against a pattern found *within* the other value;
    /// every other kind compares against the value itself.
    #[must_use]
    pub fn preposition(&self) -> &'static str {
        if matches!(self, Self::Matches) {
            "within the value of"
        } else {
            "the value of"
        }
    }

    /// Whether this kind asserts presence or absence of an element
    #[must_use]
    pub fn is_existence(&self) -> bool {
        matches!(self, Self::Exists | Self::NotExists)
    }

    /// The wire token for this kind
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::Exists => "exists",
            Self::NotExists => "not-exists",
            Self::Is => "is",
            Self::IsNot => "is-not",
            Self::Includes => "includes",
            Self::Excludes => "excludes",
            Self::Matches => "matches",
            Self::IsRegExp => "is-regexp",
            Self::Other(token) => token,
        }
    }
}

impl From<String> for ComparisonKind {
    fn from(token: String) -> Self {
        match token.as_str() {
            "exists" => Self::Exists,
            "not-exists" => Self::NotExists,
            "is" => Self::Is,
            "is-not" => Self::IsNot,
            "includes" => Self::Includes,
            "excludes" => Self::Excludes,
            "matches" => Self::Matches,
            "is-regexp" => Self::IsRegExp,
            _ => Self::Other(token),
        }
    }
}

impl From<&str> for ComparisonKind {
    fn from(token: &str) -> Self {
        Self::from(token.to_string())
    }
}

impl From<ComparisonKind> for String {
    fn from(kind: ComparisonKind) -> Self {
        kind.token().to_string()
    }
}

impl fmt::Display for ComparisonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod outcome_tests {
        use super::*;

        #[test]
        fn test_outcome_phrases_are_exact() {
            assert_eq!(ComparisonKind::Exists.outcome(), Some("does not exist"));
            assert_eq!(ComparisonKind::NotExists.outcome(), Some("does exist"));
            assert_eq!(ComparisonKind::Is.outcome(), Some("is not equal to"));
            assert_eq!(ComparisonKind::IsNot.outcome(), Some("is equal to"));
            assert_eq!(ComparisonKind::Includes.outcome(), Some("does not include"));
            assert_eq!(ComparisonKind::Excludes.outcome(), Some("does not exclude"));
            assert_eq!(
                ComparisonKind::Matches.outcome(),
                Some("does not match regular expression")
            );
            assert_eq!(
                ComparisonKind::IsRegExp.outcome(),
                Some("is not a valid regular expression")
            );
        }

        #[test]
        fn test_unknown_kind_resolves_to_sentinel() {
            let kind = ComparisonKind::from("is-almost");
            assert_eq!(kind.outcome(), None);
            assert_eq!(kind.outcome_or_empty(), "");
        }
    }

    mod preposition_tests {
        use super::*;

        #[test]
        fn test_matches_substitutes_within() {
            assert_eq!(ComparisonKind::Matches.preposition(), "within the value of");
        }

        #[test]
        fn test_every_other_kind_substitutes_plain() {
            for kind in [
                ComparisonKind::Exists,
                ComparisonKind::NotExists,
                ComparisonKind::Is,
                ComparisonKind::IsNot,
                ComparisonKind::Includes,
                ComparisonKind::Excludes,
                ComparisonKind::IsRegExp,
                ComparisonKind::from("unmapped"),
            ] {
                assert_eq!(kind.preposition(), "the value of");
            }
        }
    }

    mod token_tests {
        use super::*;

        #[test]
        fn test_token_round_trip() {
            for token in [
                "exists",
                "not-exists",
                "is",
                "is-not",
                "includes",
                "excludes",
                "matches",
                "is-regexp",
            ] {
                assert_eq!(ComparisonKind::from(token).token(), token);
            }
        }

        #[test]
        fn test_unknown_token_is_preserved() {
            let kind = ComparisonKind::from("is-almost");
            assert_eq!(kind, ComparisonKind::Other("is-almost".to_string()));
            assert_eq!(kind.token(), "is-almost");
        }

        #[test]
        fn test_is_existence() {
            assert!(ComparisonKind::Exists.is_existence());
            assert!(ComparisonKind::NotExists.is_existence());
            assert!(!ComparisonKind::Is.is_existence());
        }
    }
}
