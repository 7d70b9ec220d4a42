//! Failure summaries for failed assertions.
//!
//! A summary explains *why* an assertion failed: which element was examined,
//! how it was located, and how the captured values differ. Each shape is a
//! pure function of its inputs; the only collaborator is the styler.

use crate::comparison::ComparisonKind;
use crate::expander::IdentifierExpander;
use crate::identifier::ElementIdentifier;
use crate::step::{Assertion, Operand};
use crate::style::Styler;

/// Assembles failure-summary text blocks.
#[derive(Debug, Clone, Copy)]
pub struct SummaryFactory<'a> {
    styler: &'a dyn Styler,
}

impl<'a> SummaryFactory<'a> {
    /// Create a factory rendering styled spans through `styler`
    #[must_use]
    pub fn new(styler: &'a dyn Styler) -> Self {
        Self { styler }
    }

    /// Summary for a failed `exists` / `not-exists` assertion
    #[must_use]
    pub fn for_elemental_existence(
        &self,
        identifier: &ElementIdentifier,
        comparison: &ComparisonKind,
    ) -> String {
        format!(
            "{}\n  {}",
            self.identifier_block(identifier),
            comparison.outcome_or_empty()
        )
    }

    /// Summary for an element whose value failed an `is-regexp` assertion
    #[must_use]
    pub fn for_elemental_is_regexp(
        &self,
        identifier: &ElementIdentifier,
        pattern: &str,
    ) -> String {
        format!(
            "{}\n  {} is not a valid regular expression",
            self.identifier_block(identifier),
            self.styler.comment(pattern)
        )
    }

    /// Summary for a scalar value that failed an `is-regexp` assertion
    #[must_use]
    pub fn for_scalar_is_regexp(&self, pattern: &str) -> String {
        format!(
            "* {} is not a valid regular expression",
            self.styler.comment(pattern)
        )
    }

    /// Summary comparing an element's value against a scalar expectation
    #[must_use]
    pub fn for_elemental_to_scalar(
        &self,
        identifier: &ElementIdentifier,
        comparison: &ComparisonKind,
        expected: &str,
        actual: &str,
    ) -> String {
        format!(
            "{}\n  {} expected value\n{}",
            self.identifier_block(identifier),
            comparison.outcome_or_empty(),
            self.expected_actual_lines(expected, actual)
        )
    }

    /// Summary comparing an element's value against another element's value.
    ///
    /// The structural "where the two elements are" is always shown before the
    /// literal "what differs": identifier block, comparison clause naming the
    /// value identifier with its own expansion, then a blank line and the
    /// captured values verbatim.
    #[must_use]
    pub fn for_elemental_to_elemental(
        &self,
        identifier: &ElementIdentifier,
        value_identifier: &ElementIdentifier,
        comparison: &ComparisonKind,
        expected: &str,
        actual: &str,
    ) -> String {
        let expander = IdentifierExpander::new(self.styler);

        format!(
            "{}\n  {}\n{}\n\n{}",
            self.identifier_block(identifier),
            self.comparison_clause(comparison, value_identifier),
            expander.expansion(value_identifier),
            self.expected_actual_lines(expected, actual)
        )
    }

    /// Summary comparing a scalar reference against a scalar expectation
    #[must_use]
    pub fn for_scalar_to_scalar(
        &self,
        identifier: &str,
        comparison: &ComparisonKind,
        expected: &str,
        actual: &str,
    ) -> String {
        format!(
            "* {identifier} {} expected value\n{}",
            comparison.outcome_or_empty(),
            self.expected_actual_lines(expected, actual)
        )
    }

    /// Summary comparing a scalar reference against an element's value.
    ///
    /// Symmetric to [`Self::for_elemental_to_elemental`], but the left side
    /// is a plain reference string rather than an expanded block.
    #[must_use]
    pub fn for_scalar_to_elemental(
        &self,
        identifier: &str,
        value_identifier: &ElementIdentifier,
        comparison: &ComparisonKind,
        expected: &str,
        actual: &str,
    ) -> String {
        let expander = IdentifierExpander::new(self.styler);

        format!(
            "* {identifier} {}\n{}\n\n{}",
            self.comparison_clause(comparison, value_identifier),
            expander.expansion(value_identifier),
            self.expected_actual_lines(expected, actual)
        )
    }

    /// `* Element «identity» identified by:` plus the expansion block
    fn identifier_block(&self, identifier: &ElementIdentifier) -> String {
        let expander = IdentifierExpander::new(self.styler);

        format!(
            "* {}\n{}",
            ucfirst(&expander.identified_by(identifier)),
            expander.expansion(identifier)
        )
    }

    /// `{outcome} {preposition} element «identity» identified by:`
    fn comparison_clause(
        &self,
        comparison: &ComparisonKind,
        value_identifier: &ElementIdentifier,
    ) -> String {
        let expander = IdentifierExpander::new(self.styler);

        format!(
            "{} {} {}",
            comparison.outcome_or_empty(),
            comparison.preposition(),
            expander.identified_by(value_identifier)
        )
    }

    /// The expected/actual pair, values comment-styled and aligned
    fn expected_actual_lines(&self, expected: &str, actual: &str) -> String {
        format!(
            "  - expected: {}\n  - actual:   {}",
            self.styler.comment(expected),
            self.styler.comment(actual)
        )
    }
}

fn ucfirst(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Selects the summary shape for a failed assertion.
///
/// Dispatch is exhaustive over the operand/comparison combinations, so a new
/// shape is a compile-time-checked extension rather than a dynamic branch.
#[derive(Debug, Clone, Copy)]
pub struct SummaryHandler<'a> {
    factory: SummaryFactory<'a>,
}

impl<'a> SummaryHandler<'a> {
    /// Create a handler rendering through `styler`
    #[must_use]
    pub fn new(styler: &'a dyn Styler) -> Self {
        Self {
            factory: SummaryFactory::new(styler),
        }
    }

    /// Build the failure summary for `assertion` and its captured values
    #[must_use]
    pub fn handle(&self, assertion: &Assertion, expected: &str, actual: &str) -> String {
        let comparison = &assertion.comparison;

        match (&assertion.subject, &assertion.value) {
            (Operand::Elemental(identifier), _) if comparison.is_existence() => {
                self.factory.for_elemental_existence(identifier, comparison)
            }
            (Operand::Elemental(identifier), _)
                if matches!(comparison, &ComparisonKind::IsRegExp) =>
            {
                self.factory.for_elemental_is_regexp(identifier, actual)
            }
            (Operand::Scalar(_), _) if matches!(comparison, &ComparisonKind::IsRegExp) => {
                self.factory.for_scalar_is_regexp(actual)
            }
            (Operand::Elemental(identifier), Some(Operand::Elemental(value_identifier))) => self
                .factory
                .for_elemental_to_elemental(identifier, value_identifier, comparison, expected, actual),
            (Operand::Elemental(identifier), _) => self
                .factory
                .for_elemental_to_scalar(identifier, comparison, expected, actual),
            (Operand::Scalar(reference), Some(Operand::Elemental(value_identifier))) => self
                .factory
                .for_scalar_to_elemental(reference, value_identifier, comparison, expected, actual),
            (Operand::Scalar(reference), _) => self
                .factory
                .for_scalar_to_scalar(reference, comparison, expected, actual),
        }
    }
}
