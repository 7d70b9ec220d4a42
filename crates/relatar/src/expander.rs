//! Recursive expansion of identifiers into property lines.

use crate::identifier::{ElementIdentifier, LocatorKind};
use crate::style::Styler;
use crate::text::indent;

/// Renders an identifier and its ancestor chain as property lines.
///
/// Property lines come in a fixed order per node: the locator line (labelled
/// per kind), the attribute-name line for the attribute variant, then the
/// ordinal-position line (always present, defaulting to "1"). Each ancestor
/// contributes a `with parent:` marker followed by its own property lines,
/// leaf to root. The walk terminates because the chain is acyclic by
/// construction.
#[derive(Debug, Clone, Copy)]
pub struct IdentifierExpander<'a> {
    styler: &'a dyn Styler,
}

impl<'a> IdentifierExpander<'a> {
    /// Create an expander rendering styled spans through `styler`
    #[must_use]
    pub fn new(styler: &'a dyn Styler) -> Self {
        Self { styler }
    }

    /// The full expansion block for an identifier and its ancestors.
    ///
    /// Lines are joined with `\n` and carry one extra indentation unit so the
    /// block slots directly under an `identified by:` header.
    #[must_use]
    pub fn expansion(&self, identifier: &ElementIdentifier) -> String {
        let mut lines = Vec::new();

        for line in self.property_lines(identifier) {
            lines.push(indent(&line, 1));
        }

        let mut parent = identifier.parent();
        while let Some(node) = parent {
            lines.push(indent("with parent:", 1));
            for line in self.property_lines(node) {
                lines.push(indent(&line, 1));
            }
            parent = node.parent();
        }

        lines.join("\n")
    }

    /// The `element «identity» identified by:` clause for an identifier
    #[must_use]
    pub fn identified_by(&self, identifier: &ElementIdentifier) -> String {
        let noun = if identifier.is_attribute() {
            "attribute"
        } else {
            "element"
        };

        format!(
            "{noun} {} identified by:",
            self.styler.comment(&identifier.to_string())
        )
    }

    fn property_lines(&self, node: &ElementIdentifier) -> Vec<String> {
        let locator_label = match node.kind() {
            LocatorKind::CssSelector => "CSS selector",
            LocatorKind::XPath => "XPath expression",
        };

        let mut lines = vec![self.key_value_line(locator_label, node.locator())];

        if let Some(name) = node.attribute_name() {
            lines.push(self.key_value_line("attribute name", name));
        }

        lines.push(self.key_value_line("ordinal position", &node.ordinal_position().to_string()));

        lines
    }

    fn key_value_line(&self, key: &str, value: &str) -> String {
        format!("  - {key}: {}", self.styler.comment(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::PlainStyler;
    use proptest::prelude::*;

    fn expansion(identifier: &ElementIdentifier) -> String {
        IdentifierExpander::new(&PlainStyler).expansion(identifier)
    }

    mod expansion_tests {
        use super::*;

        #[test]
        fn test_default_ordinal_renders_one() {
            assert_eq!(
                expansion(&ElementIdentifier::css(".selector")),
                "    - CSS selector: .selector\n    - ordinal position: 1"
            );
        }

        #[test]
        fn test_explicit_ordinal() {
            assert_eq!(
                expansion(&ElementIdentifier::css(".selector").with_ordinal(2)),
                "    - CSS selector: .selector\n    - ordinal position: 2"
            );
        }

        #[test]
        fn test_xpath_label() {
            assert_eq!(
                expansion(&ElementIdentifier::new("//div/h1")),
                "    - XPath expression: //div/h1\n    - ordinal position: 1"
            );
        }

        #[test]
        fn test_attribute_line_between_locator_and_ordinal() {
            assert_eq!(
                expansion(&ElementIdentifier::css(".selector").with_attribute("attribute_name")),
                "    - CSS selector: .selector\n\
                 \x20   - attribute name: attribute_name\n\
                 \x20   - ordinal position: 1"
            );
        }

        #[test]
        fn test_parent_chain_emitted_leaf_to_root() {
            let identifier = ElementIdentifier::css(".child").with_ordinal(3).with_parent(
                ElementIdentifier::css(".parent").with_ordinal(4).with_parent(
                    ElementIdentifier::css(".grandparent").with_ordinal(5),
                ),
            );

            assert_eq!(
                expansion(&identifier),
                "    - CSS selector: .child\n\
                 \x20   - ordinal position: 3\n\
                 \x20 with parent:\n\
                 \x20   - CSS selector: .parent\n\
                 \x20   - ordinal position: 4\n\
                 \x20 with parent:\n\
                 \x20   - CSS selector: .grandparent\n\
                 \x20   - ordinal position: 5"
            );
        }
    }

    mod identified_by_tests {
        use super::*;

        #[test]
        fn test_element_clause() {
            let expander = IdentifierExpander::new(&PlainStyler);
            assert_eq!(
                expander.identified_by(&ElementIdentifier::css(".selector")),
                "element $\".selector\" identified by:"
            );
        }

        #[test]
        fn test_attribute_clause() {
            let expander = IdentifierExpander::new(&PlainStyler);
            assert_eq!(
                expander.identified_by(&ElementIdentifier::css(".selector").with_attribute("href")),
                "attribute $\".selector\".href identified by:"
            );
        }
    }

    proptest! {
        /// An identifier with N ancestors expands to exactly N+1 ordinal
        /// lines and N parent markers, ordinals leaf to root.
        #[test]
        fn prop_ancestor_counts(depth in 0usize..6) {
            let mut identifier = ElementIdentifier::css(format!(".node-{depth}"))
                .with_ordinal(u32::try_from(depth).unwrap() + 1);
            for level in (0..depth).rev() {
                identifier = ElementIdentifier::css(format!(".node-{level}"))
                    .with_ordinal(u32::try_from(level).unwrap() + 1)
                    .with_parent(identifier);
            }

            let expansion = expansion(&identifier);
            let ordinal_lines = expansion
                .lines()
                .filter(|line| line.contains("ordinal position"))
                .count();
            let parent_markers = expansion
                .lines()
                .filter(|line| line.contains("with parent:"))
                .count();

            prop_assert_eq!(ordinal_lines, depth + 1);
            prop_assert_eq!(parent_markers, depth);
        }
    }
}
