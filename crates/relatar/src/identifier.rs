//! Element and attribute identifiers.
//!
//! An identifier describes how a page element (or one of its attributes) was
//! located: the locator itself, an ordinal position to disambiguate multiple
//! matches, and an optional ancestor chain scoping the search.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a locator string is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocatorKind {
    /// CSS selector (e.g. `button.primary`)
    CssSelector,
    /// XPath expression (e.g. `//div/h1`)
    XPath,
}

/// A locator for a page element or attribute, with its ancestor chain.
///
/// Each identifier exclusively owns its parent, so the chain is finite and
/// acyclic by construction and is never re-parented afterward; the expansion
/// walk in [`crate::IdentifierExpander`] relies on this for termination.
///
/// The identity string is derived on demand through [`fmt::Display`]:
/// `$"{locator}"` plus `:ordinal` when an explicit ordinal was set, plus
/// `.attribute` for the attribute variant, ancestors first, joined with
/// ` >> `.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementIdentifier {
    locator: String,
    kind: LocatorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ordinal: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attribute: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent: Option<Box<ElementIdentifier>>,
}

impl ElementIdentifier {
    /// Create an identifier, detecting the locator kind from its shape.
    ///
    /// A locator starting with `/` or `(` is an XPath expression; anything
    /// else is a CSS selector.
    #[must_use]
    pub fn new(locator: impl Into<String>) -> Self {
        let locator = locator.into();
        let kind = detect_kind(&locator);
        Self {
            locator,
            kind,
            ordinal: None,
            attribute: None,
            parent: None,
        }
    }

    /// Create a CSS-selector identifier
    #[must_use]
    pub fn css(locator: impl Into<String>) -> Self {
        Self {
            locator: locator.into(),
            kind: LocatorKind::CssSelector,
            ordinal: None,
            attribute: None,
            parent: None,
        }
    }

    /// Create an XPath identifier
    #[must_use]
    pub fn xpath(locator: impl Into<String>) -> Self {
        Self {
            locator: locator.into(),
            kind: LocatorKind::XPath,
            ordinal: None,
            attribute: None,
            parent: None,
        }
    }

    /// Set an explicit ordinal position (1-based)
    #[must_use]
    pub fn with_ordinal(mut self, ordinal: u32) -> Self {
        self.ordinal = Some(ordinal);
        self
    }

    /// Select the attribute variant by naming an attribute
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>) -> Self {
        self.attribute = Some(name.into());
        self
    }

    /// Scope this identifier to an ancestor identifier
    #[must_use]
    pub fn with_parent(mut self, parent: ElementIdentifier) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// The raw locator string
    #[must_use]
    pub fn locator(&self) -> &str {
        &self.locator
    }

    /// How the locator is interpreted
    #[must_use]
    pub const fn kind(&self) -> LocatorKind {
        self.kind
    }

    /// The effective ordinal position, defaulting to 1
    #[must_use]
    pub fn ordinal_position(&self) -> u32 {
        self.ordinal.unwrap_or(1)
    }

    /// The explicitly set ordinal position, if any
    #[must_use]
    pub const fn explicit_ordinal(&self) -> Option<u32> {
        self.ordinal
    }

    /// The attribute name for the attribute variant
    #[must_use]
    pub fn attribute_name(&self) -> Option<&str> {
        self.attribute.as_deref()
    }

    /// Whether this is the attribute variant
    #[must_use]
    pub const fn is_attribute(&self) -> bool {
        self.attribute.is_some()
    }

    /// The ancestor this identifier is scoped to, if any
    #[must_use]
    pub fn parent(&self) -> Option<&ElementIdentifier> {
        self.parent.as_deref()
    }
}

fn detect_kind(locator: &str) -> LocatorKind {
    if locator.starts_with('/') || locator.starts_with('(') {
        LocatorKind::XPath
    } else {
        LocatorKind::CssSelector
    }
}

impl fmt::Display for ElementIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(parent) = &self.parent {
            write!(f, "{parent} >> ")?;
        }

        write!(f, "$\"{}\"", self.locator)?;

        if let Some(ordinal) = self.ordinal {
            write!(f, ":{ordinal}")?;
        }

        if let Some(attribute) = &self.attribute {
            write!(f, ".{attribute}")?;
        }

        Ok(())
    }
}
