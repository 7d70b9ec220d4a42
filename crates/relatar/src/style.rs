//! Styling collaborator for report output.
//!
//! Renderers never emit escape sequences themselves; they delegate every
//! styled span to a [`Styler`]. [`ConsoleStyler`] maps the capability set to
//! ANSI styles via the `console` crate, [`PlainStyler`] passes text through
//! untouched for non-TTY sinks and byte-exact tests.

use console::Style;

/// Pure text transforms applied to report spans.
///
/// Implementations hold no state and must be deterministic: the same input
/// text always produces the same output bytes.
pub trait Styler: std::fmt::Debug {
    /// Style a success span (step names, completed-statement glyphs)
    fn success(&self, text: &str) -> String;

    /// Style a failure span (step names, failed-statement glyphs)
    fn failure(&self, text: &str) -> String;

    /// Style the source of the statement that failed
    fn highlighted_failure(&self, text: &str) -> String;

    /// Style an informational value (locators, expected/actual values)
    fn comment(&self, text: &str) -> String;

    /// Style a test path header
    fn bold(&self, text: &str) -> String;
}

/// ANSI styler backed by the `console` crate
///
/// Colors mirror the upstream console conventions: green success, red
/// failure, white-on-red highlighted failure, yellow comments.
#[derive(Debug)]
pub struct ConsoleStyler {
    success: Style,
    failure: Style,
    highlighted_failure: Style,
    comment: Style,
    bold: Style,
}

impl ConsoleStyler {
    /// Create a styler that lets `console` decide whether the sink is a TTY
    #[must_use]
    pub fn new() -> Self {
        Self::build(false)
    }

    /// Create a styler that always emits escape sequences
    ///
    /// Useful when the report is piped but should stay colored.
    #[must_use]
    pub fn forced() -> Self {
        Self::build(true)
    }

    fn build(force: bool) -> Self {
        let apply = |style: Style| {
            if force {
                style.force_styling(true)
            } else {
                style
            }
        };

        Self {
            success: apply(Style::new().green()),
            failure: apply(Style::new().red()),
            highlighted_failure: apply(Style::new().white().on_red()),
            comment: apply(Style::new().yellow()),
            bold: apply(Style::new().bold()),
        }
    }
}

impl Default for ConsoleStyler {
    fn default() -> Self {
        Self::new()
    }
}

impl Styler for ConsoleStyler {
    fn success(&self, text: &str) -> String {
        self.success.apply_to(text).to_string()
    }

    fn failure(&self, text: &str) -> String {
        self.failure.apply_to(text).to_string()
    }

    fn highlighted_failure(&self, text: &str) -> String {
        self.highlighted_failure.apply_to(text).to_string()
    }

    fn comment(&self, text: &str) -> String {
        self.comment.apply_to(text).to_string()
    }

    fn bold(&self, text: &str) -> String {
        self.bold.apply_to(text).to_string()
    }
}

/// Identity styler: every transform returns its input unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn success(&self, text: &str) -> String {
        text.to_string()
    }

    fn failure(&self, text: &str) -> String {
        text.to_string()
    }

    fn highlighted_failure(&self, text: &str) -> String {
        text.to_string()
    }

    fn comment(&self, text: &str) -> String {
        text.to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.to_string()
    }
}
