//! Step and statement rendering.
//!
//! A step block is assembled from independently rendered pieces joined with
//! single newlines and carries no trailing newline; the printer owns the
//! spacing between blocks.

use crate::step::{Fault, Statement, StatementLine, Step, StepStatus};
use crate::style::Styler;
use crate::summary::SummaryHandler;
use crate::text::indent;

/// Renders a captured runtime fault into report text.
///
/// The engine's fault payload is opaque to this crate; implement this trait
/// to control how faults appear in the report.
pub trait RenderFault: std::fmt::Debug {
    /// Render `fault` as one or more lines of text
    fn render(&self, fault: &Fault) -> String;
}

/// The default fault rendering: `class: message`
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicFaultRenderer;

impl RenderFault for BasicFaultRenderer {
    fn render(&self, fault: &Fault) -> String {
        format!("{}: {}", fault.class, fault.message)
    }
}

/// Renders individual statement lines with their outcome glyph.
///
/// Output is unindented; the step renderer places statement lines at their
/// depth within the block.
#[derive(Debug, Clone, Copy)]
pub struct StatementLineRenderer<'a> {
    styler: &'a dyn Styler,
}

impl<'a> StatementLineRenderer<'a> {
    /// Create a renderer styling glyphs through `styler`
    #[must_use]
    pub fn new(styler: &'a dyn Styler) -> Self {
        Self { styler }
    }

    /// Render a statement that completed successfully
    #[must_use]
    pub fn render_passed(&self, line: &StatementLine) -> String {
        let rendered = format!("{} {}", self.styler.success("\u{2713}"), line.source());

        self.with_annotations(rendered, line)
    }

    /// Render the statement that failed, with its source highlighted
    #[must_use]
    pub fn render_failed(&self, line: &StatementLine) -> String {
        let rendered = format!(
            "{} {}",
            self.styler.failure("x"),
            self.styler.highlighted_failure(line.source())
        );

        self.with_annotations(rendered, line)
    }

    /// Append one `> resolved from:` line per pre-resolution source
    fn with_annotations(&self, mut rendered: String, line: &StatementLine) -> String {
        for source in line.resolution_sources() {
            rendered.push_str(&format!(
                "\n  {} {source}",
                self.styler.comment("> resolved from:")
            ));
        }

        rendered
    }
}

/// Renders one finished step as a text block.
#[derive(Debug)]
pub struct StepRenderer<'a> {
    styler: &'a dyn Styler,
    statement_line_renderer: StatementLineRenderer<'a>,
    summary_handler: SummaryHandler<'a>,
    fault_renderer: &'a dyn RenderFault,
}

impl<'a> StepRenderer<'a> {
    /// Create a renderer drawing styled spans from `styler` and fault text
    /// from `fault_renderer`
    #[must_use]
    pub fn new(styler: &'a dyn Styler, fault_renderer: &'a dyn RenderFault) -> Self {
        Self {
            styler,
            statement_line_renderer: StatementLineRenderer::new(styler),
            summary_handler: SummaryHandler::new(styler),
            fault_renderer,
        }
    }

    /// Render `step` as a block with no trailing newline
    #[must_use]
    pub fn render(&self, step: &Step) -> String {
        let mut pieces = vec![self.name_line(step)];

        if let Some(data_set) = step.data_set().filter(|data_set| !data_set.is_empty()) {
            let lines: Vec<String> = data_set
                .entries()
                .iter()
                .map(|(key, value)| {
                    indent(&format!("  - {key}: {}", self.styler.comment(value)), 1)
                })
                .collect();

            pieces.push(lines.join("\n"));
            pieces.push(String::new());
        }

        for line in step.completed_lines() {
            if line.is_derived() {
                continue;
            }

            pieces.push(indent(&self.statement_line_renderer.render_passed(line), 2));
        }

        if let Some(line) = step.failed_line() {
            pieces.push(self.render_failed_statement(step, line));
        }

        if let Some(fault) = step.fault() {
            pieces.push(indent(&format!("* {}", self.fault_renderer.render(fault)), 2));
        }

        pieces.join("\n")
    }

    /// `  {glyph} {styled name}`; the glyph for an errored step is `?`
    fn name_line(&self, step: &Step) -> String {
        let (glyph, name) = match step.status() {
            StepStatus::Passed => (
                self.styler.success("\u{2713}"),
                self.styler.success(step.name()),
            ),
            StepStatus::Failed => (self.styler.failure("x"), self.styler.failure(step.name())),
            StepStatus::Errored => (self.styler.failure("?"), self.styler.failure(step.name())),
        };

        format!("  {glyph} {name}")
    }

    fn render_failed_statement(&self, step: &Step, line: &StatementLine) -> String {
        let mut rendered = indent(&self.statement_line_renderer.render_failed(line), 2);

        if let Statement::Assertion(assertion) = line.statement() {
            let summary = self.summary_handler.handle(
                assertion,
                step.expected_value().unwrap_or_default(),
                step.actual_value().unwrap_or_default(),
            );

            rendered.push('\n');
            rendered.push_str(&indent(&summary, 2));
        }

        rendered
    }
}
