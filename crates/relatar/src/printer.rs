//! The top-level report printer.
//!
//! Consumes finished-step events in execution order and writes rendered
//! blocks straight to the output sink. No buffering beyond the sink's own:
//! each event is fully written before the next is accepted, so a crashed run
//! still leaves a complete report up to the last finished step.

use std::io::Write;

use tracing::debug;

use crate::renderer::{BasicFaultRenderer, RenderFault, StepRenderer};
use crate::result::RelatarResult;
use crate::step::Step;
use crate::style::{ConsoleStyler, PlainStyler, Styler};

/// Writes rendered step reports to an output sink.
///
/// A header line naming the source test path is written whenever the path
/// changes from the previous step, so steps group under their test without
/// the printer holding run state beyond the current path.
#[derive(Debug)]
pub struct ResultPrinter<W: Write> {
    writer: W,
    styler: Box<dyn Styler>,
    fault_renderer: Box<dyn RenderFault>,
    current_path: Option<String>,
}

impl<W: Write> ResultPrinter<W> {
    /// Create a printer with terminal styling and default fault rendering
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            styler: Box::new(ConsoleStyler::new()),
            fault_renderer: Box::new(BasicFaultRenderer),
            current_path: None,
        }
    }

    /// Create a printer that emits unstyled text
    #[must_use]
    pub fn plain(writer: W) -> Self {
        Self::new(writer).with_styler(Box::new(PlainStyler))
    }

    /// Replace the styler
    #[must_use]
    pub fn with_styler(mut self, styler: Box<dyn Styler>) -> Self {
        self.styler = styler;
        self
    }

    /// Replace the fault renderer
    #[must_use]
    pub fn with_fault_renderer(mut self, fault_renderer: Box<dyn RenderFault>) -> Self {
        self.fault_renderer = fault_renderer;
        self
    }

    /// Render `step` and write its block, preceded by a path header when the
    /// source path differs from the previous step's.
    ///
    /// # Errors
    ///
    /// Returns an error when writing to the sink fails.
    pub fn print_step(&mut self, step: &Step) -> RelatarResult<()> {
        debug!(
            path = step.source_path(),
            name = step.name(),
            status = ?step.status(),
            "printing step"
        );

        if self.current_path.as_deref() != Some(step.source_path()) {
            writeln!(self.writer, "{}", self.styler.bold(step.source_path()))?;
            self.current_path = Some(step.source_path().to_string());
        }

        let block = StepRenderer::new(self.styler.as_ref(), self.fault_renderer.as_ref())
            .render(step);
        writeln!(self.writer, "{block}\n")?;

        Ok(())
    }

    /// Flush the sink.
    ///
    /// # Errors
    ///
    /// Returns an error when the sink fails to flush.
    pub fn flush(&mut self) -> RelatarResult<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Consume the printer and return the sink
    pub fn into_inner(self) -> W {
        self.writer
    }
}
