//! Relatar: Terminal Reports for Browser Test Runs
//!
//! Relatar (Spanish: "to report/recount") turns the structured step events
//! emitted by a browser-test execution engine into a styled, deterministic
//! terminal report. Its centrepiece is the failure summary: a recursive
//! explanation of which element an assertion examined, how it was located
//! through its ancestor chain, and how the captured values differ.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    RELATAR Architecture                      │
//! ├──────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐         │
//! │   │ Step       │    │ Step /     │    │ Result     │         │
//! │   │ Events     │───►│ Summary    │───►│ Printer    │         │
//! │   │ (serde)    │    │ Renderers  │    │ (sink)     │         │
//! │   └────────────┘    └────────────┘    └────────────┘         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rendering is pure: the same events always produce the same bytes for a
//! given styler, so reports are directly assertable in tests via
//! [`PlainStyler`].

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

mod comparison;
mod expander;
mod identifier;
mod printer;
mod renderer;
mod result;
mod step;
mod style;
mod summary;
mod text;

pub use comparison::ComparisonKind;
pub use expander::IdentifierExpander;
pub use identifier::{ElementIdentifier, LocatorKind};
pub use printer::ResultPrinter;
pub use renderer::{BasicFaultRenderer, RenderFault, StatementLineRenderer, StepRenderer};
pub use result::{RelatarError, RelatarResult};
pub use step::{
    Assertion, DataSet, Fault, Operand, Statement, StatementLine, Step, StepStatus,
};
pub use style::{ConsoleStyler, PlainStyler, Styler};
pub use summary::{SummaryFactory, SummaryHandler};
pub use text::{indent, INDENT};
