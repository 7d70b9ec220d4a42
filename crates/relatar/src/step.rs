//! The finished-step event model.
//!
//! These types mirror the contract supplied by the execution engine, one
//! event per finished step. Everything here is an immutable snapshot: the
//! renderers never mutate a step mid-render, so rendering is idempotent.

use crate::comparison::ComparisonKind;
use crate::identifier::ElementIdentifier;
use serde::{Deserialize, Serialize};

/// One side of an assertion: either a located element/attribute or a plain
/// scalar reference string (e.g. `$page.title`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operand {
    /// A located element or attribute
    Elemental(ElementIdentifier),
    /// A scalar reference string
    Scalar(String),
}

impl Operand {
    /// The element identifier, when this operand is elemental
    #[must_use]
    pub fn identifier(&self) -> Option<&ElementIdentifier> {
        match self {
            Self::Elemental(identifier) => Some(identifier),
            Self::Scalar(_) => None,
        }
    }
}

/// A single assertion: what was examined, how, and against what
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assertion {
    /// The relational operator applied
    pub comparison: ComparisonKind,
    /// The examined side of the comparison
    pub subject: Operand,
    /// The value side, absent for existence and is-regexp assertions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Operand>,
}

impl Assertion {
    /// Create an assertion with no value operand
    #[must_use]
    pub fn new(comparison: impl Into<ComparisonKind>, subject: Operand) -> Self {
        Self {
            comparison: comparison.into(),
            subject,
            value: None,
        }
    }

    /// Set the value operand
    #[must_use]
    pub fn with_value(mut self, value: Operand) -> Self {
        self.value = Some(value);
        self
    }
}

/// The executable payload behind a statement line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Statement {
    /// A browser interaction such as click or set. Actions cannot fail in
    /// this model; failing interactions surface as a terminal fault.
    Action,
    /// An examined expectation
    Assertion(Assertion),
}

/// One executed statement with its source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementLine {
    source: String,
    #[serde(default)]
    derived: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    resolved_from: Vec<String>,
    statement: Statement,
}

impl StatementLine {
    /// Create an action line
    #[must_use]
    pub fn action(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            derived: false,
            resolved_from: Vec::new(),
            statement: Statement::Action,
        }
    }

    /// Create an assertion line
    #[must_use]
    pub fn assertion(source: impl Into<String>, assertion: Assertion) -> Self {
        Self {
            source: source.into(),
            derived: false,
            resolved_from: Vec::new(),
            statement: Statement::Assertion(assertion),
        }
    }

    /// Mark this line as synthesized by resolving an import/reference.
    ///
    /// Derived lines are excluded from default rendering.
    #[must_use]
    pub fn derived(mut self) -> Self {
        self.derived = true;
        self
    }

    /// Record a pre-resolution source this line was resolved from
    #[must_use]
    pub fn resolved_from(mut self, source: impl Into<String>) -> Self {
        self.resolved_from.push(source.into());
        self
    }

    /// The source text as executed
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether this line was synthesized rather than authored directly
    #[must_use]
    pub const fn is_derived(&self) -> bool {
        self.derived
    }

    /// Pre-resolution sources, innermost first
    #[must_use]
    pub fn resolution_sources(&self) -> &[String] {
        &self.resolved_from
    }

    /// The statement payload
    #[must_use]
    pub const fn statement(&self) -> &Statement {
        &self.statement
    }
}

/// Overall outcome of a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepStatus {
    /// Every statement succeeded
    Passed,
    /// An assertion failed
    Failed,
    /// Execution ended in an uncaught fault
    Errored,
}

/// A runtime fault captured by the execution engine.
///
/// Opaque to this crate beyond rendering; see [`crate::RenderFault`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fault {
    /// The fault class or kind
    pub class: String,
    /// The fault message
    pub message: String,
}

impl Fault {
    /// Create a fault
    #[must_use]
    pub fn new(class: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            message: message.into(),
        }
    }
}

/// The parameter data set a step ran against: an ordered key/value table
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DataSet {
    entries: Vec<(String, String)>,
}

impl DataSet {
    /// Create an empty data set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key/value entry, preserving insertion order
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// The entries in insertion order
    #[must_use]
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Whether the data set has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One finished step, as reported by the execution engine.
///
/// Invariants (guaranteed upstream, relied on here): completed lines are
/// exactly those executed before any failure; a fault is present only when
/// the failure was an uncaught fault, never alongside an assertion-mismatch
/// summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    source_path: String,
    name: String,
    status: StepStatus,
    #[serde(default)]
    completed: Vec<StatementLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    failed: Option<StatementLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expected_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    actual_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fault: Option<Fault>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data_set: Option<DataSet>,
}

impl Step {
    /// Create a step with the given outcome
    #[must_use]
    pub fn new(
        source_path: impl Into<String>,
        name: impl Into<String>,
        status: StepStatus,
    ) -> Self {
        Self {
            source_path: source_path.into(),
            name: name.into(),
            status,
            completed: Vec::new(),
            failed: None,
            expected_value: None,
            actual_value: None,
            fault: None,
            data_set: None,
        }
    }

    /// Append a completed statement line
    #[must_use]
    pub fn with_completed_line(mut self, line: StatementLine) -> Self {
        self.completed.push(line);
        self
    }

    /// Record the statement line that failed
    #[must_use]
    pub fn with_failed_line(mut self, line: StatementLine) -> Self {
        self.failed = Some(line);
        self
    }

    /// Record the expected value captured at failure time
    #[must_use]
    pub fn with_expected_value(mut self, value: impl Into<String>) -> Self {
        self.expected_value = Some(value.into());
        self
    }

    /// Record the actual value captured at failure time
    #[must_use]
    pub fn with_actual_value(mut self, value: impl Into<String>) -> Self {
        self.actual_value = Some(value.into());
        self
    }

    /// Record a terminal fault
    #[must_use]
    pub fn with_fault(mut self, fault: Fault) -> Self {
        self.fault = Some(fault);
        self
    }

    /// Record the parameter data set the step ran against
    #[must_use]
    pub fn with_data_set(mut self, data_set: DataSet) -> Self {
        self.data_set = Some(data_set);
        self
    }

    /// The source test path this step belongs to
    #[must_use]
    pub fn source_path(&self) -> &str {
        &self.source_path
    }

    /// The step name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The overall outcome
    #[must_use]
    pub const fn status(&self) -> StepStatus {
        self.status
    }

    /// Completed statement lines, in execution order
    #[must_use]
    pub fn completed_lines(&self) -> &[StatementLine] {
        &self.completed
    }

    /// The failed statement line, if any
    #[must_use]
    pub const fn failed_line(&self) -> Option<&StatementLine> {
        self.failed.as_ref()
    }

    /// The expected value captured at failure time
    #[must_use]
    pub fn expected_value(&self) -> Option<&str> {
        self.expected_value.as_deref()
    }

    /// The actual value captured at failure time
    #[must_use]
    pub fn actual_value(&self) -> Option<&str> {
        self.actual_value.as_deref()
    }

    /// The terminal fault, if any
    #[must_use]
    pub const fn fault(&self) -> Option<&Fault> {
        self.fault.as_ref()
    }

    /// The parameter data set, if any
    #[must_use]
    pub const fn data_set(&self) -> Option<&DataSet> {
        self.data_set.as_ref()
    }
}
