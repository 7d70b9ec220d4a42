//! Shared text-layout helpers.
//!
//! Every renderer in the crate indents through [`indent`] so the report has a
//! single source of truth for the indentation unit.

/// The indentation unit used throughout report output.
pub const INDENT: &str = "  ";

/// Prefix every line of `content` with `depth` indentation units.
///
/// Empty lines are indented too; callers that need pristine blank lines
/// separate blocks before indenting.
#[must_use]
pub fn indent(content: &str, depth: usize) -> String {
    let prefix = INDENT.repeat(depth);

    content
        .split('\n')
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
