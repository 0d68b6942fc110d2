// conform-core/src/domain/verdict.rs

use serde::Serialize;

/// Outcome of evaluating one row against the specification.
///
/// Violated columns appear in specification declaration order; duplicates
/// are impossible since each column is checked exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Compliant,
    OutOfSpec { columns: Vec<String> },
}

impl Verdict {
    pub fn is_compliant(&self) -> bool {
        matches!(self, Verdict::Compliant)
    }

    /// Violated column names; empty for a compliant row.
    pub fn violated_columns(&self) -> &[String] {
        match self {
            Verdict::Compliant => &[],
            Verdict::OutOfSpec { columns } => columns,
        }
    }
}
