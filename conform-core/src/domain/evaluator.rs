// conform-core/src/domain/evaluator.rs

use crate::domain::row::Row;
use crate::domain::spec::Specification;
use crate::domain::verdict::Verdict;

pub struct SpecEvaluator;

impl SpecEvaluator {
    /// Evaluates one row against the specification table.
    ///
    /// Pure and infallible: the specification invariants are enforced at
    /// construction, and cells without numeric evidence (missing, text,
    /// bool, absent) are skipped rather than flagged.
    pub fn evaluate(row: &Row, spec: &Specification) -> Verdict {
        let mut violated: Vec<String> = Vec::new();

        for check in spec.checks() {
            let Some(value) = row.numeric(&check.column) else {
                // No evidence for this column, not a violation.
                continue;
            };
            if check.is_violated(value) {
                violated.push(check.column.clone());
            }
        }

        if violated.is_empty() {
            Verdict::Compliant
        } else {
            Verdict::OutOfSpec { columns: violated }
        }
    }
}
