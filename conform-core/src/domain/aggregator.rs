// conform-core/src/domain/aggregator.rs

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::warn;

use crate::domain::evaluator::SpecEvaluator;
use crate::domain::row::{CellValue, Row};
use crate::domain::spec::Specification;
use crate::domain::verdict::Verdict;

/// Bucket used when the entity-key function yields nothing for a flagged row.
pub const UNKNOWN_ENTITY: &str = "unknown";

/// One non-compliant row together with its violated columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlaggedRow {
    pub row: Row,
    pub violations: Vec<String>,
}

/// Fold of per-row verdicts across an evaluation session.
///
/// `flagged` preserves input row order; the count maps are commutative over
/// row permutations. BTreeMaps keep serialized output deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateReport {
    pub flagged: Vec<FlaggedRow>,
    pub counts_by_entity: BTreeMap<String, u64>,
    pub counts_by_column: BTreeMap<String, u64>,
}

impl AggregateReport {
    pub fn is_clean(&self) -> bool {
        self.flagged.is_empty()
    }

    /// Total column violations across all flagged rows.
    pub fn total_violations(&self) -> u64 {
        self.counts_by_column.values().sum()
    }
}

pub struct ViolationAggregator;

impl ViolationAggregator {
    /// Folds verdicts over an ordered sequence of rows.
    ///
    /// `entity_key` extracts the grouping key (vendor, supplier...) from a
    /// row; rows without one are still flagged, counted under
    /// [`UNKNOWN_ENTITY`]. Data-quality problems never abort the fold.
    pub fn aggregate<I, F>(rows: I, spec: &Specification, entity_key: F) -> AggregateReport
    where
        I: IntoIterator<Item = Row>,
        F: Fn(&Row) -> Option<String>,
    {
        let mut report = AggregateReport::default();

        for row in rows {
            let Verdict::OutOfSpec { columns } = SpecEvaluator::evaluate(&row, spec) else {
                continue;
            };

            let key = entity_key(&row).unwrap_or_else(|| {
                warn!(violations = columns.len(), "Flagged row has no entity key");
                UNKNOWN_ENTITY.to_string()
            });
            *report.counts_by_entity.entry(key).or_insert(0) += 1;

            for column in &columns {
                *report.counts_by_column.entry(column.clone()).or_insert(0) += 1;
            }

            report.flagged.push(FlaggedRow {
                row,
                violations: columns,
            });
        }

        report
    }
}

/// Entity-key function reading a named identity column (e.g. "Supplier").
///
/// Numbers and booleans are stringified; a missing or absent cell yields
/// `None`.
pub fn entity_key_column(column: &str) -> impl Fn(&Row) -> Option<String> + '_ {
    move |row| match row.get(column) {
        None | Some(CellValue::Missing) => None,
        Some(cell) => Some(cell.to_string()),
    }
}
