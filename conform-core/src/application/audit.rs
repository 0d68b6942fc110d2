// conform-core/src/application/audit.rs
//
// USE CASE: run one audit — pull rows from every source, fold them through
// the aggregator, wrap the report with run metadata.

use serde::Serialize;
use tracing::info;

use crate::domain::aggregator::{AggregateReport, ViolationAggregator, entity_key_column};
use crate::domain::row::Row;
use crate::error::ConformError;
use crate::infrastructure::config::AuditConfig;
use crate::ports::RowSource;

#[derive(Debug, Clone, Serialize)]
pub struct AuditSummary {
    pub name: String,
    pub generated_at: String,
    pub sources: Vec<String>,
    pub rows_evaluated: usize,
    pub report: AggregateReport,
}

impl AuditSummary {
    pub fn is_clean(&self) -> bool {
        self.report.is_clean()
    }
}

/// Runs the audit across every source. Sources are concatenated in the
/// given order, so one aggregation spans all sheets.
pub fn run_audit(
    sources: &[Box<dyn RowSource>],
    config: &AuditConfig,
) -> Result<AuditSummary, ConformError> {
    let mut names = Vec::with_capacity(sources.len());
    let mut all_rows: Vec<Row> = Vec::new();

    for source in sources {
        let rows = source.rows()?;
        info!(source = source.name(), rows = rows.len(), "Source loaded");
        names.push(source.name().to_string());
        all_rows.extend(rows);
    }

    let rows_evaluated = all_rows.len();
    let report = match config.entity_key.as_deref() {
        Some(column) => ViolationAggregator::aggregate(
            all_rows,
            &config.specification,
            entity_key_column(column),
        ),
        None => ViolationAggregator::aggregate(all_rows, &config.specification, |_| None),
    };

    info!(
        rows = rows_evaluated,
        flagged = report.flagged.len(),
        "Audit complete"
    );

    Ok(AuditSummary {
        name: config.name.clone(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        sources: names,
        rows_evaluated,
        report,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::spec::{ColumnCheck, Specification};

    // --- MOCK SOURCE ---
    struct FixtureSource {
        label: String,
        rows: Vec<Row>,
    }

    impl RowSource for FixtureSource {
        fn name(&self) -> &str {
            &self.label
        }
        fn rows(&self) -> Result<Vec<Row>, ConformError> {
            Ok(self.rows.clone())
        }
    }

    fn config() -> AuditConfig {
        AuditConfig {
            name: "rwf-intake".to_string(),
            entity_key: Some("Supplier".to_string()),
            carry: vec![],
            specification: Specification::new(vec![ColumnCheck::range(
                "Moisture",
                Some(8.0),
                Some(14.0),
            )])
            .unwrap(),
        }
    }

    #[test]
    fn test_audit_spans_all_sources() {
        let sources: Vec<Box<dyn RowSource>> = vec![
            Box::new(FixtureSource {
                label: "sheet_1".into(),
                rows: vec![
                    Row::new().with("Supplier", "A").with("Moisture", 15.0),
                    Row::new().with("Supplier", "B").with("Moisture", 11.0),
                ],
            }),
            Box::new(FixtureSource {
                label: "sheet_2".into(),
                rows: vec![Row::new().with("Supplier", "A").with("Moisture", 7.5)],
            }),
        ];

        let summary = run_audit(&sources, &config()).unwrap();
        assert_eq!(summary.sources, ["sheet_1", "sheet_2"]);
        assert_eq!(summary.rows_evaluated, 3);
        assert_eq!(summary.report.flagged.len(), 2);
        // Entity counts span both sheets
        assert_eq!(summary.report.counts_by_entity.get("A"), Some(&2));
        assert!(!summary.is_clean());
    }

    #[test]
    fn test_audit_without_entity_key_uses_unknown() {
        let mut cfg = config();
        cfg.entity_key = None;

        let sources: Vec<Box<dyn RowSource>> = vec![Box::new(FixtureSource {
            label: "sheet".into(),
            rows: vec![Row::new().with("Moisture", 20.0)],
        })];

        let summary = run_audit(&sources, &cfg).unwrap();
        assert_eq!(
            summary
                .report
                .counts_by_entity
                .get(crate::domain::UNKNOWN_ENTITY),
            Some(&1)
        );
    }

    #[test]
    fn test_clean_audit() {
        let sources: Vec<Box<dyn RowSource>> = vec![Box::new(FixtureSource {
            label: "sheet".into(),
            rows: vec![Row::new().with("Supplier", "A").with("Moisture", 10.0)],
        })];

        let summary = run_audit(&sources, &config()).unwrap();
        assert!(summary.is_clean());
        assert_eq!(summary.rows_evaluated, 1);
    }
}
