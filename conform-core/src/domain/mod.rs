// conform-core/src/domain/mod.rs

pub mod aggregator;
pub mod error;
pub mod evaluator;
pub mod row;
pub mod spec;
pub mod verdict;

// Convenient re-exports to simplify imports elsewhere
pub use aggregator::{AggregateReport, FlaggedRow, UNKNOWN_ENTITY, ViolationAggregator, entity_key_column};
pub use error::DomainError;
pub use evaluator::SpecEvaluator;
pub use row::{CellValue, Row};
pub use spec::{ColumnCheck, Limits, Specification};
pub use verdict::Verdict;
