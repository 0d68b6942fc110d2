// conform-core/src/application/mod.rs

pub mod audit;

pub use audit::{AuditSummary, run_audit};
