// conform-core/src/infrastructure/config/mod.rs

pub mod audit;

pub use audit::{AuditConfig, SpecEntry, load_audit_config};
