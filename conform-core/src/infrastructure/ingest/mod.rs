// conform-core/src/infrastructure/ingest/mod.rs

pub mod discovery;
pub mod jsonl;

pub use discovery::DataDiscovery;
pub use jsonl::JsonlRowSource;
