// conform-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(conform::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(conform::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    Yaml(#[from] serde_yaml::Error),

    // --- DATA / JSON ---
    #[error("JSON Parsing Error: {0}")]
    #[diagnostic(
        code(conform::infra::json),
        help("Data files must hold one JSON object per line, or a JSON array of objects.")
    )]
    Json(#[from] serde_json::Error),

    #[error("Specification file not found at '{0}'")]
    #[diagnostic(code(conform::infra::config_missing))]
    ConfigNotFound(String),

    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error("No data found at '{0}'")]
    #[diagnostic(
        code(conform::infra::data_missing),
        help("Pass row files with --data, or a directory of .jsonl/.json files with --data-dir.")
    )]
    DataNotFound(String),
}
