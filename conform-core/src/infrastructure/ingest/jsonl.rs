// conform-core/src/infrastructure/ingest/jsonl.rs
//
// Row adapter for pre-mapped records on disk: one JSON object per line
// (.jsonl), or a whole-file JSON array of objects (.json). No header
// detection, no column renaming — that belongs upstream of this boundary.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::domain::Row;
use crate::error::ConformError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::RowSource;

pub struct JsonlRowSource {
    path: PathBuf,
    label: String,
}

impl JsonlRowSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        JsonlRowSource { path, label }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_lines(&self) -> Result<Vec<Row>, ConformError> {
        let file = File::open(&self.path).map_err(InfrastructureError::Io)?;
        let reader = BufReader::new(file);

        let mut rows = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(InfrastructureError::Io)?;
            if line.trim().is_empty() {
                continue;
            }
            // A malformed record is a data error: warn and keep going.
            match serde_json::from_str::<Row>(&line) {
                Ok(row) => rows.push(row),
                Err(e) => warn!(
                    source = %self.label,
                    line = idx + 1,
                    error = %e,
                    "Skipping malformed record"
                ),
            }
        }
        Ok(rows)
    }

    fn read_array(&self) -> Result<Vec<Row>, ConformError> {
        let file = File::open(&self.path).map_err(InfrastructureError::Io)?;
        let rows: Vec<Row> =
            serde_json::from_reader(BufReader::new(file)).map_err(InfrastructureError::Json)?;
        Ok(rows)
    }
}

impl RowSource for JsonlRowSource {
    fn name(&self) -> &str {
        &self.label
    }

    fn rows(&self) -> Result<Vec<Row>, ConformError> {
        if !self.path.exists() {
            return Err(
                InfrastructureError::DataNotFound(self.path.display().to_string()).into(),
            );
        }

        let rows = match self.path.extension().and_then(|e| e.to_str()) {
            Some("json") => self.read_array()?,
            _ => self.read_lines()?,
        };

        info!(source = %self.label, rows = rows.len(), "Loaded rows");
        Ok(rows)
    }
}
