// conform-core/src/infrastructure/ingest/discovery.rs
//
// Scans a data directory for row files so a single audit can span several
// sheets/sources.

use std::path::Path;
use tracing::info;
use walkdir::WalkDir;

use crate::error::ConformError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::ingest::jsonl::JsonlRowSource;

pub struct DataDiscovery;

impl DataDiscovery {
    /// Finds every `.jsonl`/`.json` file under `data_dir`, sorted by path so
    /// runs are deterministic.
    pub fn discover(data_dir: &Path) -> Result<Vec<JsonlRowSource>, ConformError> {
        if !data_dir.is_dir() {
            return Err(
                InfrastructureError::DataNotFound(data_dir.display().to_string()).into(),
            );
        }

        let mut paths: Vec<_> = WalkDir::new(data_dir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.path().is_file())
            .filter(|e| {
                matches!(
                    e.path().extension().and_then(|s| s.to_str()),
                    Some("jsonl") | Some("json")
                )
            })
            .map(|e| e.into_path())
            .collect();
        paths.sort();

        info!(dir = %data_dir.display(), sources = paths.len(), "Discovered data files");

        Ok(paths.into_iter().map(JsonlRowSource::new).collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ports::RowSource;
    use std::fs;

    #[test]
    fn test_discover_sorted_sources() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b_sheet.jsonl"), "{}\n").unwrap();
        fs::write(dir.path().join("nested/a_sheet.json"), "[]").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let sources = DataDiscovery::discover(dir.path()).unwrap();
        let names: Vec<_> = sources.iter().map(|s| s.name().to_string()).collect();
        assert_eq!(names, ["b_sheet", "a_sheet"]);
    }

    #[test]
    fn test_missing_dir_is_data_not_found() {
        let res = DataDiscovery::discover(Path::new("/no/such/dir"));
        assert!(matches!(
            res,
            Err(ConformError::Infrastructure(
                InfrastructureError::DataNotFound(_)
            ))
        ));
    }
}
