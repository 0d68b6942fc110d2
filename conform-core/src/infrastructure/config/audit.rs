// conform-core/src/infrastructure/config/audit.rs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::domain::error::DomainError;
use crate::domain::spec::{ColumnCheck, Specification};
use crate::error::ConformError;
use crate::infrastructure::error::InfrastructureError;

/// Raw specification entry as written in YAML: flat optional fields, one
/// check per column. Compiled into a validated [`ColumnCheck`].
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SpecEntry {
    pub column: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub target: Option<f64>,
    pub tolerance: Option<f64>,
}

impl SpecEntry {
    fn compile(&self) -> Result<ColumnCheck, DomainError> {
        let has_bounds = self.min.is_some() || self.max.is_some();

        match (self.target, self.tolerance) {
            (Some(_), _) | (_, Some(_)) if has_bounds => {
                Err(DomainError::AmbiguousLimits(self.column.clone()))
            }
            (Some(target), Some(tolerance)) => {
                Ok(ColumnCheck::target(self.column.clone(), target, tolerance))
            }
            (Some(_), None) => Err(DomainError::MissingTolerance(self.column.clone())),
            (None, Some(_)) => Err(DomainError::MissingTarget(self.column.clone())),
            (None, None) => Ok(ColumnCheck::range(self.column.clone(), self.min, self.max)),
        }
    }
}

/// On-disk shape of the audit file (`conform.yaml`).
#[derive(Debug, Deserialize, Serialize, Clone)]
struct AuditFile {
    name: Option<String>,
    /// Identity column used to group violation counts (e.g. "Supplier").
    entity_key: Option<String>,
    /// Extra identity columns surfaced next to flagged rows (e.g. "MFD").
    #[serde(default)]
    carry: Vec<String>,
    specification: Vec<SpecEntry>,
}

/// Validated in-memory audit configuration.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    pub name: String,
    pub entity_key: Option<String>,
    pub carry: Vec<String>,
    pub specification: Specification,
}

/// Loads and validates an audit configuration.
///
/// `CONFORM_SPEC` overrides the given path (layering, like profile overrides
/// via environment). Specification-contract violations fail fast here,
/// before any row is evaluated.
#[instrument(skip(path))]
pub fn load_audit_config(path: &Path) -> Result<AuditConfig, ConformError> {
    let path = match std::env::var("CONFORM_SPEC") {
        Ok(over) => {
            info!(original = ?path, new = %over, "Overriding spec path via ENV");
            PathBuf::from(over)
        }
        Err(_) => path.to_path_buf(),
    };

    if !path.exists() {
        return Err(InfrastructureError::ConfigNotFound(path.display().to_string()).into());
    }

    let content = fs::read_to_string(&path).map_err(InfrastructureError::Io)?;
    let file: AuditFile = serde_yaml::from_str(&content).map_err(InfrastructureError::Yaml)?;

    let checks = file
        .specification
        .iter()
        .map(SpecEntry::compile)
        .collect::<Result<Vec<_>, _>>()?;
    let specification = Specification::new(checks)?;

    let config = AuditConfig {
        name: file.name.unwrap_or_else(|| "audit".to_string()),
        entity_key: file.entity_key,
        carry: file.carry,
        specification,
    };
    info!(
        name = %config.name,
        checks = config.specification.len(),
        "Specification loaded"
    );

    Ok(config)
}
