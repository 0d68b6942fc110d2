// conform-core/src/domain/spec.rs

use serde::Serialize;
use std::collections::HashSet;

use crate::domain::error::DomainError;

/// Acceptable limits for one measured parameter.
///
/// Bounds are inclusive: a value exactly equal to a bound is compliant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Limits {
    /// `min <= value <= max`, either bound optionally open.
    Range { min: Option<f64>, max: Option<f64> },
    /// `|value - target| <= tolerance`.
    Target { target: f64, tolerance: f64 },
}

/// One column of the specification table: a parameter name and its limits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnCheck {
    pub column: String,
    pub limits: Limits,
}

impl ColumnCheck {
    pub fn range(column: impl Into<String>, min: Option<f64>, max: Option<f64>) -> Self {
        ColumnCheck {
            column: column.into(),
            limits: Limits::Range { min, max },
        }
    }

    pub fn target(column: impl Into<String>, target: f64, tolerance: f64) -> Self {
        ColumnCheck {
            column: column.into(),
            limits: Limits::Target { target, tolerance },
        }
    }

    /// Decide whether a numeric value breaks this check.
    pub fn is_violated(&self, value: f64) -> bool {
        match self.limits {
            Limits::Range { min, max } => {
                min.is_some_and(|m| value < m) || max.is_some_and(|m| value > m)
            }
            Limits::Target { target, tolerance } => (value - target).abs() > tolerance,
        }
    }

    fn validate(&self) -> Result<(), DomainError> {
        match self.limits {
            Limits::Range {
                min: None,
                max: None,
            } => Err(DomainError::MissingBounds(self.column.clone())),
            Limits::Range {
                min: Some(min),
                max: Some(max),
            } if min > max => Err(DomainError::InvertedBounds {
                column: self.column.clone(),
                min,
                max,
            }),
            Limits::Target { tolerance, .. } if tolerance < 0.0 => {
                Err(DomainError::NegativeTolerance {
                    column: self.column.clone(),
                    tolerance,
                })
            }
            _ => Ok(()),
        }
    }
}

/// The validated, ordered specification table for one evaluation session.
///
/// Construction enforces the configuration contract (fail fast, before any
/// row is evaluated); afterwards the table is immutable and evaluation is
/// infallible.
#[derive(Debug, Clone, Serialize)]
pub struct Specification {
    checks: Vec<ColumnCheck>,
}

impl Specification {
    pub fn new(checks: Vec<ColumnCheck>) -> Result<Self, DomainError> {
        if checks.is_empty() {
            return Err(DomainError::EmptySpecification);
        }

        let mut seen = HashSet::new();
        for check in &checks {
            if !seen.insert(check.column.as_str()) {
                return Err(DomainError::DuplicateColumn(check.column.clone()));
            }
            check.validate()?;
        }

        Ok(Specification { checks })
    }

    /// Checks in declaration order (verdicts follow this order).
    pub fn checks(&self) -> &[ColumnCheck] {
        &self.checks
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.checks.iter().map(|c| c.column.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_specification() {
        let spec = Specification::new(vec![
            ColumnCheck::range("Moisture", Some(8.0), Some(14.0)),
            ColumnCheck::range("Gluten Index(%)", Some(90.0), None),
            ColumnCheck::target("Protein", 12.0, 0.01),
        ])
        .unwrap();

        assert_eq!(spec.len(), 3);
        assert_eq!(
            spec.columns().collect::<Vec<_>>(),
            vec!["Moisture", "Gluten Index(%)", "Protein"]
        );
    }

    #[test]
    fn test_empty_specification_rejected() {
        let res = Specification::new(vec![]);
        assert!(matches!(res, Err(DomainError::EmptySpecification)));
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let res = Specification::new(vec![
            ColumnCheck::range("Moisture", Some(8.0), Some(14.0)),
            ColumnCheck::range("Moisture", None, Some(15.0)),
        ]);
        assert!(matches!(res, Err(DomainError::DuplicateColumn(c)) if c == "Moisture"));
    }

    #[test]
    fn test_no_bounds_rejected() {
        let res = Specification::new(vec![ColumnCheck::range("Moisture", None, None)]);
        assert!(matches!(res, Err(DomainError::MissingBounds(c)) if c == "Moisture"));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let res = Specification::new(vec![ColumnCheck::range("Moisture", Some(14.0), Some(8.0))]);
        assert!(matches!(res, Err(DomainError::InvertedBounds { .. })));
    }

    #[test]
    fn test_equal_bounds_accepted() {
        // min == max is a degenerate but legal range
        assert!(Specification::new(vec![ColumnCheck::range("Ash", Some(0.5), Some(0.5))]).is_ok());
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let res = Specification::new(vec![ColumnCheck::target("Protein", 12.0, -0.1)]);
        assert!(matches!(res, Err(DomainError::NegativeTolerance { .. })));
    }

    #[test]
    fn test_zero_tolerance_accepted() {
        assert!(Specification::new(vec![ColumnCheck::target("Protein", 12.0, 0.0)]).is_ok());
    }
}
