// conform-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Specification is empty")]
    #[diagnostic(
        code(conform::domain::empty_spec),
        help("Declare at least one column check under 'specification:'.")
    )]
    EmptySpecification,

    #[error("Column '{0}' is specified more than once")]
    #[diagnostic(
        code(conform::domain::duplicate_column),
        help("Each column may carry exactly one check; merge the entries.")
    )]
    DuplicateColumn(String),

    #[error("Column '{0}' has neither a min nor a max bound")]
    #[diagnostic(
        code(conform::domain::missing_bounds),
        help("A range check needs 'min', 'max', or both.")
    )]
    MissingBounds(String),

    #[error("Column '{column}': min {min} is greater than max {max}")]
    #[diagnostic(code(conform::domain::inverted_bounds))]
    InvertedBounds { column: String, min: f64, max: f64 },

    #[error("Column '{column}': tolerance {tolerance} is negative")]
    #[diagnostic(code(conform::domain::negative_tolerance))]
    NegativeTolerance { column: String, tolerance: f64 },

    #[error("Column '{0}' mixes range bounds with a target value")]
    #[diagnostic(
        code(conform::domain::ambiguous_limits),
        help("Use either 'min'/'max' or 'target'+'tolerance', not both.")
    )]
    AmbiguousLimits(String),

    #[error("Column '{0}' declares a target without a tolerance")]
    #[diagnostic(
        code(conform::domain::missing_tolerance),
        help("Add 'tolerance:' next to 'target:' (use 0 for exact equality).")
    )]
    MissingTolerance(String),

    #[error("Column '{0}' declares a tolerance without a target")]
    #[diagnostic(
        code(conform::domain::missing_target),
        help("Add 'target:' next to 'tolerance:', or switch to 'min'/'max'.")
    )]
    MissingTarget(String),
}
