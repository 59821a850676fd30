//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Rejected user input.
///
/// Both variants are recoverable: the interactive loop reports them and
/// asks again at the same step.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("not a valid number: {0:?}")]
    Parse(String),

    #[error("value must be >= 0, got {0}")]
    Range(f64),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, InputError>;
