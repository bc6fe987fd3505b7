//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent malformed domain values.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid point '{0}': expected X,Y")]
    InvalidPoint(String),

    #[error("invalid iteration count '{0}': expected a non-negative integer")]
    InvalidIterations(String),

    #[error("invalid format '{0}': expected 'canonical' or 'bare'")]
    InvalidFormat(String),
}
