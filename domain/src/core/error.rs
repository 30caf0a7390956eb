//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("one_of requires at least one alternative")]
    EmptyDisjunction,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Strategy nesting depth {depth} exceeds the limit of {max}")]
    DepthExceeded { depth: usize, max: usize },
}
