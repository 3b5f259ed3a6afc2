//! State construction errors.

use thiserror::Error;

/// Errors that can occur when constructing a `State`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConstructionError {
    /// The key is a sentinel value (empty string, integer `0`, ...)
    #[error("Invalid state key '{0}': sentinel values cannot name a state")]
    InvalidKey(String),

    #[error("State key not specified. Call .key(key) before .build()")]
    MissingKey,

    #[error("State action not specified. Call .action(f) before .build()")]
    MissingAction,
}
