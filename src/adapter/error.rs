//! Adapter error types

use thiserror::Error;

/// Errors that can occur when reading through the adapters
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdapterError {
    /// Every write accessor fails with this. The adapters are read-only
    /// projections of upstream state; mutating one would desynchronize it
    /// from the wrapped description with no way to propagate the change
    /// back. Mutate the source and build a new adapter instead.
    #[error("Unsupported mutation: {operation} (adapter is a read-only view)")]
    UnsupportedMutation { operation: &'static str },

    /// The source reported a status outside its four known members.
    #[error("Unrecognized stream status: {0}")]
    UnrecognizedStatus(String),
}

impl AdapterError {
    pub(crate) fn unsupported_mutation(operation: &'static str) -> Self {
        Self::UnsupportedMutation { operation }
    }
}

/// Result type for adapter operations
pub type AdapterResult<T> = Result<T, AdapterError>;
