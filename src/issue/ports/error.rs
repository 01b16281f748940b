//! Errors shared by the issue tracking repository ports.

use std::sync::Arc;
use thiserror::Error;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors returned by repository implementations.
///
/// Lookups report a missing record as `Ok(None)` or an empty list, never as
/// an error.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// A stored value could not be mapped back into the domain.
    #[error("corrupt record: {0}")]
    Corrupt(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wraps a persistence error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Reports a stored value that fails domain validation.
    #[must_use]
    pub fn corrupt(err: impl std::fmt::Display) -> Self {
        Self::Corrupt(err.to_string())
    }
}
