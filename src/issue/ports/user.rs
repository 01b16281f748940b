//! Repository port for user accounts.

use super::RepositoryResult;
use crate::issue::domain::{User, UserId};
use async_trait::async_trait;

/// User account persistence contract.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts the user or overwrites the stored record with the same ID.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the write fails.
    ///
    /// [`RepositoryError::Persistence`]: super::RepositoryError::Persistence
    async fn save(&self, user: &User) -> RepositoryResult<()>;

    /// Finds a user by identifier.
    ///
    /// Returns `None` when the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the lookup fails and
    /// [`RepositoryError::Corrupt`] when the stored role tag is unknown.
    ///
    /// [`RepositoryError::Persistence`]: super::RepositoryError::Persistence
    /// [`RepositoryError::Corrupt`]: super::RepositoryError::Corrupt
    async fn find_by_id(&self, id: UserId) -> RepositoryResult<Option<User>>;

    /// Returns every user in a stable enumeration order.
    ///
    /// Candidate recommendation breaks ties by this order.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the lookup fails and
    /// [`RepositoryError::Corrupt`] when a stored role tag is unknown.
    ///
    /// [`RepositoryError::Persistence`]: super::RepositoryError::Persistence
    /// [`RepositoryError::Corrupt`]: super::RepositoryError::Corrupt
    async fn find_all(&self) -> RepositoryResult<Vec<User>>;
}
