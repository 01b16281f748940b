//! Repository port for issue persistence and lookup.

use super::RepositoryResult;
use crate::issue::domain::{Issue, IssueId, IssueStatus, ProjectId, UserId};
use async_trait::async_trait;

/// Issue persistence contract.
///
/// List lookups return issues in a stable order (creation order for the
/// bundled adapters) so that callers relying on enumeration order stay
/// deterministic.
#[async_trait]
pub trait IssueRepository: Send + Sync {
    /// Inserts the issue or overwrites the stored record with the same ID.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the write fails.
    ///
    /// [`RepositoryError::Persistence`]: super::RepositoryError::Persistence
    async fn save(&self, issue: &Issue) -> RepositoryResult<()>;

    /// Removes the issue. Removing an absent issue is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the delete fails.
    ///
    /// [`RepositoryError::Persistence`]: super::RepositoryError::Persistence
    async fn delete(&self, id: IssueId) -> RepositoryResult<()>;

    /// Finds an issue by identifier.
    ///
    /// Returns `None` when the issue does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the lookup fails and
    /// [`RepositoryError::Corrupt`] when the stored record cannot be mapped
    /// back into an [`Issue`].
    ///
    /// [`RepositoryError::Persistence`]: super::RepositoryError::Persistence
    /// [`RepositoryError::Corrupt`]: super::RepositoryError::Corrupt
    async fn find_by_id(&self, id: IssueId) -> RepositoryResult<Option<Issue>>;

    /// Returns every issue belonging to the project.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] or
    /// [`RepositoryError::Corrupt`] as for [`Self::find_by_id`].
    ///
    /// [`RepositoryError::Persistence`]: super::RepositoryError::Persistence
    /// [`RepositoryError::Corrupt`]: super::RepositoryError::Corrupt
    async fn find_by_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<Issue>>;

    /// Returns the project's issues currently in `status`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] or
    /// [`RepositoryError::Corrupt`] as for [`Self::find_by_id`].
    ///
    /// [`RepositoryError::Persistence`]: super::RepositoryError::Persistence
    /// [`RepositoryError::Corrupt`]: super::RepositoryError::Corrupt
    async fn find_by_project_and_status(
        &self,
        project_id: ProjectId,
        status: IssueStatus,
    ) -> RepositoryResult<Vec<Issue>>;

    /// Returns every issue assigned to the user.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] or
    /// [`RepositoryError::Corrupt`] as for [`Self::find_by_id`].
    ///
    /// [`RepositoryError::Persistence`]: super::RepositoryError::Persistence
    /// [`RepositoryError::Corrupt`]: super::RepositoryError::Corrupt
    async fn find_by_assignee(&self, assignee: UserId) -> RepositoryResult<Vec<Issue>>;

    /// Returns every issue fixed by the user, across all projects.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] or
    /// [`RepositoryError::Corrupt`] as for [`Self::find_by_id`].
    ///
    /// [`RepositoryError::Persistence`]: super::RepositoryError::Persistence
    /// [`RepositoryError::Corrupt`]: super::RepositoryError::Corrupt
    async fn find_by_fixer(&self, fixer: UserId) -> RepositoryResult<Vec<Issue>>;
}
