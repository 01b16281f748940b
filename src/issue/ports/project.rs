//! Repository ports for projects and contributor membership.

use super::RepositoryResult;
use crate::issue::domain::{Project, ProjectContributor, ProjectId, UserId};
use async_trait::async_trait;

/// Project persistence contract.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Inserts the project or overwrites the stored record with the same ID.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the write fails,
    /// including when the administrator does not exist in a store that
    /// enforces it.
    ///
    /// [`RepositoryError::Persistence`]: super::RepositoryError::Persistence
    async fn save(&self, project: &Project) -> RepositoryResult<()>;

    /// Finds a project by identifier.
    ///
    /// Returns `None` when the project does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the lookup fails.
    ///
    /// [`RepositoryError::Persistence`]: super::RepositoryError::Persistence
    async fn find_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>>;
}

/// Contributor membership persistence contract.
#[async_trait]
pub trait ContributorRepository: Send + Sync {
    /// Records the membership. Saving an existing link is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the write fails.
    ///
    /// [`RepositoryError::Persistence`]: super::RepositoryError::Persistence
    async fn save(&self, link: &ProjectContributor) -> RepositoryResult<()>;

    /// Returns every project membership of the user.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the lookup fails.
    ///
    /// [`RepositoryError::Persistence`]: super::RepositoryError::Persistence
    async fn find_by_contributor(
        &self,
        contributor: UserId,
    ) -> RepositoryResult<Vec<ProjectContributor>>;
}
