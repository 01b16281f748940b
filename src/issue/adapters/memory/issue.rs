//! In-memory issue repository.

use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::issue::{
    domain::{Issue, IssueId, IssueStatus, ProjectId, UserId},
    ports::{IssueRepository, RepositoryError, RepositoryResult},
};

/// Thread-safe in-memory issue repository.
///
/// Issues are kept in insertion order; saving an existing issue replaces it
/// in place.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIssueRepository {
    issues: Arc<RwLock<Vec<Issue>>>,
}

impl InMemoryIssueRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, Vec<Issue>>> {
        self.issues
            .read()
            .map_err(|err| RepositoryError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, Vec<Issue>>> {
        self.issues
            .write()
            .map_err(|err| RepositoryError::persistence(std::io::Error::other(err.to_string())))
    }

    fn filtered(&self, predicate: impl Fn(&Issue) -> bool) -> RepositoryResult<Vec<Issue>> {
        let issues = self.read()?;
        Ok(issues
            .iter()
            .filter(|issue| predicate(issue))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl IssueRepository for InMemoryIssueRepository {
    async fn save(&self, issue: &Issue) -> RepositoryResult<()> {
        let mut issues = self.write()?;
        match issues.iter_mut().find(|stored| stored.id() == issue.id()) {
            Some(stored) => *stored = issue.clone(),
            None => issues.push(issue.clone()),
        }
        Ok(())
    }

    async fn delete(&self, id: IssueId) -> RepositoryResult<()> {
        let mut issues = self.write()?;
        issues.retain(|issue| issue.id() != id);
        Ok(())
    }

    async fn find_by_id(&self, id: IssueId) -> RepositoryResult<Option<Issue>> {
        let issues = self.read()?;
        Ok(issues.iter().find(|issue| issue.id() == id).cloned())
    }

    async fn find_by_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<Issue>> {
        self.filtered(|issue| issue.project_id() == project_id)
    }

    async fn find_by_project_and_status(
        &self,
        project_id: ProjectId,
        status: IssueStatus,
    ) -> RepositoryResult<Vec<Issue>> {
        self.filtered(|issue| issue.project_id() == project_id && issue.status() == status)
    }

    async fn find_by_assignee(&self, assignee: UserId) -> RepositoryResult<Vec<Issue>> {
        self.filtered(|issue| issue.assignee() == Some(assignee))
    }

    async fn find_by_fixer(&self, fixer: UserId) -> RepositoryResult<Vec<Issue>> {
        self.filtered(|issue| issue.fixer() == Some(fixer))
    }
}
