//! In-memory repositories for users, projects, and contributor links.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::issue::{
    domain::{Project, ProjectContributor, ProjectId, User, UserId},
    ports::{
        ContributorRepository, ProjectRepository, RepositoryError, RepositoryResult,
        UserRepository,
    },
};

fn lock_error<T>(err: &PoisonError<T>) -> RepositoryError {
    RepositoryError::persistence(std::io::Error::other(err.to_string()))
}

/// Thread-safe in-memory user repository.
///
/// [`UserRepository::find_all`] yields users in the order they were first
/// saved.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &User) -> RepositoryResult<()> {
        let mut users = self.users.write().map_err(|err| lock_error(&err))?;
        match users.iter_mut().find(|stored| stored.id() == user.id()) {
            Some(stored) => *stored = user.clone(),
            None => users.push(user.clone()),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> RepositoryResult<Option<User>> {
        let users = self.users.read().map_err(|err| lock_error(&err))?;
        Ok(users.iter().find(|user| user.id() == id).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<User>> {
        let users = self.users.read().map_err(|err| lock_error(&err))?;
        Ok(users.clone())
    }
}

/// Thread-safe in-memory project repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<HashMap<ProjectId, Project>>>,
}

impl InMemoryProjectRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn save(&self, project: &Project) -> RepositoryResult<()> {
        let mut projects = self.projects.write().map_err(|err| lock_error(&err))?;
        projects.insert(project.id(), project.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>> {
        let projects = self.projects.read().map_err(|err| lock_error(&err))?;
        Ok(projects.get(&id).cloned())
    }
}

/// Thread-safe in-memory contributor link repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContributorRepository {
    by_contributor: Arc<RwLock<HashMap<UserId, Vec<ProjectContributor>>>>,
}

impl InMemoryContributorRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContributorRepository for InMemoryContributorRepository {
    async fn save(&self, link: &ProjectContributor) -> RepositoryResult<()> {
        let mut index = self.by_contributor.write().map_err(|err| lock_error(&err))?;
        let links = index.entry(link.contributor_id()).or_default();
        if !links.contains(link) {
            links.push(*link);
        }
        Ok(())
    }

    async fn find_by_contributor(
        &self,
        contributor: UserId,
    ) -> RepositoryResult<Vec<ProjectContributor>> {
        let index = self.by_contributor.read().map_err(|err| lock_error(&err))?;
        Ok(index.get(&contributor).cloned().unwrap_or_default())
    }
}
