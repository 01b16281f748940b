//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use issue_tracker::issue::{
    adapters::memory::{
        InMemoryContributorRepository, InMemoryIssueRepository, InMemoryProjectRepository,
        InMemoryUserRepository,
    },
    domain::{Project, ProjectContributor, Role, User},
    ports::{ContributorRepository, ProjectRepository, UserRepository},
    services::IssueLifecycleService,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type wired to the in-memory adapters.
pub type TestService = IssueLifecycleService<
    InMemoryIssueRepository,
    InMemoryUserRepository,
    InMemoryProjectRepository,
    InMemoryContributorRepository,
    DefaultClock,
>;

/// A service plus the directory stores that tests seed directly.
pub struct Tracker {
    /// Service under test.
    pub service: TestService,
    users: InMemoryUserRepository,
    projects: InMemoryProjectRepository,
    contributors: InMemoryContributorRepository,
}

impl Tracker {
    /// Registers a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the user store rejects the write.
    pub async fn user(&self, username: &str, role: Role) -> eyre::Result<User> {
        let user = User::new(username, role);
        self.users.save(&user).await?;
        Ok(user)
    }

    /// Creates a project administered by `admin`.
    ///
    /// # Errors
    ///
    /// Returns an error if the project store rejects the write.
    pub async fn project(&self, title: &str, admin: &User) -> eyre::Result<Project> {
        let project = Project::new(title, admin.id(), &DefaultClock);
        self.projects.save(&project).await?;
        Ok(project)
    }

    /// Links `user` to `project` as a contributor.
    ///
    /// # Errors
    ///
    /// Returns an error if the contributor store rejects the write.
    pub async fn join(&self, project: &Project, user: &User) -> eyre::Result<()> {
        self.contributors
            .save(&ProjectContributor::new(project.id(), user.id()))
            .await?;
        Ok(())
    }
}

/// Provides a tracker backed by fresh in-memory stores.
#[fixture]
pub fn tracker() -> Tracker {
    let users = InMemoryUserRepository::new();
    let projects = InMemoryProjectRepository::new();
    let contributors = InMemoryContributorRepository::new();
    let service = IssueLifecycleService::new(
        Arc::new(InMemoryIssueRepository::new()),
        Arc::new(users.clone()),
        Arc::new(projects.clone()),
        Arc::new(contributors.clone()),
        Arc::new(DefaultClock),
    );
    Tracker {
        service,
        users,
        projects,
        contributors,
    }
}
