//! `PostgreSQL` repository implementations for issue tracking storage.

use super::{
    blocking::{IssuePgPool, run_blocking},
    models::{ContributorRow, IssueRow, ProjectRow, UserRow},
    schema::{issues, project_contributors, projects, users},
};
use crate::issue::{
    domain::{
        Comment, Issue, IssueId, IssuePriority, IssueStatus, IssueTitle, PersistedIssueData,
        Project, ProjectContributor, ProjectId, Role, User, UserId,
    },
    ports::{
        ContributorRepository, IssueRepository, ProjectRepository, RepositoryError,
        RepositoryResult, UserRepository,
    },
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// `PostgreSQL`-backed issue repository.
///
/// List queries order issues by creation time, then identifier.
#[derive(Debug, Clone)]
pub struct PostgresIssueRepository {
    pool: IssuePgPool,
}

impl PostgresIssueRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: IssuePgPool) -> Self {
        Self { pool }
    }

    async fn load_where<F>(&self, query: F) -> RepositoryResult<Vec<Issue>>
    where
        F: FnOnce(&mut PgConnection) -> QueryResult<Vec<IssueRow>> + Send + 'static,
    {
        run_blocking(&self.pool, move |connection| {
            query(connection)
                .map_err(RepositoryError::persistence)?
                .into_iter()
                .map(row_to_issue)
                .collect()
        })
        .await
    }
}

#[async_trait]
impl IssueRepository for PostgresIssueRepository {
    async fn save(&self, issue: &Issue) -> RepositoryResult<()> {
        let row = issue_to_row(issue)?;
        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(issues::table)
                .values(&row)
                .on_conflict(issues::id)
                .do_update()
                .set(&row)
                .execute(connection)
                .map_err(RepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: IssueId) -> RepositoryResult<()> {
        run_blocking(&self.pool, move |connection| {
            diesel::delete(issues::table.filter(issues::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(RepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: IssueId) -> RepositoryResult<Option<Issue>> {
        run_blocking(&self.pool, move |connection| {
            let row = issues::table
                .filter(issues::id.eq(id.into_inner()))
                .select(IssueRow::as_select())
                .first::<IssueRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(row_to_issue).transpose()
        })
        .await
    }

    async fn find_by_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<Issue>> {
        self.load_where(move |connection| {
            issues::table
                .filter(issues::project_id.eq(project_id.into_inner()))
                .order((issues::created_at.asc(), issues::id.asc()))
                .select(IssueRow::as_select())
                .load(connection)
        })
        .await
    }

    async fn find_by_project_and_status(
        &self,
        project_id: ProjectId,
        status: IssueStatus,
    ) -> RepositoryResult<Vec<Issue>> {
        self.load_where(move |connection| {
            issues::table
                .filter(issues::project_id.eq(project_id.into_inner()))
                .filter(issues::status.eq(status.as_str()))
                .order((issues::created_at.asc(), issues::id.asc()))
                .select(IssueRow::as_select())
                .load(connection)
        })
        .await
    }

    async fn find_by_assignee(&self, assignee: UserId) -> RepositoryResult<Vec<Issue>> {
        self.load_where(move |connection| {
            issues::table
                .filter(issues::assignee_id.eq(assignee.into_inner()))
                .order((issues::created_at.asc(), issues::id.asc()))
                .select(IssueRow::as_select())
                .load(connection)
        })
        .await
    }

    async fn find_by_fixer(&self, fixer: UserId) -> RepositoryResult<Vec<Issue>> {
        self.load_where(move |connection| {
            issues::table
                .filter(issues::fixer_id.eq(fixer.into_inner()))
                .order((issues::created_at.asc(), issues::id.asc()))
                .select(IssueRow::as_select())
                .load(connection)
        })
        .await
    }
}

/// `PostgreSQL`-backed user repository.
///
/// [`UserRepository::find_all`] orders users by username, then identifier.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: IssuePgPool,
}

impl PostgresUserRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: IssuePgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn save(&self, user: &User) -> RepositoryResult<()> {
        let row = UserRow {
            id: user.id().into_inner(),
            username: user.username().to_owned(),
            role: user.role().as_str().to_owned(),
        };
        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(users::table)
                .values(&row)
                .on_conflict(users::id)
                .do_update()
                .set(&row)
                .execute(connection)
                .map_err(RepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: UserId) -> RepositoryResult<Option<User>> {
        run_blocking(&self.pool, move |connection| {
            let row = users::table
                .filter(users::id.eq(id.into_inner()))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }

    async fn find_all(&self) -> RepositoryResult<Vec<User>> {
        run_blocking(&self.pool, move |connection| {
            users::table
                .order((users::username.asc(), users::id.asc()))
                .select(UserRow::as_select())
                .load::<UserRow>(connection)
                .map_err(RepositoryError::persistence)?
                .into_iter()
                .map(row_to_user)
                .collect()
        })
        .await
    }
}

/// `PostgreSQL`-backed project repository.
#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pool: IssuePgPool,
}

impl PostgresProjectRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: IssuePgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn save(&self, project: &Project) -> RepositoryResult<()> {
        let row = ProjectRow {
            id: project.id().into_inner(),
            title: project.title().to_owned(),
            admin_id: project.admin().into_inner(),
            created_at: project.created_at(),
        };
        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(projects::table)
                .values(&row)
                .on_conflict(projects::id)
                .do_update()
                .set(&row)
                .execute(connection)
                .map_err(RepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>> {
        run_blocking(&self.pool, move |connection| {
            let row = projects::table
                .filter(projects::id.eq(id.into_inner()))
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            Ok(row.map(|project| {
                Project::from_persisted(
                    ProjectId::from_uuid(project.id),
                    project.title,
                    UserId::from_uuid(project.admin_id),
                    project.created_at,
                )
            }))
        })
        .await
    }
}

/// `PostgreSQL`-backed contributor link repository.
#[derive(Debug, Clone)]
pub struct PostgresContributorRepository {
    pool: IssuePgPool,
}

impl PostgresContributorRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: IssuePgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContributorRepository for PostgresContributorRepository {
    async fn save(&self, link: &ProjectContributor) -> RepositoryResult<()> {
        let row = ContributorRow {
            project_id: link.project_id().into_inner(),
            contributor_id: link.contributor_id().into_inner(),
        };
        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(project_contributors::table)
                .values(&row)
                .on_conflict_do_nothing()
                .execute(connection)
                .map_err(RepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn find_by_contributor(
        &self,
        contributor: UserId,
    ) -> RepositoryResult<Vec<ProjectContributor>> {
        run_blocking(&self.pool, move |connection| {
            let rows = project_contributors::table
                .filter(project_contributors::contributor_id.eq(contributor.into_inner()))
                .select(ContributorRow::as_select())
                .load::<ContributorRow>(connection)
                .map_err(RepositoryError::persistence)?;
            Ok(rows
                .into_iter()
                .map(|row| {
                    ProjectContributor::new(
                        ProjectId::from_uuid(row.project_id),
                        UserId::from_uuid(row.contributor_id),
                    )
                })
                .collect())
        })
        .await
    }
}

fn row_to_user(row: UserRow) -> RepositoryResult<User> {
    let role = Role::try_from(row.role.as_str()).map_err(RepositoryError::corrupt)?;
    Ok(User::from_persisted(
        UserId::from_uuid(row.id),
        row.username,
        role,
    ))
}

fn issue_to_row(issue: &Issue) -> RepositoryResult<IssueRow> {
    let comments = serde_json::to_value(issue.comments()).map_err(RepositoryError::persistence)?;

    Ok(IssueRow {
        id: issue.id().into_inner(),
        project_id: issue.project_id().into_inner(),
        title: issue.title().as_str().to_owned(),
        description: issue.description().to_owned(),
        priority: issue.priority().map(|priority| priority.as_str().to_owned()),
        status: issue.status().as_str().to_owned(),
        reporter_id: issue.reporter().into_inner(),
        assignee_id: issue.assignee().map(UserId::into_inner),
        fixer_id: issue.fixer().map(UserId::into_inner),
        comments,
        created_at: issue.created_at(),
        updated_at: issue.updated_at(),
    })
}

fn row_to_issue(row: IssueRow) -> RepositoryResult<Issue> {
    let IssueRow {
        id,
        project_id,
        title: persisted_title,
        description,
        priority: persisted_priority,
        status: persisted_status,
        reporter_id,
        assignee_id,
        fixer_id,
        comments: persisted_comments,
        created_at,
        updated_at,
    } = row;

    let title = IssueTitle::new(persisted_title).map_err(RepositoryError::corrupt)?;
    let status =
        IssueStatus::try_from(persisted_status.as_str()).map_err(RepositoryError::corrupt)?;
    let priority = persisted_priority
        .as_deref()
        .map(IssuePriority::try_from)
        .transpose()
        .map_err(RepositoryError::corrupt)?;
    let comments = serde_json::from_value::<Vec<Comment>>(persisted_comments)
        .map_err(RepositoryError::persistence)?;

    Ok(Issue::from_persisted(PersistedIssueData {
        id: IssueId::from_uuid(id),
        project_id: ProjectId::from_uuid(project_id),
        title,
        description,
        priority,
        status,
        reporter: UserId::from_uuid(reporter_id),
        assignee: assignee_id.map(UserId::from_uuid),
        fixer: fixer_id.map(UserId::from_uuid),
        comments,
        created_at,
        updated_at,
    }))
}
