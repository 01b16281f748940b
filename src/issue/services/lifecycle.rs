//! Service layer for issue creation, mutation, lifecycle transitions,
//! assignee recommendation, and statistics.

use super::{
    CommentResponse, IssueLifecycleError, IssueLifecycleResult, IssueStatistics, IssueTokens,
    LifecycleConfig, recommendation, statistics,
};
use crate::issue::{
    domain::{
        Capability, Comment, Issue, IssueId, IssuePriority, IssueStatus, IssueTitle, NewIssue,
        Project, ProjectId, Role, User, UserId,
    },
    ports::{ContributorRepository, IssueRepository, ProjectRepository, UserRepository},
};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Request payload for reporting a new issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateIssueRequest {
    project_id: ProjectId,
    reporter_id: UserId,
    title: String,
    description: String,
    priority: Option<IssuePriority>,
}

impl CreateIssueRequest {
    /// Creates a request without an explicit priority.
    #[must_use]
    pub fn new(
        project_id: ProjectId,
        reporter_id: UserId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            project_id,
            reporter_id,
            title: title.into(),
            description: description.into(),
            priority: None,
        }
    }

    /// Sets the issue priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: IssuePriority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Request payload for overwriting an issue's editable fields.
///
/// `priority` replaces the stored priority as given; `None` clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifyIssueRequest {
    issue_id: IssueId,
    user_id: UserId,
    title: String,
    description: String,
    priority: Option<IssuePriority>,
}

impl ModifyIssueRequest {
    /// Creates a modification request.
    #[must_use]
    pub fn new(
        issue_id: IssueId,
        user_id: UserId,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Option<IssuePriority>,
    ) -> Self {
        Self {
            issue_id,
            user_id,
            title: title.into(),
            description: description.into(),
            priority,
        }
    }
}

/// Issue lifecycle orchestration service.
///
/// Every mutating operation loads the records it needs, checks all
/// preconditions, and only then applies its change with a single save.
pub struct IssueLifecycleService<I, U, P, R, K>
where
    I: IssueRepository,
    U: UserRepository,
    P: ProjectRepository,
    R: ContributorRepository,
    K: Clock + Send + Sync,
{
    issues: Arc<I>,
    users: Arc<U>,
    projects: Arc<P>,
    contributors: Arc<R>,
    clock: Arc<K>,
    config: LifecycleConfig,
}

impl<I, U, P, R, K> Clone for IssueLifecycleService<I, U, P, R, K>
where
    I: IssueRepository,
    U: UserRepository,
    P: ProjectRepository,
    R: ContributorRepository,
    K: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            issues: Arc::clone(&self.issues),
            users: Arc::clone(&self.users),
            projects: Arc::clone(&self.projects),
            contributors: Arc::clone(&self.contributors),
            clock: Arc::clone(&self.clock),
            config: self.config.clone(),
        }
    }
}

impl<I, U, P, R, K> IssueLifecycleService<I, U, P, R, K>
where
    I: IssueRepository,
    U: UserRepository,
    P: ProjectRepository,
    R: ContributorRepository,
    K: Clock + Send + Sync,
{
    /// Creates a new service with the default configuration.
    #[must_use]
    pub fn new(
        issues: Arc<I>,
        users: Arc<U>,
        projects: Arc<P>,
        contributors: Arc<R>,
        clock: Arc<K>,
    ) -> Self {
        Self {
            issues,
            users,
            projects,
            contributors,
            clock,
            config: LifecycleConfig::default(),
        }
    }

    /// Replaces the service configuration.
    #[must_use]
    pub fn with_config(mut self, config: LifecycleConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &LifecycleConfig {
        &self.config
    }

    /// Reports a new issue in the `New` status.
    ///
    /// # Errors
    ///
    /// Returns [`IssueLifecycleError::ProjectNotFound`] or
    /// [`IssueLifecycleError::UserNotFound`] for unknown references,
    /// [`IssueLifecycleError::RoleForbidden`] when the reporter may not
    /// manage issues, and [`IssueLifecycleError::Domain`] for an empty title.
    #[instrument(skip(self, request), fields(project_id = %request.project_id))]
    pub async fn create(&self, request: CreateIssueRequest) -> IssueLifecycleResult<Issue> {
        let project = self.load_project(request.project_id).await?;
        let reporter = self.load_user(request.reporter_id).await?;
        require(&reporter, Capability::ManageIssue)?;
        let title = IssueTitle::new(request.title)?;

        let issue = Issue::new(
            NewIssue {
                project_id: project.id(),
                title,
                description: request.description,
                reporter: reporter.id(),
                priority: request.priority,
            },
            &*self.clock,
        );
        self.issues.save(&issue).await?;
        info!(issue_id = %issue.id(), reporter = %reporter.id(), "issue created");
        Ok(issue)
    }

    /// Retrieves an issue.
    ///
    /// # Errors
    ///
    /// Returns [`IssueLifecycleError::IssueNotFound`] when the issue does not
    /// exist.
    pub async fn get_issue(&self, issue_id: IssueId) -> IssueLifecycleResult<Issue> {
        self.load_issue(issue_id).await
    }

    /// Lists every issue of a project.
    ///
    /// # Errors
    ///
    /// Returns [`IssueLifecycleError::ProjectNotFound`] when the project does
    /// not exist.
    pub async fn list_by_project(&self, project_id: ProjectId) -> IssueLifecycleResult<Vec<Issue>> {
        let project = self.load_project(project_id).await?;
        Ok(self.issues.find_by_project(project.id()).await?)
    }

    /// Lists a project's issues in the given status.
    ///
    /// # Errors
    ///
    /// Returns [`IssueLifecycleError::ProjectNotFound`] when the project does
    /// not exist.
    pub async fn list_by_project_and_status(
        &self,
        project_id: ProjectId,
        status: IssueStatus,
    ) -> IssueLifecycleResult<Vec<Issue>> {
        let project = self.load_project(project_id).await?;
        Ok(self
            .issues
            .find_by_project_and_status(project.id(), status)
            .await?)
    }

    /// Lists issues assigned to a user.
    ///
    /// # Errors
    ///
    /// Returns [`IssueLifecycleError::UserNotFound`] when the user does not
    /// exist.
    pub async fn list_by_assignee(&self, user_id: UserId) -> IssueLifecycleResult<Vec<Issue>> {
        let user = self.load_user(user_id).await?;
        Ok(self.issues.find_by_assignee(user.id()).await?)
    }

    /// Overwrites an issue's title, description, and priority.
    ///
    /// Allowed in every status.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for unknown references,
    /// [`IssueLifecycleError::RoleForbidden`] when the user may not manage
    /// issues, and [`IssueLifecycleError::Domain`] for an empty title.
    #[instrument(skip(self, request), fields(issue_id = %request.issue_id))]
    pub async fn modify(&self, request: ModifyIssueRequest) -> IssueLifecycleResult<Issue> {
        let mut issue = self.load_issue(request.issue_id).await?;
        let user = self.load_user(request.user_id).await?;
        require(&user, Capability::ManageIssue)?;
        let title = IssueTitle::new(request.title)?;

        issue.revise(title, request.description, request.priority, &*self.clock);
        self.issues.save(&issue).await?;
        info!(user = %user.id(), "issue modified");
        Ok(issue)
    }

    /// Deletes an issue and returns its last state.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for unknown references and
    /// [`IssueLifecycleError::RoleForbidden`] when the user may not manage
    /// issues.
    #[instrument(skip(self))]
    pub async fn delete(&self, issue_id: IssueId, user_id: UserId) -> IssueLifecycleResult<Issue> {
        let issue = self.load_issue(issue_id).await?;
        let user = self.load_user(user_id).await?;
        require(&user, Capability::ManageIssue)?;

        self.issues.delete(issue.id()).await?;
        info!("issue deleted");
        Ok(issue)
    }

    /// Assigns an issue, forcing its status to `Assigned`.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for unknown references and
    /// [`IssueLifecycleError::RoleBadRequest`] unless the acting user may
    /// assign issues and the assignee may fix them.
    #[instrument(skip(self))]
    pub async fn set_assignee(
        &self,
        issue_id: IssueId,
        user_id: UserId,
        assignee_id: UserId,
    ) -> IssueLifecycleResult<Issue> {
        let mut issue = self.load_issue(issue_id).await?;
        let user = self.load_user(user_id).await?;
        let assignee = self.load_user(assignee_id).await?;
        if !user.can(Capability::SetAssignee) || !assignee.can(Capability::ChangeAssignedToFixed) {
            warn!(
                user_role = user.role().as_str(),
                assignee_role = assignee.role().as_str(),
                "assignment rejected"
            );
            return Err(IssueLifecycleError::RoleBadRequest {
                user: user.id(),
                assignee: assignee.id(),
            });
        }

        let previous = issue.status();
        issue.assign(assignee.id());
        self.issues.save(&issue).await?;
        info!(%previous, "issue assigned");
        Ok(issue)
    }

    /// Advances an issue one step along the lifecycle table.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for unknown references,
    /// [`IssueLifecycleError::MethodNotAllowed`] for a `New` issue, and
    /// [`IssueLifecycleError::RoleForbidden`] when the user lacks the
    /// capability the transition requires.
    #[instrument(skip(self))]
    pub async fn change_status(
        &self,
        user_id: UserId,
        issue_id: IssueId,
    ) -> IssueLifecycleResult<Issue> {
        let mut issue = self.load_issue(issue_id).await?;
        let user = self.load_user(user_id).await?;
        let transition =
            issue
                .status()
                .transition()
                .ok_or(IssueLifecycleError::MethodNotAllowed {
                    issue: issue.id(),
                    status: issue.status(),
                })?;
        require(&user, transition.required)?;

        issue.apply_transition(transition, user.id());
        self.issues.save(&issue).await?;
        info!(from = %transition.from, to = %transition.to, "issue status changed");
        Ok(issue)
    }

    /// Recommends the contributing developer whose fix history best matches
    /// the issue's wording.
    ///
    /// # Errors
    ///
    /// Returns [`IssueLifecycleError::IssueNotFound`] or
    /// [`IssueLifecycleError::ProjectNotFound`] for unknown references and
    /// [`IssueLifecycleError::NoCandidate`] when no eligible developer scores
    /// above zero.
    #[instrument(skip(self))]
    pub async fn candidate_user(&self, issue_id: IssueId) -> IssueLifecycleResult<User> {
        let issue = self.load_issue(issue_id).await?;
        let project = self.load_project(issue.project_id()).await?;
        let target = IssueTokens::from_issue(&issue);

        let mut scored = Vec::new();
        for user in self.users.find_all().await? {
            if user.role() != Role::Developer {
                continue;
            }
            let memberships = self.contributors.find_by_contributor(user.id()).await?;
            if !memberships
                .iter()
                .any(|link| link.project_id() == project.id())
            {
                continue;
            }
            let fixed = self.issues.find_by_fixer(user.id()).await?;
            let score =
                recommendation::score_developer(&fixed, &target, &self.config.recommendation);
            debug!(developer = %user.id(), fixed = fixed.len(), score, "scored developer");
            scored.push((user, score));
        }

        recommendation::select_candidate(scored).ok_or(IssueLifecycleError::NoCandidate(issue.id()))
    }

    /// Summarizes a project's issues.
    ///
    /// # Errors
    ///
    /// Returns [`IssueLifecycleError::ProjectNotFound`] when the project does
    /// not exist.
    #[instrument(skip(self))]
    pub async fn issue_statistics(
        &self,
        project_id: ProjectId,
    ) -> IssueLifecycleResult<IssueStatistics> {
        let project = self.load_project(project_id).await?;
        let issues = self.issues.find_by_project(project.id()).await?;
        let usernames: HashMap<UserId, String> = self
            .users
            .find_all()
            .await?
            .into_iter()
            .map(|user| (user.id(), user.username().to_owned()))
            .collect();

        Ok(statistics::aggregate(
            &issues,
            &usernames,
            &self.config.statistics,
        ))
    }

    /// Appends a comment to an issue.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for unknown references and
    /// [`IssueLifecycleError::Domain`] for an empty message.
    #[instrument(skip(self, message))]
    pub async fn add_comment(
        &self,
        issue_id: IssueId,
        author_id: UserId,
        message: impl Into<String> + Send,
    ) -> IssueLifecycleResult<Comment> {
        let mut issue = self.load_issue(issue_id).await?;
        let author = self.load_user(author_id).await?;
        let comment = Comment::new(message, author.id(), &*self.clock)?;

        issue.add_comment(comment.clone());
        self.issues.save(&issue).await?;
        info!(comment_id = %comment.id(), "comment added");
        Ok(comment)
    }

    /// Lists an issue's comments in their external representation.
    ///
    /// # Errors
    ///
    /// Returns [`IssueLifecycleError::IssueNotFound`] when the issue does not
    /// exist.
    pub async fn list_comments(
        &self,
        issue_id: IssueId,
    ) -> IssueLifecycleResult<Vec<CommentResponse>> {
        let issue = self.load_issue(issue_id).await?;
        Ok(issue.comments().iter().map(CommentResponse::from).collect())
    }

    async fn load_issue(&self, id: IssueId) -> IssueLifecycleResult<Issue> {
        self.issues
            .find_by_id(id)
            .await?
            .ok_or(IssueLifecycleError::IssueNotFound(id))
    }

    async fn load_user(&self, id: UserId) -> IssueLifecycleResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or(IssueLifecycleError::UserNotFound(id))
    }

    async fn load_project(&self, id: ProjectId) -> IssueLifecycleResult<Project> {
        self.projects
            .find_by_id(id)
            .await?
            .ok_or(IssueLifecycleError::ProjectNotFound(id))
    }
}

/// Fails with [`IssueLifecycleError::RoleForbidden`] unless `user` holds
/// `capability`.
fn require(user: &User, capability: Capability) -> IssueLifecycleResult<()> {
    if user.can(capability) {
        return Ok(());
    }
    warn!(user = %user.id(), role = user.role().as_str(), %capability, "capability check failed");
    Err(IssueLifecycleError::RoleForbidden {
        user: user.id(),
        capability,
    })
}
