//! Issue aggregate root, lifecycle status, priority, and comments.

use super::{
    CommentId, IssueDomainError, IssueId, ParseIssuePriorityError, ParseIssueStatusError,
    ProjectId, StatusTransition, TransitionEffect, UserId,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Issue lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueStatus {
    /// Reported but not yet assigned.
    New,
    /// Assigned to a developer.
    Assigned,
    /// Fixed by a developer, awaiting verification.
    Fixed,
    /// Fix verified.
    Resolved,
    /// Closed.
    Close,
    /// Reopened after having been closed.
    Reopened,
}

impl IssueStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Assigned => "ASSIGNED",
            Self::Fixed => "FIXED",
            Self::Resolved => "RESOLVED",
            Self::Close => "CLOSE",
            Self::Reopened => "REOPENED",
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for IssueStatus {
    type Error = ParseIssueStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "NEW" => Ok(Self::New),
            "ASSIGNED" => Ok(Self::Assigned),
            "FIXED" => Ok(Self::Fixed),
            "RESOLVED" => Ok(Self::Resolved),
            "CLOSE" => Ok(Self::Close),
            "REOPENED" => Ok(Self::Reopened),
            _ => Err(ParseIssueStatusError(value.to_owned())),
        }
    }
}

/// Issue priority. New issues default to [`IssuePriority::Major`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssuePriority {
    /// Blocks further work.
    Blocker,
    /// Severe impact.
    Critical,
    /// Significant impact.
    #[default]
    Major,
    /// Limited impact.
    Minor,
    /// Cosmetic.
    Trivial,
}

impl IssuePriority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blocker => "BLOCKER",
            Self::Critical => "CRITICAL",
            Self::Major => "MAJOR",
            Self::Minor => "MINOR",
            Self::Trivial => "TRIVIAL",
        }
    }
}

impl TryFrom<&str> for IssuePriority {
    type Error = ParseIssuePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "BLOCKER" => Ok(Self::Blocker),
            "CRITICAL" => Ok(Self::Critical),
            "MAJOR" => Ok(Self::Major),
            "MINOR" => Ok(Self::Minor),
            "TRIVIAL" => Ok(Self::Trivial),
            _ => Err(ParseIssuePriorityError(value.to_owned())),
        }
    }
}

/// Non-empty issue title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueTitle(String);

impl IssueTitle {
    /// Creates a validated issue title.
    ///
    /// The title is stored verbatim; trimming is only used for the emptiness
    /// check so that recommendation tokens match what the reporter typed.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::EmptyIssueTitle`] when the title is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, IssueDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(IssueDomainError::EmptyIssueTitle);
        }
        Ok(Self(raw))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for IssueTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for IssueTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A comment attached to an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    message: String,
    created_at: DateTime<Utc>,
    author: Option<UserId>,
}

impl Comment {
    /// Creates a new comment written by `author`.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::EmptyCommentMessage`] when the message is
    /// empty after trimming.
    pub fn new(
        message: impl Into<String>,
        author: UserId,
        clock: &impl Clock,
    ) -> Result<Self, IssueDomainError> {
        let text = message.into();
        if text.trim().is_empty() {
            return Err(IssueDomainError::EmptyCommentMessage);
        }
        Ok(Self {
            id: CommentId::new(),
            message: text,
            created_at: clock.utc(),
            author: Some(author),
        })
    }

    /// Reconstructs a comment from persisted storage.
    #[must_use]
    pub fn from_persisted(
        id: CommentId,
        message: impl Into<String>,
        created_at: DateTime<Utc>,
        author: Option<UserId>,
    ) -> Self {
        Self {
            id,
            message: message.into(),
            created_at,
            author,
        }
    }

    /// Returns the comment identifier.
    #[must_use]
    pub const fn id(&self) -> CommentId {
        self.id
    }

    /// Returns the comment text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the author, if still known.
    #[must_use]
    pub const fn author(&self) -> Option<UserId> {
        self.author
    }
}

/// Parameter object for opening a new issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    /// Owning project.
    pub project_id: ProjectId,
    /// Validated title.
    pub title: IssueTitle,
    /// Free-form description.
    pub description: String,
    /// Reporting user.
    pub reporter: UserId,
    /// Requested priority; [`IssuePriority::default`] when absent.
    pub priority: Option<IssuePriority>,
}

/// Issue aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    id: IssueId,
    project_id: ProjectId,
    title: IssueTitle,
    description: String,
    priority: Option<IssuePriority>,
    status: IssueStatus,
    reporter: UserId,
    assignee: Option<UserId>,
    fixer: Option<UserId>,
    comments: Vec<Comment>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted issue aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedIssueData {
    /// Persisted issue identifier.
    pub id: IssueId,
    /// Persisted owning project.
    pub project_id: ProjectId,
    /// Persisted title.
    pub title: IssueTitle,
    /// Persisted description.
    pub description: String,
    /// Persisted priority, if any.
    pub priority: Option<IssuePriority>,
    /// Persisted lifecycle status.
    pub status: IssueStatus,
    /// Persisted reporter.
    pub reporter: UserId,
    /// Persisted assignee, if any.
    pub assignee: Option<UserId>,
    /// Persisted fixer, if any.
    pub fixer: Option<UserId>,
    /// Persisted comments in creation order.
    pub comments: Vec<Comment>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted last modification timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Issue {
    /// Opens a new issue in the [`IssueStatus::New`] state.
    #[must_use]
    pub fn new(new_issue: NewIssue, clock: &impl Clock) -> Self {
        let NewIssue {
            project_id,
            title,
            description,
            reporter,
            priority,
        } = new_issue;

        Self {
            id: IssueId::new(),
            project_id,
            title,
            description,
            priority: Some(priority.unwrap_or_default()),
            status: IssueStatus::New,
            reporter,
            assignee: None,
            fixer: None,
            comments: Vec::new(),
            created_at: clock.utc(),
            updated_at: None,
        }
    }

    /// Reconstructs an issue from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedIssueData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            title: data.title,
            description: data.description,
            priority: data.priority,
            status: data.status,
            reporter: data.reporter,
            assignee: data.assignee,
            fixer: data.fixer,
            comments: data.comments,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the issue identifier.
    #[must_use]
    pub const fn id(&self) -> IssueId {
        self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the issue title.
    #[must_use]
    pub const fn title(&self) -> &IssueTitle {
        &self.title
    }

    /// Returns the issue description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the issue priority, if set.
    #[must_use]
    pub const fn priority(&self) -> Option<IssuePriority> {
        self.priority
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> IssueStatus {
        self.status
    }

    /// Returns the reporting user.
    #[must_use]
    pub const fn reporter(&self) -> UserId {
        self.reporter
    }

    /// Returns the assigned user, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<UserId> {
        self.assignee
    }

    /// Returns the user who fixed the issue, if any.
    #[must_use]
    pub const fn fixer(&self) -> Option<UserId> {
        self.fixer
    }

    /// Returns the comments in creation order.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last modification timestamp, if the issue was modified.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Overwrites title, description, and priority.
    ///
    /// The priority is replaced even when `priority` is `None`, which clears
    /// it.
    pub fn revise(
        &mut self,
        title: IssueTitle,
        description: impl Into<String>,
        priority: Option<IssuePriority>,
        clock: &impl Clock,
    ) {
        self.title = title;
        self.description = description.into();
        self.priority = priority;
        self.updated_at = Some(clock.utc());
    }

    /// Assigns the issue, forcing the status to [`IssueStatus::Assigned`]
    /// whatever it was before.
    pub const fn assign(&mut self, assignee: UserId) {
        self.assignee = Some(assignee);
        self.status = IssueStatus::Assigned;
    }

    /// Applies a lifecycle transition performed by `actor`.
    ///
    /// Callers are expected to have looked the transition up from the
    /// current status and checked the actor's capability.
    pub fn apply_transition(&mut self, transition: &StatusTransition, actor: UserId) {
        debug_assert_eq!(transition.from, self.status);
        self.status = transition.to;
        match transition.effect {
            TransitionEffect::RecordFixer => self.fixer = Some(actor),
            TransitionEffect::None => {}
        }
    }

    /// Appends a comment.
    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }
}
