//! Domain model for issue tracking.
//!
//! Issues, users, projects, and contributor links are plain aggregates. Role
//! permissions and the status state machine are expressed as static tables
//! so that both can be inspected and tested on their own.

mod error;
mod ids;
mod issue;
mod project;
mod role;
mod transition;
mod user;

pub use error::{IssueDomainError, ParseIssuePriorityError, ParseIssueStatusError, ParseRoleError};
pub use ids::{CommentId, IssueId, ProjectId, UserId};
pub use issue::{
    Comment, Issue, IssuePriority, IssueStatus, IssueTitle, NewIssue, PersistedIssueData,
};
pub use project::{Project, ProjectContributor};
pub use role::{Capability, ROLE_CAPABILITIES, Role};
pub use transition::{STATUS_TRANSITIONS, StatusTransition, TransitionEffect};
pub use user::User;
