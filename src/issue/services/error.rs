//! Errors returned by the issue lifecycle service.

use crate::issue::{
    domain::{Capability, IssueDomainError, IssueId, IssueStatus, ProjectId, UserId},
    ports::RepositoryError,
};
use thiserror::Error;

/// Coarse classification of a service failure, suitable for mapping onto a
/// transport status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A referenced record does not exist.
    NotFound,
    /// The acting user's role lacks a required capability.
    Forbidden,
    /// The request is malformed or names an ineligible user.
    BadRequest,
    /// The operation is not valid in the issue's current status.
    MethodNotAllowed,
    /// Storage failed.
    Internal,
}

impl ErrorKind {
    /// Returns the HTTP status code conventionally used for this kind.
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::Forbidden => 403,
            Self::BadRequest => 400,
            Self::MethodNotAllowed => 405,
            Self::Internal => 500,
        }
    }
}

/// Service-level errors for issue lifecycle operations.
#[derive(Debug, Error)]
pub enum IssueLifecycleError {
    /// The project does not exist.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// The user does not exist.
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    /// The issue does not exist.
    #[error("issue not found: {0}")]
    IssueNotFound(IssueId),

    /// The acting user's role lacks the capability the operation needs.
    #[error("user {user} lacks the {capability} capability")]
    RoleForbidden {
        /// Acting user.
        user: UserId,
        /// Missing capability.
        capability: Capability,
    },

    /// The assigning user may not assign, or the assignee may not fix issues.
    #[error("user {user} cannot assign user {assignee}")]
    RoleBadRequest {
        /// Acting user.
        user: UserId,
        /// Proposed assignee.
        assignee: UserId,
    },

    /// The issue's status has no outgoing transition.
    #[error("issue {issue} is {status} and must be assigned before it can advance")]
    MethodNotAllowed {
        /// Issue that was to be advanced.
        issue: IssueId,
        /// Its current status.
        status: IssueStatus,
    },

    /// No contributing developer has a matching fix history.
    #[error("no candidate assignee found for issue {0}")]
    NoCandidate(IssueId),

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] IssueDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl IssueLifecycleError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ProjectNotFound(_)
            | Self::UserNotFound(_)
            | Self::IssueNotFound(_)
            | Self::NoCandidate(_) => ErrorKind::NotFound,
            Self::RoleForbidden { .. } => ErrorKind::Forbidden,
            Self::RoleBadRequest { .. } | Self::Domain(_) => ErrorKind::BadRequest,
            Self::MethodNotAllowed { .. } => ErrorKind::MethodNotAllowed,
            Self::Repository(_) => ErrorKind::Internal,
        }
    }
}

/// Result type for issue lifecycle service operations.
pub type IssueLifecycleResult<T> = Result<T, IssueLifecycleError>;
