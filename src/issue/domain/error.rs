//! Error types for issue domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain issue values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IssueDomainError {
    /// The issue title is empty after trimming.
    #[error("issue title must not be empty")]
    EmptyIssueTitle,

    /// The comment message is empty after trimming.
    #[error("comment message must not be empty")]
    EmptyCommentMessage,
}

/// Error returned while parsing issue statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown issue status: {0}")]
pub struct ParseIssueStatusError(pub String);

/// Error returned while parsing issue priorities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown issue priority: {0}")]
pub struct ParseIssuePriorityError(pub String);

/// Error returned while parsing user roles from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown user role: {0}")]
pub struct ParseRoleError(pub String);
