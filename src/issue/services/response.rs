//! Serializable response shapes for callers outside the core.

use crate::issue::domain::{Comment, CommentId, UserId};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// External representation of a comment.
///
/// `author_id` is omitted when the author is no longer known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentResponse {
    /// Comment identifier.
    pub id: CommentId,
    /// Comment text.
    pub message: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Author identifier, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<UserId>,
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id(),
            message: comment.message().to_owned(),
            created_at: comment.created_at(),
            author_id: comment.author(),
        }
    }
}
