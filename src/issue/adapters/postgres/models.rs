//! Diesel row models for issue tracking persistence.

use super::schema::{issues, project_contributors, projects, users};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Row model for user accounts.
#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// User identifier.
    pub id: uuid::Uuid,
    /// Login name.
    pub username: String,
    /// Role tag.
    pub role: String,
}

/// Row model for projects.
#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Project identifier.
    pub id: uuid::Uuid,
    /// Project title.
    pub title: String,
    /// Administering user.
    pub admin_id: uuid::Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Row model for contributor links.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = project_contributors)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ContributorRow {
    /// Linked project.
    pub project_id: uuid::Uuid,
    /// Contributing user.
    pub contributor_id: uuid::Uuid,
}

/// Row model for issues.
#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = issues)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(treat_none_as_null = true)]
pub struct IssueRow {
    /// Issue identifier.
    pub id: uuid::Uuid,
    /// Owning project.
    pub project_id: uuid::Uuid,
    /// Issue title.
    pub title: String,
    /// Issue description.
    pub description: String,
    /// Optional priority tag.
    pub priority: Option<String>,
    /// Lifecycle status tag.
    pub status: String,
    /// Reporting user.
    pub reporter_id: uuid::Uuid,
    /// Assigned user.
    pub assignee_id: Option<uuid::Uuid>,
    /// User who fixed the issue.
    pub fixer_id: Option<uuid::Uuid>,
    /// Comments JSON array.
    pub comments: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}
