//! Projects and contributor membership links.

use super::{ProjectId, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A project owning a set of issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    title: String,
    admin: UserId,
    created_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new project administered by `admin`.
    #[must_use]
    pub fn new(title: impl Into<String>, admin: UserId, clock: &impl Clock) -> Self {
        Self {
            id: ProjectId::new(),
            title: title.into(),
            admin,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(
        id: ProjectId,
        title: impl Into<String>,
        admin: UserId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            admin,
            created_at,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the administering user.
    #[must_use]
    pub const fn admin(&self) -> UserId {
        self.admin
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Link recording that a user contributes to a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectContributor {
    project_id: ProjectId,
    contributor_id: UserId,
}

impl ProjectContributor {
    /// Links `contributor_id` to `project_id`.
    #[must_use]
    pub const fn new(project_id: ProjectId, contributor_id: UserId) -> Self {
        Self {
            project_id,
            contributor_id,
        }
    }

    /// Returns the linked project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the contributing user.
    #[must_use]
    pub const fn contributor_id(&self) -> UserId {
        self.contributor_id
    }
}
