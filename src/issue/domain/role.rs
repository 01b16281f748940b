//! User roles and the capabilities they grant.
//!
//! Roles form a closed set. Each role maps to a fixed set of capabilities
//! through [`ROLE_CAPABILITIES`]; permission checks are membership tests
//! against that table, so a single role may hold several capabilities.

use super::ParseRoleError;
use serde::{Deserialize, Serialize};

/// Permission gating a specific issue mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Create, modify, and delete issues.
    ManageIssue,
    /// Assign an issue to a user.
    SetAssignee,
    /// Move an issue from `Assigned` to `Fixed`. Also makes a user eligible
    /// as an assignee.
    ChangeAssignedToFixed,
    /// Move an issue from `Fixed` to `Resolved`.
    ChangeFixedToResolved,
    /// Close resolved or reopened issues, and reopen closed ones.
    ChangeResolvedToClosed,
}

impl Capability {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ManageIssue => "manage_issue",
            Self::SetAssignee => "set_assignee",
            Self::ChangeAssignedToFixed => "change_assigned_to_fixed",
            Self::ChangeFixedToResolved => "change_fixed_to_resolved",
            Self::ChangeResolvedToClosed => "change_resolved_to_closed",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role held by a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// System administrator holding every capability.
    Admin,
    /// Project leader who triages, assigns, and closes issues.
    ProjectLeader,
    /// Developer who fixes assigned issues.
    Developer,
    /// Tester who reports issues and verifies fixes.
    Tester,
    /// Plain account without issue permissions.
    User,
}

/// Capabilities granted to each role.
pub static ROLE_CAPABILITIES: [(Role, &[Capability]); 5] = [
    (
        Role::Admin,
        &[
            Capability::ManageIssue,
            Capability::SetAssignee,
            Capability::ChangeAssignedToFixed,
            Capability::ChangeFixedToResolved,
            Capability::ChangeResolvedToClosed,
        ],
    ),
    (
        Role::ProjectLeader,
        &[
            Capability::ManageIssue,
            Capability::SetAssignee,
            Capability::ChangeResolvedToClosed,
        ],
    ),
    (Role::Developer, &[Capability::ChangeAssignedToFixed]),
    (
        Role::Tester,
        &[Capability::ManageIssue, Capability::ChangeFixedToResolved],
    ),
    (Role::User, &[]),
];

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::ProjectLeader => "project_leader",
            Self::Developer => "developer",
            Self::Tester => "tester",
            Self::User => "user",
        }
    }

    /// Returns the capabilities granted to this role.
    #[must_use]
    pub fn capabilities(self) -> &'static [Capability] {
        ROLE_CAPABILITIES
            .iter()
            .find(|(role, _)| *role == self)
            .map(|&(_, granted)| granted)
            .unwrap_or_default()
    }

    /// Returns `true` when this role grants `capability`.
    #[must_use]
    pub fn grants(self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "admin" => Ok(Self::Admin),
            "project_leader" => Ok(Self::ProjectLeader),
            "developer" => Ok(Self::Developer),
            "tester" => Ok(Self::Tester),
            "user" => Ok(Self::User),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}
