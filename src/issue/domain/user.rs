//! User accounts.

use super::{Capability, Role, UserId};
use serde::{Deserialize, Serialize};

/// A user account with a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: String,
    role: Role,
}

impl User {
    /// Creates a new user with a fresh identifier.
    #[must_use]
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self::from_persisted(UserId::new(), username, role)
    }

    /// Reconstructs a user from persisted storage.
    #[must_use]
    pub fn from_persisted(id: UserId, username: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            username: username.into(),
            role,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the user's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns `true` when the user's role grants `capability`.
    #[must_use]
    pub fn can(&self, capability: Capability) -> bool {
        self.role.grants(capability)
    }
}
