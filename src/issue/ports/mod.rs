//! Port contracts for issue tracking.
//!
//! Ports define infrastructure-agnostic interfaces used by the lifecycle
//! service.

pub mod error;
pub mod issue;
pub mod project;
pub mod user;

pub use error::{RepositoryError, RepositoryResult};
pub use issue::IssueRepository;
pub use project::{ContributorRepository, ProjectRepository};
pub use user::UserRepository;
