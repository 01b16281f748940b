//! `PostgreSQL` adapters for issue tracking persistence.
//!
//! Table definitions live in `migrations/`.

mod blocking;
mod models;
mod repository;
mod schema;

pub use blocking::IssuePgPool;
pub use repository::{
    PostgresContributorRepository, PostgresIssueRepository, PostgresProjectRepository,
    PostgresUserRepository,
};
