//! In-memory adapters for tests and embedding.

mod directory;
mod issue;

pub use directory::{
    InMemoryContributorRepository, InMemoryProjectRepository, InMemoryUserRepository,
};
pub use issue::InMemoryIssueRepository;
