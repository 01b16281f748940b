//! Application services for issue lifecycle orchestration.

mod config;
mod error;
mod lifecycle;
pub mod recommendation;
mod response;
pub mod statistics;

pub use config::{LifecycleConfig, RecommendationConfig, StatisticsConfig};
pub use error::{ErrorKind, IssueLifecycleError, IssueLifecycleResult};
pub use lifecycle::{CreateIssueRequest, IssueLifecycleService, ModifyIssueRequest};
pub use recommendation::{IssueTokens, score_developer, select_candidate};
pub use response::CommentResponse;
pub use statistics::{IssueStatistics, aggregate};
