//! Tunables for recommendation scoring and statistics aggregation.

use serde::{Deserialize, Serialize};

/// Weights applied when scoring developers against an issue.
///
/// # Examples
///
/// ```
/// use issue_tracker::issue::services::RecommendationConfig;
///
/// let config = RecommendationConfig::default();
/// assert_eq!(config.title_weight, 10);
/// assert_eq!(config.description_weight, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Points per historical occurrence of a matching title word.
    pub title_weight: u64,
    /// Points per historical occurrence of a matching description word.
    pub description_weight: u64,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            title_weight: 10,
            description_weight: 1,
        }
    }
}

/// Settings for project issue statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsConfig {
    /// Number of titles reported in the top-commented list.
    pub top_commented_limit: usize,
    /// Distribution key used when an issue's reporter cannot be resolved.
    pub missing_reporter_label: String,
    /// Distribution key used when an issue has no resolvable assignee.
    pub missing_assignee_label: String,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            top_commented_limit: 5,
            missing_reporter_label: "No Reporter".to_owned(),
            missing_assignee_label: "No Assignee".to_owned(),
        }
    }
}

/// Configuration for [`super::IssueLifecycleService`].
///
/// Missing keys fall back to their defaults when deserializing, so a partial
/// document only overrides what it names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Recommendation scoring weights.
    pub recommendation: RecommendationConfig,
    /// Statistics aggregation settings.
    pub statistics: StatisticsConfig,
}

impl LifecycleConfig {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when the document is malformed or a
    /// value has the wrong type.
    pub fn from_json(document: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(document)
    }
}
