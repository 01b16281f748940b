//! Read-only aggregation of a project's issues.

use super::StatisticsConfig;
use crate::issue::domain::{Issue, IssueStatus, UserId};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Distribution summary of a project's issues.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueStatistics {
    /// Number of issues in each status.
    pub status_distribution: BTreeMap<IssueStatus, u64>,
    /// Number of issues reported by each username.
    pub reporter_distribution: BTreeMap<String, u64>,
    /// Number of issues assigned to each username.
    pub assignee_distribution: BTreeMap<String, u64>,
    /// Titles of the most commented issues, most comments first.
    pub top_commented_issue_titles: Vec<String>,
}

/// Aggregates `issues`, resolving user identifiers through `usernames`.
///
/// Users missing from `usernames` are counted under the configured
/// placeholder labels. Issues with equal comment counts keep their input
/// order in the top-commented list.
#[must_use]
pub fn aggregate<S: BuildHasher>(
    issues: &[Issue],
    usernames: &HashMap<UserId, String, S>,
    config: &StatisticsConfig,
) -> IssueStatistics {
    let mut statistics = IssueStatistics::default();

    for issue in issues {
        *statistics
            .status_distribution
            .entry(issue.status())
            .or_insert(0) += 1;

        let reporter = usernames
            .get(&issue.reporter())
            .unwrap_or(&config.missing_reporter_label);
        *statistics
            .reporter_distribution
            .entry(reporter.clone())
            .or_insert(0) += 1;

        let assignee = issue
            .assignee()
            .and_then(|id| usernames.get(&id))
            .unwrap_or(&config.missing_assignee_label);
        *statistics
            .assignee_distribution
            .entry(assignee.clone())
            .or_insert(0) += 1;
    }

    let mut ranked: Vec<&Issue> = issues.iter().collect();
    ranked.sort_by_key(|issue| Reverse(issue.comments().len()));
    statistics.top_commented_issue_titles = ranked
        .into_iter()
        .take(config.top_commented_limit)
        .map(|issue| issue.title().as_str().to_owned())
        .collect();

    statistics
}
