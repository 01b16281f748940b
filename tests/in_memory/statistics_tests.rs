//! In-memory integration tests for project statistics.

use super::helpers::{Tracker, tracker};
use issue_tracker::issue::{
    domain::{IssueStatus, Role},
    services::{CreateIssueRequest, LifecycleConfig},
};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn statistics_reflect_reported_and_assigned_issues(tracker: Tracker) -> eyre::Result<()> {
    let leader = tracker.user("lead", Role::ProjectLeader).await?;
    let tester = tracker.user("tess", Role::Tester).await?;
    let developer = tracker.user("dev", Role::Developer).await?;
    let project = tracker.project("tracker", &leader).await?;

    let mut ids = Vec::new();
    for title in ["quiet", "busy", "chatty"] {
        let issue = tracker
            .service
            .create(CreateIssueRequest::new(project.id(), tester.id(), title, ""))
            .await?;
        ids.push(issue.id());
    }
    let &[_, busy, chatty] = ids.as_slice() else {
        eyre::bail!("expected three issues");
    };
    tracker
        .service
        .set_assignee(busy, leader.id(), developer.id())
        .await?;
    for (issue, count) in [(busy, 1), (chatty, 2)] {
        for n in 0..count {
            tracker
                .service
                .add_comment(issue, developer.id(), format!("note {n}"))
                .await?;
        }
    }

    let statistics = tracker.service.issue_statistics(project.id()).await?;

    eyre::ensure!(
        statistics.status_distribution.get(&IssueStatus::New) == Some(&2),
        "new count wrong"
    );
    eyre::ensure!(
        statistics.status_distribution.get(&IssueStatus::Assigned) == Some(&1),
        "assigned count wrong"
    );
    eyre::ensure!(
        statistics.top_commented_issue_titles == ["chatty", "busy", "quiet"],
        "unexpected ranking {:?}",
        statistics.top_commented_issue_titles
    );
    let json = serde_json::to_value(&statistics)?;
    eyre::ensure!(
        json == json!({
            "statusDistribution": { "NEW": 2, "ASSIGNED": 1 },
            "reporterDistribution": { "tess": 3 },
            "assigneeDistribution": { "dev": 1, "No Assignee": 2 },
            "topCommentedIssueTitles": ["chatty", "busy", "quiet"]
        }),
        "unexpected JSON {json}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn configured_labels_and_limit_apply(tracker: Tracker) -> eyre::Result<()> {
    let tester = tracker.user("tess", Role::Tester).await?;
    let project = tracker.project("tracker", &tester).await?;
    for title in ["one", "two"] {
        tracker
            .service
            .create(CreateIssueRequest::new(project.id(), tester.id(), title, ""))
            .await?;
    }
    let config = LifecycleConfig::from_json(
        r#"{"statistics": {"top_commented_limit": 1, "missing_assignee_label": "Unassigned"}}"#,
    )?;
    let service = tracker.service.clone().with_config(config);

    let statistics = service.issue_statistics(project.id()).await?;

    eyre::ensure!(
        statistics.assignee_distribution.get("Unassigned") == Some(&2),
        "custom label not used"
    );
    eyre::ensure!(
        statistics.top_commented_issue_titles == ["one"],
        "limit not applied"
    );
    Ok(())
}
