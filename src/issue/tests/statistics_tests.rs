//! Tests for project issue statistics.

use std::collections::{BTreeMap, HashMap};

use super::harness::{Harness, IssueSeed, harness};
use crate::issue::{
    domain::{IssueStatus, ProjectId, Role, UserId},
    services::{IssueLifecycleError, LifecycleConfig, StatisticsConfig, aggregate},
};
use rstest::rstest;

#[rstest]
fn status_distribution_counts_each_status() {
    let project = ProjectId::new();
    let reporter = UserId::new();
    let issues = [
        IssueSeed::new(project, reporter, "a").build(),
        IssueSeed::new(project, reporter, "b").build(),
        IssueSeed {
            status: IssueStatus::Assigned,
            ..IssueSeed::new(project, reporter, "c")
        }
        .build(),
    ];

    let statistics = aggregate(&issues, &HashMap::new(), &StatisticsConfig::default());

    let expected = BTreeMap::from([(IssueStatus::New, 2), (IssueStatus::Assigned, 1)]);
    assert_eq!(statistics.status_distribution, expected);
}

#[rstest]
fn top_commented_sorts_descending_and_keeps_tie_order() {
    let project = ProjectId::new();
    let reporter = UserId::new();
    let issues: Vec<_> = [
        ("five", 5),
        ("three-a", 3),
        ("three-b", 3),
        ("zero", 0),
        ("one", 1),
        ("four", 4),
    ]
    .into_iter()
    .map(|(title, comment_count)| {
        IssueSeed {
            comment_count,
            ..IssueSeed::new(project, reporter, title)
        }
        .build()
    })
    .collect();

    let statistics = aggregate(&issues, &HashMap::new(), &StatisticsConfig::default());

    assert_eq!(
        statistics.top_commented_issue_titles,
        ["five", "four", "three-a", "three-b", "one"]
    );
}

#[rstest]
fn top_commented_respects_configured_limit() {
    let project = ProjectId::new();
    let reporter = UserId::new();
    let issues = [
        IssueSeed::new(project, reporter, "a").build(),
        IssueSeed {
            comment_count: 1,
            ..IssueSeed::new(project, reporter, "b")
        }
        .build(),
    ];
    let config = StatisticsConfig {
        top_commented_limit: 1,
        ..StatisticsConfig::default()
    };

    let statistics = aggregate(&issues, &HashMap::new(), &config);

    assert_eq!(statistics.top_commented_issue_titles, ["b"]);
}

#[rstest]
fn people_distributions_use_placeholders_for_unknown_users() {
    let project = ProjectId::new();
    let known = UserId::new();
    let departed = UserId::new();
    let usernames = HashMap::from([(known, "kim".to_owned())]);
    let issues = [
        IssueSeed {
            assignee: Some(known),
            ..IssueSeed::new(project, known, "a")
        }
        .build(),
        IssueSeed::new(project, known, "b").build(),
        IssueSeed {
            assignee: Some(departed),
            ..IssueSeed::new(project, departed, "c")
        }
        .build(),
    ];

    let statistics = aggregate(&issues, &usernames, &StatisticsConfig::default());

    assert_eq!(
        statistics.reporter_distribution,
        BTreeMap::from([("kim".to_owned(), 2), ("No Reporter".to_owned(), 1)])
    );
    assert_eq!(
        statistics.assignee_distribution,
        BTreeMap::from([("kim".to_owned(), 1), ("No Assignee".to_owned(), 2)])
    );
}

#[rstest]
fn empty_project_yields_empty_statistics() {
    let statistics = aggregate(&[], &HashMap::new(), &StatisticsConfig::default());

    assert!(statistics.status_distribution.is_empty());
    assert!(statistics.reporter_distribution.is_empty());
    assert!(statistics.assignee_distribution.is_empty());
    assert!(statistics.top_commented_issue_titles.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn issue_statistics_covers_only_the_project(harness: Harness) {
    let tester = harness.add_user("tess", Role::Tester).await;
    let developer = harness.add_user("dev", Role::Developer).await;
    let project = harness.add_project("tracker", &tester).await;
    let other = harness.add_project("other", &tester).await;
    harness
        .store(
            &IssueSeed {
                status: IssueStatus::Assigned,
                assignee: Some(developer.id()),
                comment_count: 2,
                ..IssueSeed::new(project.id(), tester.id(), "assigned")
            }
            .build(),
        )
        .await;
    harness
        .store(&IssueSeed::new(project.id(), tester.id(), "fresh").build())
        .await;
    harness
        .store(&IssueSeed::new(other.id(), tester.id(), "elsewhere").build())
        .await;

    let statistics = harness
        .service
        .issue_statistics(project.id())
        .await
        .expect("statistics should be computed");

    assert_eq!(
        statistics.status_distribution,
        BTreeMap::from([(IssueStatus::New, 1), (IssueStatus::Assigned, 1)])
    );
    assert_eq!(
        statistics.reporter_distribution,
        BTreeMap::from([("tess".to_owned(), 2)])
    );
    assert_eq!(
        statistics.assignee_distribution,
        BTreeMap::from([("dev".to_owned(), 1), ("No Assignee".to_owned(), 1)])
    );
    assert_eq!(statistics.top_commented_issue_titles, ["assigned", "fresh"]);

    let json = serde_json::to_value(&statistics).expect("statistics serialize");
    assert_eq!(json["statusDistribution"]["NEW"], 1);
    assert_eq!(json["assigneeDistribution"]["No Assignee"], 1);
    assert_eq!(json["topCommentedIssueTitles"][0], "assigned");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn issue_statistics_requires_existing_project(harness: Harness) {
    let missing = ProjectId::new();
    let result = harness.service.issue_statistics(missing).await;
    assert!(matches!(result, Err(IssueLifecycleError::ProjectNotFound(id)) if id == missing));
}

#[rstest]
fn partial_config_document_keeps_other_defaults() {
    let config = LifecycleConfig::from_json(
        r#"{"statistics": {"top_commented_limit": 3}, "recommendation": {"title_weight": 4}}"#,
    )
    .expect("document should parse");

    assert_eq!(config.statistics.top_commented_limit, 3);
    assert_eq!(config.statistics.missing_reporter_label, "No Reporter");
    assert_eq!(config.recommendation.title_weight, 4);
    assert_eq!(config.recommendation.description_weight, 1);
}

#[rstest]
#[case("")]
#[case(r#"{"statistics": {"top_commented_limit": "many"}}"#)]
fn malformed_config_document_is_rejected(#[case] document: &str) {
    assert!(LifecycleConfig::from_json(document).is_err());
}
